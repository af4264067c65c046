use serde::{Deserialize, Serialize};

/// Descriptor for one number category: a national-number pattern, the set of
/// admissible digit-count lengths, and an optional example number.
///
/// An empty `possible_length` set means the lengths are inherited from the
/// owning metadata's general descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: Option<String>,
    pub possible_length: Vec<i32>,
    /// Lengths that are only dialable locally, e.g. without an area code.
    /// Never overlaps with `possible_length`.
    pub possible_length_local_only: Vec<i32>,
    pub example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// A display template for a matched national number.
///
/// `pattern` captures digit groups of the national significant number and
/// `format` rearranges them with `$1`-style placeholders. The last
/// `leading_digits_pattern` entry, when present, disambiguates which template
/// applies before the full pattern is known to match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_pattern: Vec<String>,
    /// How to render the national prefix in national-style output, with `$1`
    /// standing for the first matched group, e.g. `"0$1"` or `"($1)"`.
    pub national_prefix_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }
}

/// One metadata bundle, keyed either by region code (`id`) or, for
/// non-geographical entities, by country calling code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneMetadata {
    /// Uppercase ISO-3166 alpha-2 region code, or "001" for non-geo entities.
    pub id: String,
    pub country_code: i32,
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    /// Pattern stripped from the start of a nationally-dialed number when
    /// parsing. Falls back to `national_prefix` when absent.
    pub national_prefix_for_parsing: Option<String>,
    /// Replacement applied when `national_prefix_for_parsing` captures groups
    /// that must be carried over into the national significant number.
    pub national_prefix_transform_rule: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    /// Exactly one region in a shared calling-code group carries this flag.
    pub main_country_for_code: bool,
    /// Prefix pattern disambiguating regions that share a calling code.
    pub leading_digits: Option<String>,
    pub number_format: Vec<NumberFormat>,
    pub intl_number_format: Vec<NumberFormat>,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub standard_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,
    pub short_code: PhoneNumberDesc,
    pub carrier_specific: PhoneNumberDesc,
    pub sms_services: PhoneNumberDesc,
    pub emergency: PhoneNumberDesc,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing
            .as_deref()
            .unwrap_or_else(|| self.national_prefix())
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or("")
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or("")
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }
}

/// The wire-format document: a list of metadata records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}
