use std::cmp::max;

/// Records how the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    /// The number began with an explicit '+' (or its full-width variant).
    FromNumberWithPlusSign,
    /// The number began with the default region's international dialing
    /// prefix, e.g. "011" when parsing with a US default region.
    FromNumberWithIdd,
    /// No international prefix was present; the default region supplied the
    /// calling code.
    FromDefaultCountry,
    #[default]
    Unspecified,
}

/// An immutable parsed phone number.
///
/// The national significant number is stored as an integer plus a separate
/// leading-zero count, since leading zeros are semantically meaningful (the
/// Italian dialing plan distinguishes "06..." from "6...") but lost by the
/// numeric representation.
///
/// `raw_input` and `country_code_source` capture parsing context and are only
/// set by [`parse_and_keep_raw_input`](crate::PhoneNumberUtil::parse_and_keep_raw_input);
/// plain `parse` leaves them at their defaults so that equality compares the
/// number itself rather than how it was typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    number_of_leading_zeros: i32,
    raw_input: Option<String>,
    country_code_source: CountryCodeSource,
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self {
            country_code: 0,
            national_number: 0,
            extension: None,
            italian_leading_zero: false,
            // Only meaningful while the leading-zero flag is set; defaults to
            // a single zero like the wire format it is modeled on.
            number_of_leading_zeros: 1,
            raw_input: None,
            country_code_source: CountryCodeSource::Unspecified,
        }
    }
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: u64) -> Self {
        Self {
            country_code,
            national_number,
            ..Default::default()
        }
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    /// The national significant number as digits, leading zeros included.
    pub fn national_significant_number(&self) -> String {
        let zeros_start = if self.italian_leading_zero {
            "0".repeat(max(self.number_of_leading_zeros, 0) as usize)
        } else {
            String::new()
        };
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(self.national_number);
        fast_cat::concat_str!(&zeros_start, national_number)
    }

    pub(crate) fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub(crate) fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub(crate) fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub(crate) fn set_italian_leading_zero(&mut self, value: bool) {
        self.italian_leading_zero = value;
    }

    pub(crate) fn set_number_of_leading_zeros(&mut self, count: i32) {
        self.number_of_leading_zeros = count;
    }

    pub(crate) fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub(crate) fn set_country_code_source(&mut self, source: CountryCodeSource) {
        self.country_code_source = source;
    }
}
