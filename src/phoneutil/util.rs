use std::borrow::Cow;
use std::sync::Arc;

use log::trace;

use crate::asyoutype::AsYouTypeFormatter;
use crate::i18n::RegionCode;
use crate::matcher::{MatcherApi, RegexBasedMatcher};
use crate::metadata::source::MetadataLookup;
use crate::metadata::types::{NumberFormat, PhoneMetadata, PhoneNumberDesc};
use crate::metadata::{
    CallingCodeRegistry, FormattingMetadataSource, MetadataLoader, RegionMetadataSource,
};
use crate::phonenumber::{CountryCodeSource, PhoneNumber};
use crate::regex_util::{RegexConsume, RegexFullMatch};

use super::constants::{
    DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
    RFC3966_EXTN_PREFIX,
};
use super::enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType};
use super::errors::{NumberLengthError, ParseError, PhoneNumberUtilError};
use super::helpers::{
    self, desc_for_type, normalize_digits_only, prefix_number_with_country_calling_code,
};
use super::regexps::PhoneUtilRegexps;

type Result<T> = std::result::Result<T, PhoneNumberUtilError>;

/// The parse / validate / classify / format engine.
///
/// Metadata is bootstrapped lazily: the first operation touching a region or
/// calling code suspends on its resource fetch; all later operations on the
/// same key are synchronous computation over the resident records.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Fixed regular expressions plus the shared cache for metadata patterns.
    reg_exps: PhoneUtilRegexps,

    /// Country calling code to sharing regions, main country first.
    registry: CallingCodeRegistry,

    region_source: RegionMetadataSource,
    formatting_source: FormattingMetadataSource,
}

impl PhoneNumberUtil {
    pub fn new(loader: Arc<dyn MetadataLoader>, registry: CallingCodeRegistry) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneUtilRegexps::new(),
            registry,
            region_source: RegionMetadataSource::new(loader.clone()),
            formatting_source: FormattingMetadataSource::new(loader),
        }
    }

    /// Convenience constructor using the compiled calling-code registry.
    pub fn with_compiled_registry(loader: Arc<dyn MetadataLoader>) -> Self {
        Self::new(loader, CallingCodeRegistry::compiled())
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.supported_regions()
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.registry.supported_calling_codes()
    }

    /// Returns the region code that owns the given country calling code: the
    /// main country of a shared group, or the unknown region code when the
    /// calling code is not registered.
    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        match self.registry.region_codes_for(country_calling_code).first() {
            Some(region_code) => region_code.as_str(),
            None => RegionCode::get_unknown(),
        }
    }

    async fn metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> MetadataLookup {
        if region_code == RegionCode::non_geo_entity() {
            self.formatting_source
                .metadata_for_calling_code(country_calling_code)
                .await
        } else {
            self.region_source.metadata_for_region(region_code).await
        }
    }

    /// Builds an as-you-type formatter for numbers entered in the given
    /// region. The region's metadata is fetched here, once; every keystroke
    /// afterwards is synchronous.
    pub async fn as_you_type_formatter(&self, region_code: &str) -> Result<AsYouTypeFormatter> {
        let metadata = self.region_source.metadata_for_region(region_code).await?;
        Ok(AsYouTypeFormatter::new(
            metadata,
            self.reg_exps.regexp_cache.clone(),
        ))
    }

    // ---------------------------------------------------------------------
    // Parsing
    // ---------------------------------------------------------------------

    pub async fn parse(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> std::result::Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false).await
    }

    /// Like [`parse`](Self::parse), but records the raw input text and how
    /// the country calling code was determined on the returned number.
    pub async fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> std::result::Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true).await
    }

    async fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
        keep_raw_input: bool,
    ) -> std::result::Result<PhoneNumber, ParseError> {
        let mut national_number = self
            .extract_possible_number(number_to_parse)
            .ok_or(ParseError::NotANumber)?;
        if !self.is_viable_phone_number(&national_number) {
            trace!("Input '{number_to_parse}' is not a viable phone number");
            return Err(ParseError::NotANumber);
        }
        if default_region.is_none() && !self.starts_with_plus_chars(&national_number) {
            return Err(ParseError::InvalidCountryCode);
        }

        let extension = self.maybe_strip_extension(&mut national_number);
        let (country_code, country_code_source, normalized_national) = self
            .maybe_extract_country_code(&national_number, default_region)
            .await?;

        if normalized_national.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn);
        }
        if normalized_national.len() > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLongNsn);
        }

        let mut phone_number = PhoneNumber::default();
        phone_number.set_country_code(country_code);
        set_italian_leading_zeros(&normalized_national, &mut phone_number);
        phone_number.set_national_number(
            normalized_national
                .parse::<u64>()
                .map_err(|_| ParseError::NotANumber)?,
        );
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_string());
            phone_number.set_country_code_source(country_code_source);
        }
        Ok(phone_number)
    }

    /// Strips leading noise up to the first plausible start character and
    /// trailing characters that cannot be part of a number.
    fn extract_possible_number(&self, raw: &str) -> Option<String> {
        let start = self.reg_exps.valid_start_char_pattern.find(raw)?.start();
        let mut number = raw[start..].to_string();
        self.trim_unwanted_end_chars(&mut number);
        if number.is_empty() {
            None
        } else {
            Some(number)
        }
    }

    fn trim_unwanted_end_chars(&self, phone_number: &mut String) {
        let mut bytes_to_trim = 0;
        for char in phone_number.chars().rev() {
            if !self
                .reg_exps
                .unwanted_end_char_pattern
                .full_match(&char.to_string())
            {
                break;
            }
            bytes_to_trim += char.len_utf8();
        }
        if bytes_to_trim > 0 {
            let new_len = phone_number.len() - bytes_to_trim;
            phone_number.truncate(new_len);
        }
    }

    fn is_viable_phone_number(&self, phone_number: &str) -> bool {
        self.reg_exps
            .valid_phone_number_pattern
            .full_match(phone_number)
    }

    fn starts_with_plus_chars(&self, phone_number: &str) -> bool {
        self.reg_exps
            .plus_chars_pattern
            .find_start(phone_number)
            .is_some()
    }

    fn strip_plus_chars<'b>(&self, phone_number: &'b str) -> Option<&'b str> {
        self.reg_exps
            .plus_chars_pattern
            .find_start(phone_number)
            .map(|matched| &phone_number[matched.end()..])
    }

    /// Looks for an extension suffix and removes it, provided the remaining
    /// head is still a viable phone number on its own.
    fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let (start, extension) = {
            let captures = self.reg_exps.extn_pattern.captures(number)?;
            let digits = captures.iter().skip(1).flatten().next()?;
            (captures.get(0)?.start(), digits.as_str().to_string())
        };
        if !self.is_viable_phone_number(&number[..start]) {
            return None;
        }
        number.truncate(start);
        Some(extension)
    }

    /// Determines the country calling code: an explicit '+', the default
    /// region's international dialing prefix, or the default region itself.
    /// Returns the code, how it was found, and the remaining national number
    /// as normalized digits (national prefix already stripped in the
    /// default-region case).
    async fn maybe_extract_country_code(
        &self,
        number: &str,
        default_region: Option<&str>,
    ) -> std::result::Result<(i32, CountryCodeSource, String), ParseError> {
        if let Some(rest) = self.strip_plus_chars(number) {
            let normalized = normalize_digits_only(rest);
            if normalized.len() < MIN_LENGTH_FOR_NSN {
                return Err(ParseError::TooShortAfterIdd);
            }
            let (code, national) = self
                .extract_country_code(&normalized)
                .ok_or(ParseError::InvalidCountryCode)?;
            return Ok((code, CountryCodeSource::FromNumberWithPlusSign, national));
        }

        let Some(region) = default_region else {
            return Err(ParseError::InvalidCountryCode);
        };
        let metadata = self.region_source.metadata_for_region(region).await?;
        let normalized = normalize_digits_only(number);

        if let Some(metadata) = &metadata {
            if let Some(rest) = self.maybe_strip_idd(&normalized, metadata)? {
                if rest.len() < MIN_LENGTH_FOR_NSN {
                    return Err(ParseError::TooShortAfterIdd);
                }
                let (code, national) = self
                    .extract_country_code(rest)
                    .ok_or(ParseError::InvalidCountryCode)?;
                return Ok((code, CountryCodeSource::FromNumberWithIdd, national));
            }
        }

        let Some(metadata) = metadata else {
            return Err(ParseError::InvalidCountryCode);
        };
        let mut national = normalized;
        self.maybe_strip_national_prefix_and_transform(&mut national, &metadata)?;
        Ok((
            metadata.country_code(),
            CountryCodeSource::FromDefaultCountry,
            national,
        ))
    }

    /// Reads a 1- to 3-digit country calling code off the front of the given
    /// digit string. Country calling codes never start with zero.
    fn extract_country_code(&self, normalized: &str) -> Option<(i32, String)> {
        if normalized.is_empty() || normalized.starts_with('0') {
            return None;
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(normalized.len()) {
            let potential: i32 = normalized[..length].parse().ok()?;
            if self.registry.contains(potential) {
                return Some((potential, normalized[length..].to_string()));
            }
        }
        None
    }

    /// Strips the region's international dialing prefix (e.g. "011" in the
    /// US) when present. The digit following the prefix must be non-zero,
    /// since no country calling code starts with zero.
    fn maybe_strip_idd<'b>(
        &self,
        normalized: &'b str,
        metadata: &PhoneMetadata,
    ) -> std::result::Result<Option<&'b str>, ParseError> {
        let idd_pattern = metadata.international_prefix();
        if idd_pattern.is_empty() {
            return Ok(None);
        }
        let regex = self.reg_exps.regexp_cache.get_regex(idd_pattern)?;
        let Some(matched) = regex.find_start(normalized) else {
            return Ok(None);
        };
        let rest = &normalized[matched.end()..];
        if rest.starts_with('0') || rest.is_empty() {
            return Ok(None);
        }
        Ok(Some(rest))
    }

    /// Strips the national prefix per the region's parsing rule, applying
    /// the transform rule when it carries captured groups. The prefix is not
    /// stripped when doing so would turn a number matching the general
    /// descriptor into one that does not.
    fn maybe_strip_national_prefix_and_transform(
        &self,
        number: &mut String,
        metadata: &PhoneMetadata,
    ) -> std::result::Result<(), ParseError> {
        let prefix_pattern = metadata.national_prefix_for_parsing();
        if prefix_pattern.is_empty() || number.is_empty() {
            return Ok(());
        }
        let regex = self.reg_exps.regexp_cache.get_regex(prefix_pattern)?;
        let Some(captures) = regex.captures_start(number) else {
            return Ok(());
        };

        let transform_rule = metadata.national_prefix_transform_rule();
        let stripped = if !transform_rule.is_empty() && captures.get(1).is_some() {
            let mut transformed = String::new();
            captures.expand(transform_rule, &mut transformed);
            let matched_end = captures.get(0).map(|m| m.end()).unwrap_or(0);
            transformed.push_str(&number[matched_end..]);
            transformed
        } else {
            let matched_end = captures.get(0).map(|m| m.end()).unwrap_or(0);
            number[matched_end..].to_string()
        };

        let general = &metadata.general_desc;
        let matched_before = self
            .matcher_api
            .match_national_number(number, general, false);
        if matched_before
            && !self
                .matcher_api
                .match_national_number(&stripped, general, false)
        {
            trace!("Not stripping national prefix: '{stripped}' no longer matches the general descriptor");
            return Ok(());
        }
        *number = stripped;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Validation and classification
    // ---------------------------------------------------------------------

    pub async fn is_valid_number(&self, phone_number: &PhoneNumber) -> Result<bool> {
        Ok(self.get_number_type(phone_number).await? != PhoneNumberType::Unknown)
    }

    pub async fn is_valid_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> Result<bool> {
        let country_calling_code = phone_number.country_code();
        let metadata = match self
            .metadata_for_region_or_calling_code(country_calling_code, region_code)
            .await
        {
            Ok(Some(metadata)) => metadata,
            Ok(None) => return Ok(false),
            Err(err) => return Err(err.into()),
        };
        if metadata.country_code() != country_calling_code {
            return Ok(false);
        }
        let national = phone_number.national_significant_number();
        Ok(self.number_type_helper(&national, &metadata) != PhoneNumberType::Unknown)
    }

    /// Whether the number's length is admissible for its region, without
    /// running the category patterns.
    pub async fn is_possible_number(&self, phone_number: &PhoneNumber) -> Result<bool> {
        let country_calling_code = phone_number.country_code();
        if !self.registry.contains(country_calling_code) {
            return Ok(false);
        }
        let region_code = self
            .region_code_for_country_code(country_calling_code)
            .to_string();
        let Some(metadata) = self
            .metadata_for_region_or_calling_code(country_calling_code, &region_code)
            .await?
        else {
            return Ok(false);
        };
        let national = phone_number.national_significant_number();
        Ok(helpers::test_number_length(&national, &metadata).is_ok())
    }

    /// Like [`is_possible_number`](Self::is_possible_number), but reports
    /// which length class the number falls into, or why it cannot be a
    /// number of its region.
    pub async fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<std::result::Result<NumberLengthType, NumberLengthError>> {
        let country_calling_code = phone_number.country_code();
        if !self.registry.contains(country_calling_code) {
            return Ok(Err(NumberLengthError::InvalidLength));
        }
        let region_code = self
            .region_code_for_country_code(country_calling_code)
            .to_string();
        let Some(metadata) = self
            .metadata_for_region_or_calling_code(country_calling_code, &region_code)
            .await?
        else {
            return Ok(Err(NumberLengthError::InvalidLength));
        };
        let national = phone_number.national_significant_number();
        Ok(helpers::test_number_length(&national, &metadata))
    }

    pub async fn get_number_type(&self, phone_number: &PhoneNumber) -> Result<PhoneNumberType> {
        let region_code = self.region_code_for_number(phone_number).await?;
        let Some(metadata) = self
            .metadata_for_region_or_calling_code(phone_number.country_code(), &region_code)
            .await?
        else {
            return Ok(PhoneNumberType::Unknown);
        };
        let national = phone_number.national_significant_number();
        Ok(self.number_type_helper(&national, &metadata))
    }

    /// Resolves the region a number belongs to. For shared calling codes the
    /// sharing regions are tried in main-country-first order, disambiguating
    /// by leading-digits pattern where the metadata carries one and by
    /// category match otherwise.
    pub async fn region_code_for_number(&self, phone_number: &PhoneNumber) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.registry.region_codes_for(country_calling_code);
        if region_codes.is_empty() {
            trace!("Missing/invalid country calling code ({country_calling_code})");
            return Ok(RegionCode::get_unknown().to_string());
        }
        if region_codes.len() == 1 {
            return Ok(region_codes[0].clone());
        }
        let national = phone_number.national_significant_number();
        for region_code in region_codes {
            let Some(metadata) = self.region_source.metadata_for_region(region_code).await? else {
                continue;
            };
            if metadata.has_leading_digits() {
                let leading = self
                    .reg_exps
                    .regexp_cache
                    .get_regex(metadata.leading_digits())?;
                if leading.find_start(&national).is_some() {
                    return Ok(region_code.clone());
                }
            } else if self.number_type_helper(&national, &metadata) != PhoneNumberType::Unknown {
                return Ok(region_code.clone());
            }
        }
        Ok(RegionCode::get_unknown().to_string())
    }

    fn number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            return PhoneNumberType::VoiceMail;
        }

        let same_pattern = metadata.fixed_line.national_number_pattern()
            == metadata.mobile.national_number_pattern();
        if self.is_number_matching_desc(national_number, &metadata.fixed_line) {
            if same_pattern || self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!("Number '{national_number}' is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        if !same_pattern && self.is_number_matching_desc(national_number, &metadata.mobile) {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(&self, national_number: &str, desc: &PhoneNumberDesc) -> bool {
        self.matcher_api
            .match_national_number(national_number, desc, false)
    }

    /// Whether the metadata declares numbers of the given type at all.
    pub async fn supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Result<Vec<PhoneNumberType>> {
        use strum::IntoEnumIterator;
        let Some(metadata) = self.region_source.metadata_for_region(region_code).await? else {
            return Ok(Vec::new());
        };
        Ok(PhoneNumberType::iter()
            .filter(|number_type| {
                !matches!(
                    number_type,
                    PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
                )
            })
            .filter(|number_type| {
                let desc = desc_for_type(&metadata, *number_type);
                desc.has_national_number_pattern() || desc.has_example_number()
            })
            .collect())
    }

    // ---------------------------------------------------------------------
    // Formatting
    // ---------------------------------------------------------------------

    pub async fn format(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        if phone_number.national_number() == 0 && phone_number.has_raw_input() {
            // Unparseable numbers that kept their raw input just use that.
            return Ok(phone_number.raw_input().to_string());
        }
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = phone_number.national_significant_number();

        if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164: no national formatting applies and
            // extensions are never rendered.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }

        // Formatting information for regions sharing a calling code is
        // contained in the metadata of its main country, e.g. US for NANPA.
        let region_code = self
            .region_code_for_country_code(country_calling_code)
            .to_string();
        let Some(metadata) = self
            .metadata_for_region_or_calling_code(country_calling_code, &region_code)
            .await?
        else {
            return Ok(formatted_number);
        };

        formatted_number = self
            .format_nsn(&formatted_number, &metadata, number_format)?
            .into_owned();
        if let Some(extension) = formatted_extension(phone_number, &metadata, number_format) {
            formatted_number.push_str(&extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    fn format_nsn<'b>(
        &self,
        number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        // When intl_number_format exists, it formats the national number for
        // every non-national output style.
        let available_formats = if metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };
        let formatting_pattern =
            self.choose_formatting_pattern_for_number(available_formats, number)?;
        match formatting_pattern {
            Some(formatting_pattern) => {
                self.format_nsn_using_pattern(number, formatting_pattern, number_format)
            }
            // Unformatted digit fallback when no template matches.
            None => Ok(Cow::Borrowed(number)),
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>> {
        for format in available_formats {
            // We always use the last leading_digits_pattern, as it is the
            // most detailed.
            if let Some(leading_digits) = format.leading_digits_pattern.last() {
                let regex = self.reg_exps.regexp_cache.get_regex(leading_digits)?;
                if regex.find_start(national_number).is_none() {
                    continue;
                }
            }
            let pattern_to_match = self.reg_exps.regexp_cache.get_regex(format.pattern())?;
            if pattern_to_match.full_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        let national_prefix_formatting_rule =
            formatting_pattern.national_prefix_formatting_rule();
        let number_format_rule: Cow<'_, str> = if matches!(number_format, PhoneNumberFormat::National)
            && !national_prefix_formatting_rule.is_empty()
        {
            // The formatting pattern only knows the national significant
            // number; splice the national prefix rule in for its first group.
            self.reg_exps
                .first_group_capturing_pattern
                .replace(formatting_pattern.format(), national_prefix_formatting_rule)
        } else {
            Cow::Borrowed(formatting_pattern.format())
        };

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_regex(formatting_pattern.pattern())?;
        let formatted_number =
            pattern_to_match.replace_all(national_number, &*number_format_rule);

        if matches!(number_format, PhoneNumberFormat::Rfc3966) {
            // First consume any leading punctuation, then turn every
            // separator group into a single "-".
            let mut stripped = formatted_number.into_owned();
            if let Some(matched) = self.reg_exps.separator_pattern.find_start(&stripped) {
                stripped.drain(..matched.end());
            }
            let joined = self
                .reg_exps
                .separator_pattern
                .replace_all(&stripped, "-")
                .into_owned();
            return Ok(Cow::Owned(joined));
        }
        Ok(formatted_number)
    }
}

/// Returns the formatted extension of a phone number, if one was specified.
fn formatted_extension(
    phone_number: &PhoneNumber,
    metadata: &PhoneMetadata,
    number_format: PhoneNumberFormat,
) -> Option<String> {
    if !phone_number.has_extension() || phone_number.extension().is_empty() {
        return None;
    }
    let prefix = if matches!(number_format, PhoneNumberFormat::Rfc3966) {
        RFC3966_EXTN_PREFIX
    } else if metadata.has_preferred_extn_prefix() {
        metadata.preferred_extn_prefix()
    } else {
        DEFAULT_EXTN_PREFIX
    };
    Some(fast_cat::concat_str!(prefix, phone_number.extension()))
}

/// Leading zeros are kept out of the numeric national number; record them on
/// the side so the national significant number survives a round trip.
fn set_italian_leading_zeros(national_number: &str, phone_number: &mut PhoneNumber) {
    if national_number.len() > 1 && national_number.starts_with('0') {
        phone_number.set_italian_leading_zero(true);
        let bytes = national_number.as_bytes();
        let mut zeros = 1;
        while zeros < bytes.len() - 1 && bytes[zeros] == b'0' {
            zeros += 1;
        }
        if zeros != 1 {
            phone_number.set_number_of_leading_zeros(zeros as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zeros_are_counted_but_capped_before_the_last_digit() {
        let mut number = PhoneNumber::default();
        set_italian_leading_zeros("0236618300", &mut number);
        assert!(number.italian_leading_zero());
        assert_eq!(number.number_of_leading_zeros(), 1);

        let mut number = PhoneNumber::default();
        set_italian_leading_zeros("00236618300", &mut number);
        assert_eq!(number.number_of_leading_zeros(), 2);

        let mut number = PhoneNumber::default();
        set_italian_leading_zeros("0000", &mut number);
        assert_eq!(number.number_of_leading_zeros(), 3);

        let mut number = PhoneNumber::default();
        set_italian_leading_zeros("6502530000", &mut number);
        assert!(!number.italian_leading_zero());
    }
}
