use log::error;

use crate::metadata::types::PhoneNumberDesc;
use crate::regex_util::{RegexConsume, RegexFullMatch};
use crate::regexp_cache::{InvalidRegexError, RegexCache};

/// Internal national-number matching API used to isolate the underlying
/// matcher implementation and allow different implementations to be swapped
/// in easily.
pub trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches the descriptor's possible-length set and
    /// national number pattern. When `allow_prefix_match` is set, the pattern
    /// only has to match a prefix of the number.
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> bool;
}

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(128),
        }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;

        if allow_prefix_match {
            Ok(regexp.matches_start(phone_number))
        } else {
            Ok(regexp.full_match(phone_number))
        }
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool,
    ) -> bool {
        // Cheap pre-filter before touching the regex. Trailing digits are
        // permitted on a prefix match, so the possible-length set only
        // constrains full matches.
        if !allow_prefix_match && !number_desc.possible_length.is_empty() {
            let actual_length = number.chars().count() as i32;
            if !number_desc.possible_length.contains(&actual_length) {
                return false;
            }
        }
        let national_number_pattern = number_desc.national_number_pattern();
        // We don't want to consider it a prefix match when matching non-empty
        // input against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(_) => {
                error!("Invalid regex! {}", national_number_pattern);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(pattern: &str, lengths: &[i32]) -> PhoneNumberDesc {
        PhoneNumberDesc {
            national_number_pattern: Some(pattern.to_string()),
            possible_length: lengths.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_excluded_length_before_pattern() {
        let matcher = RegexBasedMatcher::new();
        let desc = desc(r"\d+", &[3]);
        assert!(matcher.match_national_number("110", &desc, false));
        assert!(!matcher.match_national_number("1100", &desc, false));
    }

    #[test]
    fn prefix_match_allows_trailing_digits() {
        let matcher = RegexBasedMatcher::new();
        let desc = desc("11[02]", &[3]);
        assert!(!matcher.match_national_number("1104", &desc, false));
        assert!(matcher.match_national_number("1104", &desc, true));
        assert!(!matcher.match_national_number("9104", &desc, true));
    }

    #[test]
    fn empty_pattern_never_matches() {
        let matcher = RegexBasedMatcher::new();
        let desc = PhoneNumberDesc::default();
        assert!(!matcher.match_national_number("110", &desc, true));
    }
}
