use std::sync::Arc;

use regex::Regex;

use super::constants::{DIGITS, MIN_LENGTH_FOR_NSN, PLUS_CHARS, VALID_PUNCTUATION};
use crate::regexp_cache::RegexCache;

/// Builds the regular-expression pattern matching extension suffixes:
/// RFC3966 ";ext=", explicit labels like "ext." or "extension", and the
/// single-character markers "x", "#", "~". The single capturing group holds
/// the extension digits.
fn create_extn_pattern() -> String {
    format!(
        "[ \u{00A0}\\t,]*\
        (?:;ext=|e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|[x\u{FF58}#\u{FF03}~\u{FF5E}])\
        [:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*({DIGITS}{{1,7}})#?"
    )
}

/// Helper struct holding the fixed regular expressions of the number engine,
/// plus the shared cache used for metadata-supplied patterns.
pub(super) struct PhoneUtilRegexps {
    pub regexp_cache: Arc<RegexCache>,

    /// One or more leading plus characters (ASCII or full-width).
    pub plus_chars_pattern: Regex,

    /// Acceptable first characters of a phone number: digits in any script
    /// or a plus sign. Everything before the first such character is noise.
    pub valid_start_char_pattern: Regex,

    /// Trailing characters to remove: anything that is not alphanumeric or
    /// '#' (which may mark a preceding extension block).
    pub unwanted_end_char_pattern: Regex,

    /// Groups of valid punctuation characters, used as separators.
    pub separator_pattern: Regex,

    /// Extension suffix anchored at the end of the input.
    pub extn_pattern: Regex,

    /// Checks we have at least `MIN_LENGTH_FOR_NSN` digits without
    /// punctuation, or at least three digits with leading plus signs and
    /// punctuation allowed, with an optional extension suffix.
    pub valid_phone_number_pattern: Regex,

    /// The first `$n` placeholder of a format template. `\d` rather than `1`,
    /// since some dialing plans do not use group one first.
    pub first_group_capturing_pattern: Regex,
}

impl PhoneUtilRegexps {
    pub fn new() -> Self {
        let extn_patterns = create_extn_pattern();
        let valid_phone_number = format!(
            "[{PLUS_CHARS}]*(?:[{VALID_PUNCTUATION}]*{DIGITS}){{3,}}\
            [{VALID_PUNCTUATION}{DIGITS}]*\
            |{DIGITS}{{{MIN_LENGTH_FOR_NSN}}}"
        );

        Self {
            regexp_cache: Arc::new(RegexCache::with_capacity(128)),
            plus_chars_pattern: Regex::new(&format!("[{PLUS_CHARS}]+")).unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{PLUS_CHARS}{DIGITS}]")).unwrap(),
            unwanted_end_char_pattern: Regex::new(r"[^\p{N}\p{L}#]").unwrap(),
            separator_pattern: Regex::new(&format!("[{VALID_PUNCTUATION}]+")).unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{extn_patterns})$")).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!(
                "(?i)^(?:{valid_phone_number})(?:{extn_patterns})?$"
            ))
            .unwrap(),
            first_group_capturing_pattern: Regex::new(r"(\$\d)").unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::regex_util::RegexFullMatch;

    use super::PhoneUtilRegexps;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneUtilRegexps::new();
    }

    #[test]
    fn punctuation_class_covers_brackets() {
        let reg_exps = PhoneUtilRegexps::new();
        assert!(reg_exps.separator_pattern.full_match("[ ]/"));
        assert!(reg_exps.valid_phone_number_pattern.full_match("[650] 253-0000"));
    }

    #[test]
    fn viable_number_pattern_accepts_punctuated_numbers() {
        let reg_exps = PhoneUtilRegexps::new();
        assert!(reg_exps.valid_phone_number_pattern.full_match("(650) 253-0000"));
        assert!(reg_exps.valid_phone_number_pattern.full_match("+44 20 7031 3000"));
        assert!(reg_exps.valid_phone_number_pattern.full_match("15"));
        assert!(!reg_exps.valid_phone_number_pattern.full_match("1"));
        assert!(!reg_exps.valid_phone_number_pattern.full_match("hello"));
    }

    #[test]
    fn extension_pattern_captures_digits() {
        let reg_exps = PhoneUtilRegexps::new();
        let captures = reg_exps.extn_pattern.captures("650 253 0000 ext. 234").unwrap();
        assert_eq!(captures.get(1).unwrap().as_str(), "234");
        let captures = reg_exps.extn_pattern.captures("650 253 0000 x45").unwrap();
        assert_eq!(captures.get(1).unwrap().as_str(), "45");
    }
}
