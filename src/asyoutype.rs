use std::sync::Arc;

use crate::metadata::types::{NumberFormat, PhoneMetadata};
use crate::phoneutil::helpers::normalize_digits_only;
use crate::regexp_cache::RegexCache;

// Longest run of digit placeholders a formatting template is derived from.
// Comfortably above the longest national significant number.
const TEMPLATE_FILLER: &str = "999999999999999999";

/// Minimum count of entered digits before leading-digits patterns are
/// trusted to narrow the candidate formats.
const MIN_LEADING_DIGITS_LENGTH: usize = 3;

/// Incremental formatter fed one character per keystroke.
///
/// Construct one through
/// [`PhoneNumberUtil::as_you_type_formatter`](crate::PhoneNumberUtil::as_you_type_formatter);
/// that is where the region's metadata gets fetched. Each keystroke re-runs
/// formatting over the whole accumulated input, so deleting is done by
/// [`clear`](Self::clear) and replaying.
pub struct AsYouTypeFormatter {
    metadata: Option<Arc<PhoneMetadata>>,
    regexp_cache: Arc<RegexCache>,

    /// Everything entered so far, verbatim. The fallback output.
    accumulated_input: String,
    /// The decimal digits of the input, normalized to ASCII.
    digits: String,
    /// Set once a character arrives that no formatting template can carry.
    able_to_format: bool,
}

impl AsYouTypeFormatter {
    pub(crate) fn new(metadata: Option<Arc<PhoneMetadata>>, regexp_cache: Arc<RegexCache>) -> Self {
        Self {
            metadata,
            regexp_cache,
            accumulated_input: String::new(),
            digits: String::new(),
            able_to_format: true,
        }
    }

    /// Feeds the next typed character and returns the best formatting of
    /// everything entered so far.
    pub fn input_digit(&mut self, next_char: char) -> String {
        self.accumulated_input.push(next_char);
        let normalized = normalize_digits_only(&next_char.to_string());
        if normalized.is_empty() {
            // Punctuation, '+' and other non-digits end template formatting;
            // from here on the raw input is echoed back.
            self.able_to_format = false;
        } else {
            self.digits.push_str(&normalized);
        }
        self.attempt_to_format()
            .unwrap_or_else(|| self.accumulated_input.clone())
    }

    pub fn clear(&mut self) {
        self.accumulated_input.clear();
        self.digits.clear();
        self.able_to_format = true;
    }

    fn attempt_to_format(&self) -> Option<String> {
        if !self.able_to_format || self.digits.is_empty() {
            return None;
        }
        let metadata = self.metadata.as_ref()?;
        for format in &metadata.number_format {
            if !self.format_matches_leading_digits(format) {
                continue;
            }
            let Some(template) = self.template_for(format) else {
                continue;
            };
            if let Some(partial) = fill_template(&template, &self.digits) {
                return Some(partial);
            }
        }
        None
    }

    fn format_matches_leading_digits(&self, format: &NumberFormat) -> bool {
        // With fewer digits entered than the patterns inspect, every format
        // is still in play.
        if self.digits.len() < MIN_LEADING_DIGITS_LENGTH {
            return true;
        }
        let Some(leading_digits) = format.leading_digits_pattern.last() else {
            return true;
        };
        match self.regexp_cache.get_regex(leading_digits) {
            Ok(regex) => regex
                .find(&self.digits)
                .map(|matched| matched.start() == 0)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Derives a formatting template by running the format over a string of
    /// placeholder digits: "(999) 999-9999" for the NANPA pattern, say.
    fn template_for(&self, format: &NumberFormat) -> Option<String> {
        let regex = self.regexp_cache.get_regex(format.pattern()).ok()?;
        let matched = regex.find(TEMPLATE_FILLER)?;
        if matched.start() != 0 {
            return None;
        }
        // A template shorter than the entered digits cannot carry them.
        if matched.as_str().len() < self.digits.len() {
            return None;
        }
        Some(
            regex
                .replace(matched.as_str(), format.format())
                .into_owned(),
        )
    }
}

/// Substitutes the entered digits for the template's placeholder digits and
/// cuts the template off right after the last one, so the caller sees
/// "(650) 253-" rather than a tail of nines.
fn fill_template(template: &str, digits: &str) -> Option<String> {
    let mut output = String::with_capacity(template.len());
    let mut remaining = digits.chars();
    let mut last_digit_end = 0;
    for template_char in template.chars() {
        if template_char == '9' {
            let Some(digit) = remaining.next() else {
                break;
            };
            output.push(digit);
            last_digit_end = output.len();
        } else {
            output.push(template_char);
        }
    }
    if remaining.next().is_some() {
        // The template ran out of placeholders before the digits ran out.
        return None;
    }
    output.truncate(last_digit_end);
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::fill_template;

    #[test]
    fn template_is_truncated_after_the_last_entered_digit() {
        assert_eq!(
            fill_template("(999) 999-9999", "650253").as_deref(),
            Some("(650) 253")
        );
        assert_eq!(
            fill_template("(999) 999-9999", "6502530000").as_deref(),
            Some("(650) 253-0000")
        );
        assert_eq!(fill_template("(999) 999-9999", "65025300001"), None);
        assert_eq!(fill_template("(999) 999-9999", "6").as_deref(), Some("(6"));
    }
}
