use regex::{Captures, Match, Regex};

/// Whole-string matching, equivalent to anchoring the pattern at both ends.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

/// Start-anchored matching: the pattern must match a prefix of the input,
/// trailing characters are allowed.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        match self.find(s) {
            Some(matched) => matched.start() == 0 && matched.end() == s.len(),
            None => false,
        }
    }
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        if captures.get(0)?.start() != 0 {
            return None;
        }
        Some(captures)
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None;
        }
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_requires_whole_string() {
        let re = Regex::new(r"\d{3}").unwrap();
        assert!(re.full_match("123"));
        assert!(!re.full_match("1234"));
        assert!(!re.full_match("a123"));
    }

    #[test]
    fn find_start_allows_trailing_input() {
        let re = Regex::new(r"\d{3}").unwrap();
        assert!(re.find_start("1234").is_some());
        assert!(re.find_start("a123").is_none());
    }
}
