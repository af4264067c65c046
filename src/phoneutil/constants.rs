/// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but longer numbers have been
// observed in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// Acceptable punctuation found in phone numbers: dashes, white space, full
// stops, slashes, brackets and tildes, plus the letter 'x' used as a carrier
// information placeholder. Full-width variants are also present.
// This string is spliced into character classes; the ASCII brackets must
// stay escaped.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const DIGITS: &str = r"\p{Nd}";

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";

/// Default prefix put in front of an extension when formatting, unless the
/// region's metadata declares a preferred one.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";
