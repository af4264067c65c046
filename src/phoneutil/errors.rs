use thiserror::Error;

use crate::metadata::MetadataError;
use crate::regexp_cache::InvalidRegexError;

/// Failures of [`parse`](crate::PhoneNumberUtil::parse). The first group of
/// variants is caller input that could not be interpreted as a number; the
/// transparent variants surface metadata-layer faults, which always indicate
/// a deployment defect rather than bad input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("The string supplied did not seem to be a phone number")]
    NotANumber,
    #[error("The string supplied is too short to be a phone number")]
    TooShortNsn,
    #[error("The string supplied is too long to be a phone number")]
    TooLongNsn,
    #[error("Too short after the international dialing prefix")]
    TooShortAfterIdd,

    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Faults of the non-parsing engine operations (validation, classification,
/// formatting). These never signal "no answer"; predicates return negative
/// or unknown values for that. They only surface metadata-layer defects.
#[derive(Debug, Error)]
pub enum PhoneNumberUtilError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Outcomes of testing a number against a region's possible lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumberLengthError {
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
    #[error("The number's length matches no valid number for this region")]
    InvalidLength,
}
