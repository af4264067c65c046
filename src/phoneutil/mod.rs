pub mod constants;
pub mod enums;
pub mod errors;
pub(crate) mod helpers;
mod regexps;
pub mod util;

pub use enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub use errors::{NumberLengthError, ParseError, PhoneNumberUtilError};
pub use util::PhoneNumberUtil;
