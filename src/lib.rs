mod asyoutype;
mod matcher;
mod phonenumber;
mod phoneutil;
mod regexp_cache;
mod shortnumber;

pub mod i18n;
pub mod metadata;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use asyoutype::AsYouTypeFormatter;
pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phoneutil::{
    NumberLengthError, NumberLengthType, ParseError, PhoneNumberFormat, PhoneNumberType,
    PhoneNumberUtil, PhoneNumberUtilError,
};
pub use shortnumber::{ShortNumberCost, ShortNumberInfo};
