use crate::metadata::types::{PhoneMetadata, PhoneNumberDesc};

use super::constants::{PLUS_SIGN, RFC3966_PREFIX};
use super::enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType};
use super::errors::NumberLengthError;

/// Returns the descriptor inside the metadata for the given number type.
pub(super) fn desc_for_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

/// Prepends the country calling code in the style the output format calls
/// for. National output carries no calling code at all.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    match number_format {
        PhoneNumberFormat::E164 => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
        }
        PhoneNumberFormat::International => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);
        }
        PhoneNumberFormat::Rfc3966 => {
            *formatted_number = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );
        }
        PhoneNumberFormat::National => {}
    }
}

/// Keeps the decimal digits of the input, mapping digits of any script to
/// their ASCII value, and drops everything else.
pub(crate) fn normalize_digits_only(input: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(input);
    normalized.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Checks a national number against the region's possible lengths for the
/// general descriptor, distinguishing too-short, too-long and
/// in-range-but-invalid lengths.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &PhoneMetadata,
) -> Result<NumberLengthType, NumberLengthError> {
    let general = &phone_metadata.general_desc;
    let possible_lengths = &general.possible_length;
    // The value "-1" is the schema's marker for "no numbers of this type".
    if possible_lengths.first().copied().unwrap_or(-1) == -1 {
        return Err(NumberLengthError::InvalidLength);
    }

    let actual_length = phone_number.len() as i32;
    // Possible lengths and local-only lengths never overlap.
    if general.possible_length_local_only.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    let minimum_length = possible_lengths[0];
    if minimum_length == actual_length {
        return Ok(NumberLengthType::IsPossible);
    } else if minimum_length > actual_length {
        return Err(NumberLengthError::TooShort);
    } else if possible_lengths[possible_lengths.len() - 1] < actual_length {
        return Err(NumberLengthError::TooLong);
    }
    if possible_lengths[1..].contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(NumberLengthError::InvalidLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_digits_of_any_script() {
        assert_eq!(normalize_digits_only("034-56&+a#234"), "03456234");
        assert_eq!(normalize_digits_only("\u{FF16}\u{FF15}0"), "650");
        assert_eq!(normalize_digits_only("words"), "");
    }

    #[test]
    fn length_test_distinguishes_short_long_and_gaps() {
        let metadata = PhoneMetadata {
            general_desc: PhoneNumberDesc {
                possible_length: vec![7, 10],
                possible_length_local_only: vec![4],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            test_number_length("1234567", &metadata),
            Ok(NumberLengthType::IsPossible)
        );
        assert_eq!(
            test_number_length("1234", &metadata),
            Ok(NumberLengthType::IsPossibleLocalOnly)
        );
        assert_eq!(
            test_number_length("123", &metadata),
            Err(NumberLengthError::TooShort)
        );
        assert_eq!(
            test_number_length("12345678", &metadata),
            Err(NumberLengthError::InvalidLength)
        );
        assert_eq!(
            test_number_length("12345678901", &metadata),
            Err(NumberLengthError::TooLong)
        );
    }
}
