use strum::EnumIter;

/// The standardized output styles for a formatted phone number.
///
/// For example, the Google Switzerland office number renders as:
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **E164**: `+41446681800`
/// - **Rfc3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// International format with no separators, always starting with `+`
    /// followed by the country calling code.
    E164,
    /// Country calling code plus spaced national groups, as recommended for
    /// international display.
    International,
    /// The format used for dialing within the number's own region,
    /// potentially including a national prefix such as `0`.
    National,
    /// `tel:`-prefixed, hyphen-separated form for use in links.
    Rfc3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    FixedLine,
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart by their digits alone.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    VoIP,
    /// A number associated with a person rather than a location or a device,
    /// routed to wherever the owner configured.
    PersonalNumber,
    Pager,
    /// Universal Access Number: a single company number routed to different
    /// offices.
    UAN,
    VoiceMail,
    /// The number does not match any known pattern for its region.
    Unknown,
}

/// The admissible outcomes when a number's length is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// The length matches a complete, dialable number for the region.
    IsPossible,
    /// The length only matches numbers dialable within a local area, e.g.
    /// without the area code.
    IsPossibleLocalOnly,
}
