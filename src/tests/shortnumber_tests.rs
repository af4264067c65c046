use crate::phonenumber::PhoneNumber;
use crate::shortnumber::ShortNumberCost;

use super::test_metadata::short_info;

#[tokio::test]
async fn short_numbers_only_mean_something_in_their_own_region() {
    let short_info = short_info();
    let number = PhoneNumber::new(1, 911);

    assert!(short_info
        .is_possible_short_number_for_region(&number, "US")
        .await
        .unwrap());
    assert!(short_info
        .is_valid_short_number_for_region(&number, "US")
        .await
        .unwrap());

    // A region outside the number's calling code never matches, even though
    // its plan might contain the same digits.
    assert!(!short_info
        .is_possible_short_number_for_region(&number, "BR")
        .await
        .unwrap());
    assert!(!short_info
        .is_valid_short_number_for_region(&number, "BR")
        .await
        .unwrap());
    assert_eq!(
        short_info
            .expected_cost_for_region(&number, "BR")
            .await
            .unwrap(),
        ShortNumberCost::Unknown
    );
}

#[tokio::test]
async fn validity_falls_back_to_any_region_of_a_shared_calling_code() {
    let short_info = short_info();
    let number = PhoneNumber::new(1, 911);

    assert!(short_info.is_possible_short_number(&number).await.unwrap());
    assert!(short_info.is_valid_short_number(&number).await.unwrap());

    // Two digits are below every possible length on record.
    let too_short = PhoneNumber::new(1, 91);
    assert!(!short_info.is_possible_short_number(&too_short).await.unwrap());
}

#[tokio::test]
async fn expected_cost_matches_the_cost_descriptors() {
    let short_info = short_info();

    let premium = PhoneNumber::new(1, 24280);
    assert_eq!(
        short_info
            .expected_cost_for_region(&premium, "US")
            .await
            .unwrap(),
        ShortNumberCost::PremiumRate
    );

    let standard = PhoneNumber::new(1, 33669);
    assert_eq!(
        short_info
            .expected_cost_for_region(&standard, "US")
            .await
            .unwrap(),
        ShortNumberCost::Standard
    );

    // Emergency numbers count as toll-free even without a toll-free entry.
    let emergency = PhoneNumber::new(55, 190);
    assert_eq!(
        short_info
            .expected_cost_for_region(&emergency, "BR")
            .await
            .unwrap(),
        ShortNumberCost::TollFree
    );

    // Valid length, but no cost descriptor claims it.
    let unclaimed = PhoneNumber::new(1, 9999);
    assert_eq!(
        short_info
            .expected_cost_for_region(&unclaimed, "US")
            .await
            .unwrap(),
        ShortNumberCost::Unknown
    );
}

#[tokio::test]
async fn disagreeing_regions_resolve_to_the_costliest_answer() {
    let short_info = short_info();

    // Calling code 979 is shared; one region bills 1212 as premium, the
    // other as standard.
    let contested = PhoneNumber::new(979, 1212);
    assert_eq!(
        short_info.expected_cost(&contested).await.unwrap(),
        ShortNumberCost::PremiumRate
    );

    let agreed = PhoneNumber::new(979, 3434);
    assert_eq!(
        short_info.expected_cost(&agreed).await.unwrap(),
        ShortNumberCost::TollFree
    );

    // Standard in one region beats toll-free in the other.
    let split = PhoneNumber::new(979, 5656);
    assert_eq!(
        short_info.expected_cost(&split).await.unwrap(),
        ShortNumberCost::Standard
    );

    // Unknown in one region outranks standard or toll-free elsewhere.
    let half_claimed = PhoneNumber::new(979, 7878);
    assert_eq!(
        short_info.expected_cost(&half_claimed).await.unwrap(),
        ShortNumberCost::Unknown
    );

    let unclaimed = PhoneNumber::new(979, 9999);
    assert_eq!(
        short_info.expected_cost(&unclaimed).await.unwrap(),
        ShortNumberCost::Unknown
    );
}

#[tokio::test]
async fn emergency_matching_tolerates_suffixes_in_most_regions() {
    let short_info = short_info();

    assert!(short_info
        .connects_to_emergency_number("911", "US")
        .await
        .unwrap());
    assert!(short_info.is_emergency_number("911", "US").await.unwrap());

    // Trailing digits still reach the dispatcher.
    assert!(short_info
        .connects_to_emergency_number("9116666666", "US")
        .await
        .unwrap());
    assert!(!short_info
        .is_emergency_number("9116666666", "US")
        .await
        .unwrap());

    // Punctuation is ignored, an international prefix is not.
    assert!(short_info
        .connects_to_emergency_number("9-1-1", "US")
        .await
        .unwrap());
    assert!(!short_info
        .connects_to_emergency_number("+911", "US")
        .await
        .unwrap());

    assert!(short_info.is_emergency_number("110", "CA").await.unwrap());
    assert!(short_info
        .connects_to_emergency_number("1104", "CA")
        .await
        .unwrap());
    assert!(!short_info.is_emergency_number("1104", "CA").await.unwrap());
}

#[tokio::test]
async fn some_regions_require_an_exact_emergency_match() {
    let short_info = short_info();

    assert!(short_info
        .connects_to_emergency_number("190", "BR")
        .await
        .unwrap());
    // Brazilian carriers treat longer numbers starting with 190 as ordinary
    // numbers, so the prefix rule is off there.
    assert!(!short_info
        .connects_to_emergency_number("1900", "BR")
        .await
        .unwrap());
    assert!(!short_info.is_emergency_number("1900", "BR").await.unwrap());
}

#[tokio::test]
async fn classifies_carrier_specific_and_sms_shortcodes() {
    let short_info = short_info();

    let carrier = PhoneNumber::new(1, 33669);
    assert!(short_info.is_carrier_specific(&carrier).await.unwrap());
    assert!(short_info
        .is_carrier_specific_for_region(&carrier, "US")
        .await
        .unwrap());

    let sms = PhoneNumber::new(1, 40466);
    assert!(short_info
        .is_sms_service_for_region(&sms, "US")
        .await
        .unwrap());
    assert!(!short_info
        .is_sms_service_for_region(&carrier, "US")
        .await
        .unwrap());
}

#[tokio::test]
async fn serves_example_short_numbers() {
    let short_info = short_info();

    assert_eq!(short_info.example_short_number("US").await.unwrap(), "911");
    assert_eq!(
        short_info
            .example_short_number_for_cost("US", ShortNumberCost::PremiumRate)
            .await
            .unwrap(),
        "24280"
    );
    assert_eq!(
        short_info
            .example_short_number_for_cost("US", ShortNumberCost::Unknown)
            .await
            .unwrap(),
        ""
    );
    assert_eq!(short_info.example_short_number("XX").await.unwrap(), "");
}
