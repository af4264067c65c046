use std::collections::HashSet;
use std::sync::Arc;

use log::trace;

use crate::matcher::{MatcherApi, RegexBasedMatcher};
use crate::metadata::{
    CallingCodeRegistry, MetadataError, MetadataLoader, ShortNumberMetadataSource,
};
use crate::phonenumber::PhoneNumber;
use crate::phoneutil::constants::PLUS_CHARS;
use crate::phoneutil::helpers::normalize_digits_only;

type Result<T> = std::result::Result<T, MetadataError>;

/// Cost categories of short numbers.
///
/// `Unknown` doubles as the answer for numbers that are not short numbers of
/// the region at all, so callers never pay less than the worst case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortNumberCost {
    TollFree,
    Standard,
    PremiumRate,
    Unknown,
}

impl ShortNumberCost {
    /// Severity order used when a calling code is shared by several regions
    /// and their answers disagree.
    fn severity(self) -> u8 {
        match self {
            ShortNumberCost::PremiumRate => 3,
            ShortNumberCost::Unknown => 2,
            ShortNumberCost::Standard => 1,
            ShortNumberCost::TollFree => 0,
        }
    }
}

/// Classifier for short numbers: emergency numbers, carrier shortcodes, SMS
/// services and their expected cost. Operates on its own metadata tree,
/// independent of the general-purpose engine.
pub struct ShortNumberInfo {
    matcher_api: Box<dyn MatcherApi>,
    source: ShortNumberMetadataSource,
    registry: CallingCodeRegistry,

    /// In these regions a number qualifies as emergency only when it is
    /// exactly an emergency number, because longer numbers starting with an
    /// emergency code are ordinary dialable numbers there.
    regions_where_emergency_numbers_must_be_exact: HashSet<&'static str>,
}

impl ShortNumberInfo {
    pub fn new(loader: Arc<dyn MetadataLoader>, registry: CallingCodeRegistry) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            source: ShortNumberMetadataSource::new(loader),
            registry,
            regions_where_emergency_numbers_must_be_exact: HashSet::from(["BR", "CL", "NI"]),
        }
    }

    pub fn with_compiled_registry(loader: Arc<dyn MetadataLoader>) -> Self {
        Self::new(loader, CallingCodeRegistry::compiled())
    }

    /// A short number only means something in the region it is dialed from;
    /// every per-region operation first checks the region actually belongs
    /// to the number's calling code.
    fn region_dialing_from_matches_number(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> bool {
        self.registry
            .region_codes_for(phone_number.country_code())
            .iter()
            .any(|region| region == region_dialing_from)
    }

    pub async fn is_possible_short_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> Result<bool> {
        if !self.region_dialing_from_matches_number(phone_number, region_dialing_from) {
            return Ok(false);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            return Ok(false);
        };
        let length = phone_number.national_significant_number().len() as i32;
        Ok(metadata.general_desc.possible_length.contains(&length))
    }

    /// Whether the number could be a short number in any region of its
    /// calling code, judged by length alone.
    pub async fn is_possible_short_number(&self, phone_number: &PhoneNumber) -> Result<bool> {
        let region_codes = self.registry.region_codes_for(phone_number.country_code());
        let length = phone_number.national_significant_number().len() as i32;
        for region_code in region_codes {
            let Some(metadata) = self.source.metadata_for_region(region_code).await? else {
                continue;
            };
            if metadata.general_desc.possible_length.contains(&length) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub async fn is_valid_short_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> Result<bool> {
        if !self.region_dialing_from_matches_number(phone_number, region_dialing_from) {
            return Ok(false);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            return Ok(false);
        };
        let national = phone_number.national_significant_number();
        if !self
            .matcher_api
            .match_national_number(&national, &metadata.general_desc, false)
        {
            return Ok(false);
        }
        Ok(self
            .matcher_api
            .match_national_number(&national, &metadata.short_code, false))
    }

    pub async fn is_valid_short_number(&self, phone_number: &PhoneNumber) -> Result<bool> {
        let region_codes = self.registry.region_codes_for(phone_number.country_code());
        let region_code = self
            .region_code_for_short_number_from_region_list(phone_number, region_codes)
            .await?;
        if region_codes.len() > 1 && region_code.is_some() {
            // A match in any region of a shared group is enough.
            return Ok(true);
        }
        match region_code {
            Some(region_code) => {
                self.is_valid_short_number_for_region(phone_number, &region_code)
                    .await
            }
            None => Ok(false),
        }
    }

    /// Picks the region within a shared calling code whose shortcode
    /// descriptor matches the number.
    async fn region_code_for_short_number_from_region_list(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &[String],
    ) -> Result<Option<String>> {
        if region_codes.is_empty() {
            return Ok(None);
        }
        if region_codes.len() == 1 {
            return Ok(Some(region_codes[0].clone()));
        }
        let national = phone_number.national_significant_number();
        for region_code in region_codes {
            let Some(metadata) = self.source.metadata_for_region(region_code).await? else {
                continue;
            };
            if self
                .matcher_api
                .match_national_number(&national, &metadata.short_code, false)
            {
                return Ok(Some(region_code.clone()));
            }
        }
        Ok(None)
    }

    pub async fn expected_cost_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> Result<ShortNumberCost> {
        if !self.region_dialing_from_matches_number(phone_number, region_dialing_from) {
            return Ok(ShortNumberCost::Unknown);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            return Ok(ShortNumberCost::Unknown);
        };

        let national = phone_number.national_significant_number();
        // The cost categories are length-gated before any pattern runs.
        if !metadata
            .general_desc
            .possible_length
            .contains(&(national.len() as i32))
        {
            return Ok(ShortNumberCost::Unknown);
        }
        if self
            .matcher_api
            .match_national_number(&national, &metadata.premium_rate, false)
        {
            return Ok(ShortNumberCost::PremiumRate);
        }
        if self
            .matcher_api
            .match_national_number(&national, &metadata.standard_rate, false)
        {
            return Ok(ShortNumberCost::Standard);
        }
        if self
            .matcher_api
            .match_national_number(&national, &metadata.toll_free, false)
        {
            return Ok(ShortNumberCost::TollFree);
        }
        if self
            .is_emergency_number(&national, region_dialing_from)
            .await?
        {
            // Emergency numbers are implicitly toll-free.
            return Ok(ShortNumberCost::TollFree);
        }
        Ok(ShortNumberCost::Unknown)
    }

    /// The expected cost across every region of the number's calling code.
    /// When the regions disagree the costliest plausible answer wins, so the
    /// caller is never told a number is cheaper than it might be.
    pub async fn expected_cost(&self, phone_number: &PhoneNumber) -> Result<ShortNumberCost> {
        let region_codes = self.registry.region_codes_for(phone_number.country_code());
        match region_codes.len() {
            0 => Ok(ShortNumberCost::Unknown),
            1 => {
                self.expected_cost_for_region(phone_number, &region_codes[0])
                    .await
            }
            _ => {
                let mut cost = ShortNumberCost::TollFree;
                for region_code in region_codes {
                    let cost_for_region =
                        self.expected_cost_for_region(phone_number, region_code).await?;
                    if cost_for_region.severity() > cost.severity() {
                        cost = cost_for_region;
                    }
                }
                Ok(cost)
            }
        }
    }

    /// Whether the text, as dialed in the region, reaches emergency services.
    /// Carrier prefixes and trailing digits after the emergency code are
    /// tolerated in most regions.
    pub async fn connects_to_emergency_number(
        &self,
        number: &str,
        region_dialing_from: &str,
    ) -> Result<bool> {
        self.matches_emergency_number_helper(number, region_dialing_from, true)
            .await
    }

    /// Whether the text is exactly an emergency number of the region.
    pub async fn is_emergency_number(
        &self,
        number: &str,
        region_dialing_from: &str,
    ) -> Result<bool> {
        self.matches_emergency_number_helper(number, region_dialing_from, false)
            .await
    }

    async fn matches_emergency_number_helper(
        &self,
        number: &str,
        region_dialing_from: &str,
        allow_prefix_match: bool,
    ) -> Result<bool> {
        // A number dialed in international format is never an emergency
        // number.
        let trimmed = number.trim_start();
        if trimmed.starts_with(|c| PLUS_CHARS.contains(c)) {
            return Ok(false);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            trace!("No short-number metadata for region {region_dialing_from}");
            return Ok(false);
        };
        let normalized = normalize_digits_only(trimmed);
        let allow_prefix_match_for_region = allow_prefix_match
            && !self
                .regions_where_emergency_numbers_must_be_exact
                .contains(region_dialing_from);
        Ok(self.matcher_api.match_national_number(
            &normalized,
            &metadata.emergency,
            allow_prefix_match_for_region,
        ))
    }

    pub async fn is_carrier_specific(&self, phone_number: &PhoneNumber) -> Result<bool> {
        let region_codes = self.registry.region_codes_for(phone_number.country_code());
        let Some(region_code) = self
            .region_code_for_short_number_from_region_list(phone_number, region_codes)
            .await?
        else {
            return Ok(false);
        };
        let Some(metadata) = self.source.metadata_for_region(&region_code).await? else {
            return Ok(false);
        };
        let national = phone_number.national_significant_number();
        Ok(self
            .matcher_api
            .match_national_number(&national, &metadata.carrier_specific, false))
    }

    pub async fn is_carrier_specific_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> Result<bool> {
        if !self.region_dialing_from_matches_number(phone_number, region_dialing_from) {
            return Ok(false);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            return Ok(false);
        };
        let national = phone_number.national_significant_number();
        Ok(self
            .matcher_api
            .match_national_number(&national, &metadata.carrier_specific, false))
    }

    pub async fn is_sms_service_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_dialing_from: &str,
    ) -> Result<bool> {
        if !self.region_dialing_from_matches_number(phone_number, region_dialing_from) {
            return Ok(false);
        }
        let Some(metadata) = self.source.metadata_for_region(region_dialing_from).await? else {
            return Ok(false);
        };
        let national = phone_number.national_significant_number();
        Ok(self
            .matcher_api
            .match_national_number(&national, &metadata.sms_services, false))
    }

    /// A valid short number of the region, for display purposes.
    pub async fn example_short_number(&self, region_code: &str) -> Result<String> {
        let Some(metadata) = self.source.metadata_for_region(region_code).await? else {
            return Ok(String::new());
        };
        Ok(metadata.short_code.example_number().to_string())
    }

    pub async fn example_short_number_for_cost(
        &self,
        region_code: &str,
        cost: ShortNumberCost,
    ) -> Result<String> {
        let Some(metadata) = self.source.metadata_for_region(region_code).await? else {
            return Ok(String::new());
        };
        let desc = match cost {
            ShortNumberCost::TollFree => &metadata.toll_free,
            ShortNumberCost::Standard => &metadata.standard_rate,
            ShortNumberCost::PremiumRate => &metadata.premium_rate,
            // There is no descriptor of unknown-cost numbers.
            ShortNumberCost::Unknown => return Ok(String::new()),
        };
        Ok(desc.example_number().to_string())
    }
}
