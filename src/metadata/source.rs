use std::sync::Arc;

use log::warn;

use crate::i18n::RegionCode;

use super::bootstrap::BootstrappingGuard;
use super::errors::MetadataError;
use super::loader::MetadataLoader;
use super::parser::MetadataParser;
use super::provider::PhoneMetadataResourceProvider;
use super::types::PhoneMetadata;

/// Lookup outcomes are three-way: `Ok(Some)` found, `Ok(None)` the key was
/// never registered by any metadata resource, `Err` caller misuse or a
/// packaging defect. Absence is never signaled through an error.
pub type MetadataLookup = Result<Option<Arc<PhoneMetadata>>, MetadataError>;

/// Geographical per-region metadata, lazily bootstrapped one resource per
/// region code.
pub struct RegionMetadataSource {
    provider: PhoneMetadataResourceProvider,
    guard: BootstrappingGuard<String>,
}

impl RegionMetadataSource {
    pub fn new(loader: Arc<dyn MetadataLoader>) -> Self {
        Self {
            provider: PhoneMetadataResourceProvider::new("metadata"),
            guard: BootstrappingGuard::new(loader, MetadataParser::lenient()),
        }
    }

    /// Fails for the non-geographical sentinel region; use
    /// [`FormattingMetadataSource`] for those calling codes instead.
    pub async fn metadata_for_region(&self, region_code: &str) -> MetadataLookup {
        if region_code == RegionCode::non_geo_entity() {
            return Err(MetadataError::NonGeographicalRegion);
        }
        let resource_id = self.provider.resource_for(region_code)?;
        let container = self.guard.get_or_bootstrap(&resource_id).await?;
        let metadata = container.get(region_code);
        if metadata.is_none() {
            warn!("No metadata registered for region code {region_code}");
        }
        Ok(metadata)
    }
}

/// Formatting metadata keyed by country calling code, covering both
/// geographical codes (resolved through their main region) and
/// non-geographical entities such as +800.
pub struct FormattingMetadataSource {
    provider: PhoneMetadataResourceProvider,
    guard: BootstrappingGuard<i32>,
}

impl FormattingMetadataSource {
    pub fn new(loader: Arc<dyn MetadataLoader>) -> Self {
        Self {
            provider: PhoneMetadataResourceProvider::new("metadata"),
            guard: BootstrappingGuard::new(loader, MetadataParser::lenient()),
        }
    }

    pub async fn metadata_for_calling_code(&self, calling_code: i32) -> MetadataLookup {
        let resource_id = self.provider.resource_for_calling_code(calling_code)?;
        let container = self.guard.get_or_bootstrap(&resource_id).await?;
        let metadata = container.get(&calling_code);
        if metadata.is_none() {
            warn!("No formatting metadata registered for calling code {calling_code}");
        }
        Ok(metadata)
    }
}

/// Short-number and emergency metadata, bootstrapped from its own resource
/// set, one resource per region code.
pub struct ShortNumberMetadataSource {
    provider: PhoneMetadataResourceProvider,
    guard: BootstrappingGuard<String>,
}

impl ShortNumberMetadataSource {
    pub fn new(loader: Arc<dyn MetadataLoader>) -> Self {
        Self {
            provider: PhoneMetadataResourceProvider::new("shortmetadata"),
            guard: BootstrappingGuard::new(loader, MetadataParser::lenient()),
        }
    }

    pub async fn metadata_for_region(&self, region_code: &str) -> MetadataLookup {
        if region_code == RegionCode::non_geo_entity() {
            return Err(MetadataError::NonGeographicalRegion);
        }
        let resource_id = self.provider.resource_for(region_code)?;
        let container = self.guard.get_or_bootstrap(&resource_id).await?;
        Ok(container.get(region_code))
    }
}
