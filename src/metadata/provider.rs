use super::errors::MetadataError;

/// Maps an opaque metadata key (region code or country calling code) to the
/// identifier of the resource holding its records. Pure computation; caching
/// happens one layer up, in the bootstrapping guard.
pub struct PhoneMetadataResourceProvider {
    prefix: &'static str,
}

impl PhoneMetadataResourceProvider {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Resolves the resource identifier for a string key. Keys must be
    /// purely alphanumeric.
    pub fn resource_for(&self, key: &str) -> Result<String, MetadataError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MetadataError::InvalidKey(key.to_string()));
        }
        Ok(fast_cat::concat_str!(self.prefix, "_", key))
    }

    pub fn resource_for_calling_code(&self, calling_code: i32) -> Result<String, MetadataError> {
        let mut buf = itoa::Buffer::new();
        self.resource_for(buf.format(calling_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_deterministic_identifiers() {
        let provider = PhoneMetadataResourceProvider::new("metadata");
        assert_eq!(provider.resource_for("DE").unwrap(), "metadata_DE");
        assert_eq!(provider.resource_for("001").unwrap(), "metadata_001");
        assert_eq!(
            provider.resource_for_calling_code(49).unwrap(),
            "metadata_49"
        );
    }

    #[test]
    fn rejects_non_alphanumeric_keys() {
        let provider = PhoneMetadataResourceProvider::new("metadata");
        for bad in ["", "D E", "../DE", "DE\u{0}"] {
            assert!(matches!(
                provider.resource_for(bad),
                Err(MetadataError::InvalidKey(_))
            ));
        }
    }
}
