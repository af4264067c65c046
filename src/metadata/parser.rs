use super::errors::MetadataError;
use super::types::{PhoneMetadata, PhoneMetadataCollection};

/// Deserializes raw resource bytes into metadata records.
///
/// A lenient parser treats absent input as "no metadata registered for this
/// resource"; a strict parser treats it as a fault. A resource that decodes
/// to an *empty* collection is always a fault: it signals a packaging defect,
/// not a legitimate empty result.
#[derive(Debug, Clone, Copy)]
pub struct MetadataParser {
    strict: bool,
}

impl MetadataParser {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }

    pub fn parse(&self, bytes: Option<&[u8]>) -> Result<Vec<PhoneMetadata>, MetadataError> {
        let Some(bytes) = bytes else {
            return if self.strict {
                Err(MetadataError::ResourceAbsent)
            } else {
                Ok(Vec::new())
            };
        };
        let collection: PhoneMetadataCollection = serde_json::from_slice(bytes)?;
        if collection.metadata.is_empty() {
            return Err(MetadataError::EmptyCollection);
        }
        Ok(collection.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parser_maps_absent_to_empty() {
        let records = MetadataParser::lenient().parse(None).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn strict_parser_rejects_absent_input() {
        assert!(matches!(
            MetadataParser::strict().parse(None),
            Err(MetadataError::ResourceAbsent)
        ));
    }

    #[test]
    fn empty_collection_is_a_packaging_defect() {
        let bytes = br#"{"metadata": []}"#;
        for parser in [MetadataParser::strict(), MetadataParser::lenient()] {
            assert!(matches!(
                parser.parse(Some(bytes)),
                Err(MetadataError::EmptyCollection)
            ));
        }
    }

    #[test]
    fn malformed_bytes_are_fatal() {
        assert!(matches!(
            MetadataParser::lenient().parse(Some(b"not json")),
            Err(MetadataError::Malformed(_))
        ));
    }

    #[test]
    fn decodes_records() {
        let bytes = br#"{"metadata": [{"id": "DE", "country_code": 49}]}"#;
        let records = MetadataParser::lenient().parse(Some(bytes)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "DE");
        assert_eq!(records[0].country_code(), 49);
    }
}
