use thiserror::Error;

/// Faults raised by the metadata loading layer.
///
/// Caller misuse (`InvalidKey`, `NonGeographicalRegion`) and packaging
/// defects (`Malformed`, `EmptyCollection`) are always surfaced; a key that
/// was simply never registered by any metadata resource is reported as
/// `Ok(None)` by the sources, never through this enum.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Resource key must be alphanumeric, got '{0}'")]
    InvalidKey(String),

    #[error("The non-geographical sentinel region carries no per-region metadata")]
    NonGeographicalRegion,

    #[error("Metadata resource is absent")]
    ResourceAbsent,

    #[error("Malformed metadata resource: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Metadata resource decoded to an empty collection")]
    EmptyCollection,

    #[error("Failed to read metadata resource: {0}")]
    Io(#[from] std::io::Error),
}
