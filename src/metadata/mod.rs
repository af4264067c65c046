pub mod bootstrap;
pub mod container;
pub mod errors;
pub mod loader;
pub mod parser;
pub mod provider;
pub mod registry;
pub mod source;
pub mod types;

pub use errors::MetadataError;
pub use loader::{FileSystemMetadataLoader, InMemoryMetadataLoader, MetadataLoader};
pub use registry::CallingCodeRegistry;
pub use source::{FormattingMetadataSource, RegionMetadataSource, ShortNumberMetadataSource};
pub use types::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};
