use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

use super::types::PhoneMetadata;

/// Extracts the container key of a metadata record. Implemented for the two
/// key flavors: region-code strings and integer calling codes.
pub trait MetadataKey: Eq + Hash + Clone + Send + Sync + 'static {
    fn key_of(metadata: &PhoneMetadata) -> Self;
}

impl MetadataKey for String {
    fn key_of(metadata: &PhoneMetadata) -> Self {
        metadata.id().to_string()
    }
}

impl MetadataKey for i32 {
    fn key_of(metadata: &PhoneMetadata) -> Self {
        metadata.country_code()
    }
}

/// Index from key to its metadata record. Written only while a resource is
/// being bootstrapped, read-many afterward; lives as long as its owning
/// source, with no eviction.
pub struct MetadataContainer<K: MetadataKey> {
    map: DashMap<K, Arc<PhoneMetadata>>,
}

impl<K: MetadataKey> MetadataContainer<K> {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Arc<PhoneMetadata>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|entry| entry.value().clone())
    }

    pub(crate) fn accept(&self, metadata: PhoneMetadata) {
        self.map.insert(K::key_of(&metadata), Arc::new(metadata));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: MetadataKey> Default for MetadataContainer<K> {
    fn default() -> Self {
        Self::new()
    }
}
