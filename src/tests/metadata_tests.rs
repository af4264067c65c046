use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::metadata::{
    FormattingMetadataSource, InMemoryMetadataLoader, MetadataError, MetadataLoader,
    RegionMetadataSource, ShortNumberMetadataSource,
};

use super::test_metadata;

/// Wraps the fixture loader and counts how many fetches actually happen.
struct CountingLoader {
    inner: InMemoryMetadataLoader,
    loads: AtomicUsize,
}

impl CountingLoader {
    fn new() -> Self {
        Self {
            inner: test_metadata::loader(),
            loads: AtomicUsize::new(0),
        }
    }

    fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataLoader for CountingLoader {
    async fn load(&self, resource_id: &str) -> io::Result<Option<Vec<u8>>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(resource_id).await
    }
}

/// Fails every fetch until released, then delegates to the fixtures.
struct FlakyLoader {
    inner: InMemoryMetadataLoader,
    failures_left: AtomicUsize,
}

#[async_trait]
impl MetadataLoader for FlakyLoader {
    async fn load(&self, resource_id: &str) -> io::Result<Option<Vec<u8>>> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok()
        {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "fetch timed out"));
        }
        self.inner.load(resource_id).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_lookups_fetch_a_resource_exactly_once() {
    let loader = Arc::new(CountingLoader::new());
    let source = Arc::new(RegionMetadataSource::new(loader.clone()));

    let lookups = (0..16).map(|_| {
        let source = source.clone();
        tokio::spawn(async move { source.metadata_for_region("US").await })
    });
    for lookup in futures::future::join_all(lookups).await {
        let metadata = lookup
            .expect("task panicked")
            .expect("lookup failed")
            .expect("US metadata registered");
        assert_eq!(metadata.id(), "US");
        assert_eq!(metadata.country_code(), 1);
    }
    assert_eq!(loader.load_count(), 1);

    // A later lookup of the same region stays resident.
    source.metadata_for_region("US").await.unwrap().unwrap();
    assert_eq!(loader.load_count(), 1);

    // A different region is its own resource.
    source.metadata_for_region("DE").await.unwrap().unwrap();
    assert_eq!(loader.load_count(), 2);
}

#[tokio::test]
async fn failed_bootstrap_is_retried_on_the_next_lookup() {
    let loader = Arc::new(FlakyLoader {
        inner: test_metadata::loader(),
        failures_left: AtomicUsize::new(1),
    });
    let source = RegionMetadataSource::new(loader);

    let first = source.metadata_for_region("US").await;
    assert!(matches!(first, Err(MetadataError::Io(_))));

    let second = source.metadata_for_region("US").await;
    assert_eq!(second.unwrap().expect("retry succeeds").id(), "US");
}

#[tokio::test]
async fn absent_region_is_none_not_an_error() {
    let source = RegionMetadataSource::new(Arc::new(test_metadata::loader()));
    assert!(source.metadata_for_region("XX").await.unwrap().is_none());
}

#[tokio::test]
async fn non_geographical_sentinel_is_rejected_by_region_sources() {
    let loader: Arc<dyn MetadataLoader> = Arc::new(test_metadata::loader());
    let regions = RegionMetadataSource::new(loader.clone());
    assert!(matches!(
        regions.metadata_for_region("001").await,
        Err(MetadataError::NonGeographicalRegion)
    ));

    let short = ShortNumberMetadataSource::new(loader);
    assert!(matches!(
        short.metadata_for_region("001").await,
        Err(MetadataError::NonGeographicalRegion)
    ));
}

#[tokio::test]
async fn malformed_region_codes_are_rejected_without_a_fetch() {
    let loader = Arc::new(CountingLoader::new());
    let source = RegionMetadataSource::new(loader.clone());

    for bad_key in ["", "U S", "../etc", "U-S"] {
        assert!(matches!(
            source.metadata_for_region(bad_key).await,
            Err(MetadataError::InvalidKey(_))
        ));
    }
    assert_eq!(loader.load_count(), 0);
}

#[tokio::test]
async fn formatting_source_resolves_non_geographical_calling_codes() {
    let source = FormattingMetadataSource::new(Arc::new(test_metadata::loader()));
    let metadata = source
        .metadata_for_calling_code(800)
        .await
        .unwrap()
        .expect("+800 formatting metadata registered");
    assert_eq!(metadata.id(), "001");
    assert_eq!(metadata.country_code(), 800);

    assert!(source.metadata_for_calling_code(999).await.unwrap().is_none());
}

#[tokio::test]
async fn short_number_metadata_lives_in_its_own_resource_tree() {
    let loader: Arc<dyn MetadataLoader> = Arc::new(test_metadata::loader());
    let short = ShortNumberMetadataSource::new(loader);

    let metadata = short
        .metadata_for_region("CA")
        .await
        .unwrap()
        .expect("CA short-number metadata registered");
    assert!(metadata.emergency.has_national_number_pattern());
    // The general tree has CA too, but its record carries no emergency data;
    // this one came from the shortmetadata resources.
    assert_eq!(metadata.emergency.national_number_pattern(), r"11[02]");
}
