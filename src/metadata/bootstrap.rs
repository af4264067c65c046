use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use tokio::sync::OnceCell;

use super::container::{MetadataContainer, MetadataKey};
use super::errors::MetadataError;
use super::loader::MetadataLoader;
use super::parser::MetadataParser;

/// Guarantees that every metadata resource is fetched, parsed and merged
/// into the shared container at most once per successful bootstrap.
///
/// A naive check-then-populate map is unsafe here: the fetch suspends, so
/// two callers can both observe "absent" before either stores a result.
/// Instead the first caller for a resource installs a pending cell and every
/// concurrent caller awaits that cell, returning only once the resource's
/// records are visible in the container. A failed bootstrap leaves the cell
/// unset, so the next caller retries instead of inheriting a permanently
/// negative entry.
pub struct BootstrappingGuard<K: MetadataKey> {
    loader: Arc<dyn MetadataLoader>,
    parser: MetadataParser,
    container: Arc<MetadataContainer<K>>,
    bootstrapped: DashMap<String, Arc<OnceCell<()>>>,
}

impl<K: MetadataKey> BootstrappingGuard<K> {
    pub fn new(loader: Arc<dyn MetadataLoader>, parser: MetadataParser) -> Self {
        Self {
            loader,
            parser,
            container: Arc::new(MetadataContainer::new()),
            bootstrapped: DashMap::new(),
        }
    }

    /// Returns the shared container with the given resource's records
    /// guaranteed to be merged. Idempotent; concurrent calls for the same
    /// resource identifier observe exactly one underlying fetch and parse.
    pub async fn get_or_bootstrap(
        &self,
        resource_id: &str,
    ) -> Result<&MetadataContainer<K>, MetadataError> {
        let cell = self
            .bootstrapped
            .entry(resource_id.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();
        cell.get_or_try_init(|| self.bootstrap(resource_id)).await?;
        Ok(&self.container)
    }

    async fn bootstrap(&self, resource_id: &str) -> Result<(), MetadataError> {
        trace!("Bootstrapping metadata resource '{resource_id}'");
        let bytes = self.loader.load(resource_id).await?;
        let records = self.parser.parse(bytes.as_deref())?;
        for record in records {
            self.container.accept(record);
        }
        Ok(())
    }
}
