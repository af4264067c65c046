use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

/// The external resource store: given a resource identifier, returns its raw
/// bytes, `None` when no such resource exists, or an I/O error. No schema is
/// imposed here beyond "decodable by the metadata parser".
#[async_trait]
pub trait MetadataLoader: Send + Sync {
    async fn load(&self, resource_id: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Resource store backed by a map built up front. Used by tests and by
/// deployments that embed their metadata.
#[derive(Debug, Default)]
pub struct InMemoryMetadataLoader {
    resources: HashMap<String, Vec<u8>>,
}

impl InMemoryMetadataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resource_id: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(resource_id.into(), bytes.into());
    }
}

#[async_trait]
impl MetadataLoader for InMemoryMetadataLoader {
    async fn load(&self, resource_id: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.resources.get(resource_id).cloned())
    }
}

/// Resource store reading `<root>/<resource_id>.json` files.
#[derive(Debug)]
pub struct FileSystemMetadataLoader {
    root: PathBuf,
}

impl FileSystemMetadataLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MetadataLoader for FileSystemMetadataLoader {
    async fn load(&self, resource_id: &str) -> io::Result<Option<Vec<u8>>> {
        let path = self.root.join(format!("{resource_id}.json"));
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_loader_returns_registered_bytes() {
        let mut loader = InMemoryMetadataLoader::new();
        loader.register("metadata_DE", b"bytes".to_vec());
        assert_eq!(
            loader.load("metadata_DE").await.unwrap(),
            Some(b"bytes".to_vec())
        );
        assert_eq!(loader.load("metadata_FR").await.unwrap(), None);
    }
}
