use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("document '{name}' not found")]
    NotFound { name: String },
    #[error("failed to read document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Retrieval transport for the named JSON feeds.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send;
}

/// Reads feeds from files under a data directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for FileSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.root.join(name);
        tokio::fs::read(&path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound {
                    name: name.to_string(),
                }
            } else {
                SourceError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }
}

/// Serves feeds from memory, for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(name, body);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.documents.insert(name.into(), body.into());
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, SourceError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
            })
    }
}
