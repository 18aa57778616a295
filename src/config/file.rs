//! Filesystem transport.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::error::TransportError;
use super::transport::Transport;

/// A transport that reads settings documents from local files.
///
/// Addresses may carry a `file://` prefix. When a root directory is set,
/// addresses are resolved beneath it and a leading `/` is ignored, so the
/// default `/config.json` address maps to `<root>/config.json`.
#[derive(Debug, Clone, Default)]
pub struct FileTransport {
    root: Option<PathBuf>,
}

impl FileTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    fn resolve_path(&self, address: &str) -> PathBuf {
        let address = address.strip_prefix("file://").unwrap_or(address);
        match &self.root {
            Some(root) => root.join(address.trim_start_matches('/')),
            None => PathBuf::from(address),
        }
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, TransportError> {
        let path = self.resolve_path(address);
        tracing::debug!("reading {:?}", path);

        tokio::fs::read(&path)
            .await
            .map_err(|source| TransportError::Io { path, source })
    }
}
