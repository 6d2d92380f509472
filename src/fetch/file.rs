//! Fetcher backed by a JSON document on disk.

use super::{FetchResponse, ReceiptFetcher};
use crate::model::{FetchError, MessageId};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serves the same response for every message id.
///
/// The document is re-read on every call so a reload picks up edits.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReceiptFetcher for FileFetcher {
    fn get_read_receipts(&self, message_id: &MessageId) -> Result<FetchResponse, FetchError> {
        debug!(path = %self.path.display(), message_id = %message_id, "Reading receipts fixture");
        let contents = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
