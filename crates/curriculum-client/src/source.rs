//! The fragment source seam
//!
//! A `FragmentSource` delivers named curriculum fragments. The engine only
//! talks to this trait, so the HTTP implementation can be swapped for the
//! in-memory mock in tests.

use std::time::Duration;

use async_trait::async_trait;
use curriculum_model::FragmentDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FetchError, Result};

/// Name of the discovery document under `curriculum/`
pub const INDEX_FILE: &str = "index.json";

/// Discovery document: `{ "files": ["AT-17 - 17 - ....json", ...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceIndex {
    pub files: Vec<String>,
}

impl SourceIndex {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Parse an index body. A body without a `files` array is malformed;
    /// non-string entries are skipped.
    pub fn from_value(value: &Value) -> Result<Self> {
        let files = value
            .get("files")
            .and_then(Value::as_array)
            .ok_or_else(|| FetchError::malformed(INDEX_FILE, "missing files array"))?;

        Ok(Self {
            files: files
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        })
    }
}

/// Delivers curriculum fragments by source name.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Human-readable location of this source, for logs
    fn describe(&self) -> String;

    /// Fetch and parse the discovery index.
    async fn fetch_index(&self) -> Result<SourceIndex>;

    /// Fetch one fragment, failing with `Timeout` once `timeout` elapses.
    async fn fetch_fragment(&self, source_name: &str, timeout: Duration) -> Result<FragmentDocument>;

    /// Header-only probe. `Ok(None)` when the fragment exists but declares
    /// no size; an error when it does not exist or cannot be reached.
    async fn probe_size(&self, source_name: &str) -> Result<Option<u64>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_skips_non_string_entries() {
        let index = SourceIndex::from_value(&json!({ "files": ["AT-17.json", 3, null, "IS-15.json"] })).unwrap();
        assert_eq!(index.files, vec!["AT-17.json", "IS-15.json"]);
    }

    #[test]
    fn test_index_without_files_is_malformed() {
        let err = SourceIndex::from_value(&json!({ "fragments": [] })).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.source_name(), Some(INDEX_FILE));
    }
}
