//! In-memory fragment source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use curriculum_model::FragmentDocument;
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::source::{FragmentSource, SourceIndex, INDEX_FILE};

struct MockFragment {
    body: Value,
    declared_size: Option<u64>,
}

/// Mock source for testing.
///
/// Serves configured JSON bodies, injects failures per fragment and counts
/// every call so tests can assert how often the network was touched.
#[derive(Default)]
pub struct MockFragmentSource {
    fragments: HashMap<String, MockFragment>,
    failures: HashMap<String, FetchError>,
    index: Option<Result<SourceIndex>>,
    delay: Option<Duration>,
    fetch_counts: Mutex<HashMap<String, u32>>,
    probe_counts: Mutex<HashMap<String, u32>>,
    index_count: AtomicU32,
}

impl MockFragmentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `name`. Its probed size is the serialized length.
    pub fn with_fragment(mut self, name: impl Into<String>, body: Value) -> Self {
        self.fragments.insert(
            name.into(),
            MockFragment {
                body,
                declared_size: None,
            },
        );
        self
    }

    /// Serve `body` for `name`, reporting `size` bytes when probed.
    pub fn with_sized_fragment(mut self, name: impl Into<String>, body: Value, size: u64) -> Self {
        self.fragments.insert(
            name.into(),
            MockFragment {
                body,
                declared_size: Some(size),
            },
        );
        self
    }

    /// Fail every fetch and probe of `name` with `error`.
    pub fn with_failure(mut self, name: impl Into<String>, error: FetchError) -> Self {
        self.failures.insert(name.into(), error);
        self
    }

    /// Fail every fetch and probe of `name` with an HTTP status.
    pub fn with_status(self, name: impl Into<String>, status: u16) -> Self {
        let name = name.into();
        let error = FetchError::unavailable(name.clone(), Some(status), format!("HTTP {}", status));
        self.with_failure(name, error)
    }

    /// Serve an index listing `files`.
    pub fn with_index<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index = Some(Ok(SourceIndex::new(files.into_iter().map(Into::into).collect())));
        self
    }

    /// Serve an index listing every configured fragment, sorted by name.
    pub fn with_full_index(self) -> Self {
        let mut names: Vec<String> = self.fragments.keys().cloned().collect();
        names.sort();
        self.with_index(names)
    }

    /// Fail index requests with `error`.
    pub fn with_index_failure(mut self, error: FetchError) -> Self {
        self.index = Some(Err(error));
        self
    }

    /// Delay every fetch, to let concurrent callers overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `fetch_fragment` calls for `name`.
    pub fn fetch_count(&self, name: &str) -> u32 {
        count_of(&self.fetch_counts, name)
    }

    /// Total `fetch_fragment` calls across all names.
    pub fn total_fetch_count(&self) -> u32 {
        self.fetch_counts
            .lock()
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    pub fn probe_count(&self, name: &str) -> u32 {
        count_of(&self.probe_counts, name)
    }

    pub fn index_count(&self) -> u32 {
        self.index_count.load(Ordering::SeqCst)
    }

    /// Reset all call counts.
    pub fn reset_counts(&self) {
        if let Ok(mut counts) = self.fetch_counts.lock() {
            counts.clear();
        }
        if let Ok(mut counts) = self.probe_counts.lock() {
            counts.clear();
        }
        self.index_count.store(0, Ordering::SeqCst);
    }

    fn missing(name: &str) -> FetchError {
        FetchError::unavailable(name, Some(404), "HTTP 404 Not Found")
    }
}

fn bump(counts: &Mutex<HashMap<String, u32>>, name: &str) {
    if let Ok(mut counts) = counts.lock() {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
}

fn count_of(counts: &Mutex<HashMap<String, u32>>, name: &str) -> u32 {
    counts
        .lock()
        .map(|counts| counts.get(name).copied().unwrap_or(0))
        .unwrap_or(0)
}

#[async_trait]
impl FragmentSource for MockFragmentSource {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    async fn fetch_index(&self) -> Result<SourceIndex> {
        self.index_count.fetch_add(1, Ordering::SeqCst);
        match &self.index {
            Some(result) => result.clone(),
            None => Err(Self::missing(INDEX_FILE)),
        }
    }

    async fn fetch_fragment(&self, source_name: &str, timeout: Duration) -> Result<FragmentDocument> {
        bump(&self.fetch_counts, source_name);

        if let Some(delay) = self.delay {
            if delay > timeout {
                tokio::time::sleep(timeout).await;
                return Err(FetchError::Timeout {
                    source_name: source_name.to_string(),
                    after: timeout,
                });
            }
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failures.get(source_name) {
            return Err(error.clone());
        }

        let fragment = self
            .fragments
            .get(source_name)
            .ok_or_else(|| Self::missing(source_name))?;

        FragmentDocument::from_value(fragment.body.clone())
            .map_err(|e| FetchError::malformed(source_name, e.to_string()))
    }

    async fn probe_size(&self, source_name: &str) -> Result<Option<u64>> {
        bump(&self.probe_counts, source_name);

        if let Some(error) = self.failures.get(source_name) {
            return Err(error.clone());
        }

        let fragment = self
            .fragments
            .get(source_name)
            .ok_or_else(|| Self::missing(source_name))?;

        Ok(Some(fragment.declared_size.unwrap_or_else(|| {
            serde_json::to_vec(&fragment.body)
                .map(|bytes| bytes.len() as u64)
                .unwrap_or(0)
        })))
    }
}
