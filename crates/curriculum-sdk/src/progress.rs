//! Loading progress for the progressive loader
//!
//! Published over a `watch` channel: subscribers see every stage change
//! and can also read the latest snapshot at any time.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingStage {
    Discovering,
    LoadingMetadata,
    LoadingChunks,
    Complete,
}

impl LoadingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovering => "discovering",
            Self::LoadingMetadata => "loading-metadata",
            Self::LoadingChunks => "loading-chunks",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for LoadingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingProgress {
    pub loaded: usize,
    pub total: usize,
    pub stage: LoadingStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_file: Option<String>,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            loaded: 0,
            total: 0,
            stage: LoadingStage::Discovering,
            current_file: None,
        }
    }
}

impl LoadingProgress {
    /// `loaded / total` as a percentage; 0 when nothing is expected
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.loaded as f64 / self.total as f64 * 100.0
        }
    }
}

/// Owner side of the progress channel
#[derive(Debug)]
pub struct ProgressReporter {
    tx: watch::Sender<LoadingProgress>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LoadingProgress::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadingProgress> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> LoadingProgress {
        self.tx.borrow().clone()
    }

    /// Enter `stage` expecting `total` items.
    pub fn begin(&self, stage: LoadingStage, total: usize) {
        self.tx.send_replace(LoadingProgress {
            loaded: 0,
            total,
            stage,
            current_file: None,
        });
    }

    /// One more item of the current stage is done.
    pub fn advance(&self, current_file: &str) {
        self.tx.send_modify(|progress| {
            progress.loaded += 1;
            progress.current_file = Some(current_file.to_string());
        });
    }

    pub fn complete(&self, total: usize) {
        self.tx.send_replace(LoadingProgress {
            loaded: total,
            total,
            stage: LoadingStage::Complete,
            current_file: None,
        });
    }

    pub fn reset(&self) {
        self.tx.send_replace(LoadingProgress::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(LoadingProgress::default().percentage(), 0.0);
        let progress = LoadingProgress {
            loaded: 1,
            total: 4,
            stage: LoadingStage::LoadingMetadata,
            current_file: None,
        };
        assert_eq!(progress.percentage(), 25.0);
    }

    #[tokio::test]
    async fn test_subscribers_see_stage_changes() {
        let reporter = ProgressReporter::new();
        let mut rx = reporter.subscribe();

        reporter.begin(LoadingStage::LoadingMetadata, 2);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().stage, LoadingStage::LoadingMetadata);

        reporter.advance("AT-17");
        assert_eq!(reporter.snapshot().loaded, 1);
        assert_eq!(reporter.snapshot().current_file.as_deref(), Some("AT-17"));

        reporter.complete(2);
        assert_eq!(reporter.snapshot().percentage(), 100.0);
    }

    #[test]
    fn test_stage_serializes_kebab_case() {
        let value = serde_json::to_value(LoadingStage::LoadingChunks).unwrap();
        assert_eq!(value, serde_json::json!("loading-chunks"));
    }
}
