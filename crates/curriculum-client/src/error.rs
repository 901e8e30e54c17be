//! Error types for fragment fetching

use std::time::Duration;

use thiserror::Error;

/// Why one source document could not be delivered.
///
/// Cloneable so that one failed fetch can be reported to every caller
/// waiting on it.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network failure or non-success status
    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        source_name: String,
        status: Option<u16>,
        reason: String,
    },

    /// Bounded wait exceeded
    #[error("{source_name} timed out after {}s", after.as_secs())]
    Timeout { source_name: String, after: Duration },

    /// Declared content type is not JSON (typically an HTML error page)
    #[error("{source_name} returned non-JSON content: {content_type}")]
    NotJson {
        source_name: String,
        content_type: String,
    },

    /// Body is not JSON, or lacks `curriculumData.areas`
    #[error("{source_name} is malformed: {reason}")]
    Malformed { source_name: String, reason: String },

    /// Origin or base path cannot form a URL
    #[error("Invalid source configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    pub fn unavailable(source_name: impl Into<String>, status: Option<u16>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Malformed content, as opposed to content that never arrived
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unavailable { status, .. } => *status,
            _ => None,
        }
    }

    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::Unavailable { source_name, .. }
            | Self::Timeout { source_name, .. }
            | Self::NotJson { source_name, .. }
            | Self::Malformed { source_name, .. } => Some(source_name),
            Self::InvalidConfig(_) => None,
        }
    }
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
