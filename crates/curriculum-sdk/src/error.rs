//! Error types for the curriculum engine

use curriculum_client::FetchError;
use thiserror::Error;

/// Result type for curriculum operations
pub type Result<T> = std::result::Result<T, CurriculumError>;

/// Kind of entity a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Discipline,
    Skill,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discipline => f.write_str("discipline"),
            Self::Skill => f.write_str("skill"),
        }
    }
}

/// Curriculum engine errors
///
/// `Clone` so that a single in-flight load can hand its outcome to every
/// caller waiting on it.
#[derive(Error, Debug, Clone)]
pub enum CurriculumError {
    /// Network failure, non-success status, timeout or non-JSON body
    #[error("Fragment unavailable: {0}")]
    FragmentUnavailable(String),

    /// Fragment arrived but is not a curriculum fragment
    #[error("Malformed fragment: {0}")]
    MalformedFragment(String),

    /// Requested id is absent after a load attempt
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: String },

    /// Failure outside the per-fragment boundary, such as an unreadable
    /// source listing
    #[error("Curriculum assembly failed: {0}")]
    AssemblyFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CurriculumError {
    pub fn discipline_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Discipline,
            id: id.into(),
        }
    }

    pub fn skill_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Skill,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<FetchError> for CurriculumError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Malformed { .. } => CurriculumError::MalformedFragment(err.to_string()),
            FetchError::InvalidConfig(reason) => CurriculumError::Config(reason),
            _ => CurriculumError::FragmentUnavailable(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for CurriculumError {
    fn from(err: toml::de::Error) -> Self {
        CurriculumError::Config(err.to_string())
    }
}
