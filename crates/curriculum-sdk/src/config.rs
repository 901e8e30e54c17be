//! Curriculum engine configuration
//!
//! Loaded from TOML. Every section and field is optional:
//!
//! ```toml
//! [source]
//! origin = "https://someone.github.io"
//! page_url = "https://someone.github.io/ita-rp/"
//! listing = "index-with-fallback"
//! excluded_sources = ["RJ-72 - 72"]
//!
//! [fetch]
//! full_timeout_secs = 30
//! chunk_timeout_secs = 60
//! max_concurrent_fetches = 4
//!
//! [chunking]
//! size_threshold_bytes = 1048576
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use curriculum_client::HttpSourceConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CurriculumError, Result};
use crate::sources::DEFAULT_SOURCES;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurriculumConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

/// How the list of fragment names is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingMode {
    /// `curriculum/index.json` only; an unreadable index fails assembly
    Index,
    /// `static_sources` only
    Static,
    /// The index, falling back to probing `static_sources`
    #[default]
    IndexWithFallback,
}

impl FromStr for ListingMode {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "index" => Ok(Self::Index),
            "static" => Ok(Self::Static),
            "index-with-fallback" => Ok(Self::IndexWithFallback),
            other => Err(CurriculumError::Config(format!("unknown listing mode: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Scheme and host the curriculum is served from
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Explicit base path; unset or `/` enables the GitHub Pages heuristic
    #[serde(default)]
    pub base_path: Option<String>,

    /// URL of the page hosting the application
    #[serde(default)]
    pub page_url: Option<String>,

    #[serde(default)]
    pub listing: ListingMode,

    /// Fragment names used by the static listing and the index fallback
    #[serde(default = "default_static_sources")]
    pub static_sources: Vec<String>,

    /// Names, or name prefixes, that are always skipped
    #[serde(default = "default_excluded_sources")]
    pub excluded_sources: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_path: None,
            page_url: None,
            listing: ListingMode::default(),
            static_sources: default_static_sources(),
            excluded_sources: default_excluded_sources(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Wait bound for full fragment bodies
    #[serde(default = "default_full_timeout")]
    pub full_timeout_secs: u64,

    /// Wait bound for deferred fragments loaded on demand
    #[serde(default = "default_chunk_timeout")]
    pub chunk_timeout_secs: u64,

    /// Fragments fetched in parallel during assembly. Values below 1 are
    /// treated as 1; see [`FetchConfig::concurrency`].
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_fetches: usize,

    /// Largest fragment accepted when probing the fallback listing
    #[serde(default = "default_max_fragment_bytes")]
    pub max_fragment_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            full_timeout_secs: default_full_timeout(),
            chunk_timeout_secs: default_chunk_timeout(),
            max_concurrent_fetches: default_max_concurrent(),
            max_fragment_bytes: default_max_fragment_bytes(),
        }
    }
}

impl FetchConfig {
    pub fn full_timeout(&self) -> Duration {
        Duration::from_secs(self.full_timeout_secs)
    }

    pub fn chunk_timeout(&self) -> Duration {
        Duration::from_secs(self.chunk_timeout_secs)
    }

    /// Fan-out width for parallel fetches, never zero
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Fragments larger than this are deferred until first access
    #[serde(default = "default_size_threshold")]
    pub size_threshold_bytes: u64,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            size_threshold_bytes: default_size_threshold(),
        }
    }
}

/// Stamped on every assembled document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_format_version")]
    pub format_version: String,
    #[serde(default = "default_app_version")]
    pub app_version: String,
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default = "default_daily_study_hours")]
    pub daily_study_hours: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_institution")]
    pub institution: String,
    #[serde(default = "default_based_on")]
    pub based_on: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            app_version: default_app_version(),
            start_date: default_start_date(),
            duration: default_duration(),
            daily_study_hours: default_daily_study_hours(),
            version: default_version(),
            institution: default_institution(),
            based_on: default_based_on(),
        }
    }
}

// Defaults
fn default_origin() -> String { "http://localhost:5173".to_string() }
fn default_static_sources() -> Vec<String> {
    DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
}
// Fragments too large to serve whole
fn default_excluded_sources() -> Vec<String> {
    ["RJ-72 - 72", "RJ-74 - 74", "RJ-78 - 78", "SP-65 - 65"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_full_timeout() -> u64 { 30 }
fn default_chunk_timeout() -> u64 { 60 }
fn default_max_concurrent() -> usize { 4 }
fn default_max_fragment_bytes() -> u64 { 2 * 1024 * 1024 } // 2MB
fn default_size_threshold() -> u64 { 1024 * 1024 } // 1MB
fn default_format_version() -> String { "1.0".to_string() }
fn default_app_version() -> String { "2.0.0".to_string() }
fn default_start_date() -> String { "2025-01-01".to_string() }
fn default_duration() -> String { "1 Semestre".to_string() }
fn default_daily_study_hours() -> String { "6-8 hours".to_string() }
fn default_version() -> String { "2.0 - ITA RP Reborn".to_string() }
fn default_institution() -> String { "Instituto Tecnológico de Aeronáutica (ITA)".to_string() }
fn default_based_on() -> String { "Catálogo dos Cursos de Graduação 2025 - CC201".to_string() }

impl CurriculumConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurriculumError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch.full_timeout_secs == 0 || self.fetch.chunk_timeout_secs == 0 {
            return Err(CurriculumError::Config("fetch timeouts must be positive".to_string()));
        }
        if self.fetch.max_concurrent_fetches == 0 {
            return Err(CurriculumError::Config(
                "max_concurrent_fetches must be at least 1".to_string(),
            ));
        }
        if self.source.listing == ListingMode::Static && self.source.static_sources.is_empty() {
            return Err(CurriculumError::Config(
                "static listing requires at least one static source".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for the HTTP fragment source
    pub fn http_source(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            origin: self.source.origin.clone(),
            base_path: self.source.base_path.clone(),
            page_url: self.source.page_url.clone(),
            index_timeout_secs: self.fetch.full_timeout_secs,
            ..Default::default()
        }
    }

    /// Whether `source_name` matches an exclusion entry
    pub fn is_excluded(&self, source_name: &str) -> bool {
        self.source
            .excluded_sources
            .iter()
            .any(|excluded| !excluded.is_empty() && source_name.starts_with(excluded.as_str()))
    }
}
