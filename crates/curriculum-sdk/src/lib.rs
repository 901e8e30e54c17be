//! Curriculum SDK
//!
//! Assembles a curriculum from independently served fragments and keeps
//! id-keyed views of it for fast lookup.
//!
//! Two stores implement the same [`CurriculumLoader`] read API:
//!
//! - [`CurriculumStore`] fetches every fragment up front, merges them into
//!   one document and memoizes it until `clear_cache`.
//! - [`ChunkedCurriculumStore`] probes fragment sizes first, loads the small
//!   ones immediately and defers large ones until their discipline is
//!   requested, publishing progress as it goes.
//!
//! Both coalesce concurrent callers onto one in-flight load, and both
//! tolerate individual fragment failures: a broken fragment reduces
//! coverage, it does not fail the load.

pub mod assembly;
pub mod cache;
pub mod chunked;
pub mod chunks;
pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod progress;
pub mod sources;
pub mod store;

pub use assembly::stamp_document;
pub use cache::AggregateCache;
pub use chunked::{ChunkedCurriculumStore, DisciplineMeta};
pub use chunks::{ChunkMarker, DisciplineChunks};
pub use config::{ChunkingConfig, CurriculumConfig, FetchConfig, ListingMode, MetadataConfig, SourceConfig};
pub use error::{CurriculumError, EntityKind, Result};
pub use listing::resolve_sources;
pub use loader::{BatchLoad, CurriculumLoader, SearchResults};
pub use progress::{LoadingProgress, LoadingStage, ProgressReporter};
pub use sources::DEFAULT_SOURCES;
pub use store::CurriculumStore;
