//! Curriculum fragment client
//!
//! Fetches individually hosted curriculum fragments with a bounded wait,
//! status and content-type checks, and shape validation. Failures are typed
//! so that callers can skip one fragment without abandoning a whole batch.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use curriculum_client::{FragmentSource, HttpFragmentSource, HttpSourceConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpFragmentSource::new(HttpSourceConfig {
//!     origin: "http://localhost:5173".into(),
//!     ..Default::default()
//! })?;
//!
//! match source.fetch_fragment("AT-17 - 17 - Vetores.json", Duration::from_secs(30)).await {
//!     Ok(fragment) => println!("{} areas", fragment.curriculum_data.areas.len()),
//!     Err(e) if e.is_malformed() => eprintln!("skipping malformed fragment: {}", e),
//!     Err(e) => eprintln!("skipping unavailable fragment: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod location;
pub mod mock;
pub mod source;

pub use error::{FetchError, Result};
pub use http::{HttpFragmentSource, HttpSourceConfig};
pub use location::{resolve_base_path, SourceLocation};
pub use mock::MockFragmentSource;
pub use source::{FragmentSource, SourceIndex, INDEX_FILE};
