//! Curriculum CLI
//!
//! Argument parsing and command rendering for the `curriculum` binary.

pub mod commands;
pub mod config;

pub use commands::{progress_line, run, Report};
pub use config::{Args, Command};
