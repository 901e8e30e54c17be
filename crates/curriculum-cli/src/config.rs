//! Command-line configuration
//!
//! CLI arguments and environment variables (via clap), layered over an
//! optional TOML config file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use curriculum_sdk::{CurriculumConfig, ListingMode, Result};

/// Curriculum inspection tool
#[derive(Parser, Debug, Clone)]
#[command(name = "curriculum")]
#[command(about = "Inspect a curriculum served as per-discipline JSON fragments")]
pub struct Args {
    /// TOML config file
    #[arg(long, env = "CURRICULUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Scheme and host the curriculum is served from
    #[arg(long, env = "CURRICULUM_ORIGIN")]
    pub origin: Option<String>,

    /// Base path the application is served under, e.g. /ita-rp-reborn/
    #[arg(long, env = "CURRICULUM_BASE_PATH")]
    pub base_path: Option<String>,

    /// How fragment names are listed (index, static, index-with-fallback)
    #[arg(long, env = "CURRICULUM_LISTING")]
    pub listing: Option<ListingMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Use the progressive loader: large disciplines load on demand
    #[arg(long, env = "CURRICULUM_CHUNKED", default_value = "false")]
    pub chunked: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Areas, disciplines and skill totals
    Summary,

    /// Structural validation; exits with status 1 when invalid
    Validate,

    /// Disciplines and skills whose name or description match
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// One discipline and its skills
    Discipline {
        /// Discipline id, or a fragment code such as IS-15
        id: String,
    },

    /// One skill
    Skill {
        /// Namespaced skill id, e.g. AT-17.1.1.1
        id: String,
    },
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    pub fn curriculum_config(&self) -> Result<CurriculumConfig> {
        let mut config = match &self.config {
            Some(path) => CurriculumConfig::load(path)?,
            None => CurriculumConfig::default(),
        };

        if let Some(origin) = &self.origin {
            config.source.origin = origin.clone();
        }
        if let Some(base_path) = &self.base_path {
            config.source.base_path = Some(base_path.clone());
        }
        if let Some(listing) = self.listing {
            config.source.listing = listing;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_over_defaults() {
        let args = Args::parse_from([
            "curriculum",
            "--origin",
            "https://ita-rp.github.io",
            "--base-path",
            "/ita-rp-reborn/",
            "--listing",
            "static",
            "--chunked",
            "discipline",
            "IS-15",
        ]);

        assert!(args.chunked);
        assert!(!args.json);
        assert!(matches!(args.command, Command::Discipline { ref id } if id == "IS-15"));

        let config = args.curriculum_config().unwrap();
        assert_eq!(config.source.origin, "https://ita-rp.github.io");
        assert_eq!(config.source.base_path.as_deref(), Some("/ita-rp-reborn/"));
        assert_eq!(config.source.listing, ListingMode::Static);
    }

    #[test]
    fn test_unknown_listing_is_rejected() {
        let parsed = Args::try_parse_from(["curriculum", "--listing", "sideways", "summary"]);
        assert!(parsed.is_err());
    }
}
