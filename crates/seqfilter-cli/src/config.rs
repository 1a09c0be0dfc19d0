//! Configuration management for the seqfilter CLI
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `SEQFILTER_*` environment variables. Command-line flags are applied last
//! by the filter command.

use crate::error::{CliError, Result};
use seqfilter_common::MatchLogic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// FASTA wrap width, 0 for single-line sequences
    pub line_width: usize,

    /// Combination of identifier sets from several tables
    pub logic: MatchLogic,

    /// Ignore `/1` and `/2` read-pair suffixes
    pub drop_pair_suffix: bool,

    /// Show a progress spinner on a terminal
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: 0,
            logic: MatchLogic::Union,
            drop_pair_suffix: false,
            progress: true,
        }
    }
}

impl Config {
    /// Per-user config file location (`<config dir>/seqfilter/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seqfilter").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the per-user file is read
    /// when present. Environment variables are merged on top.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.merge_env()
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(toml::from_str(&text)?)
    }

    /// Override fields from environment variables
    ///
    /// - `SEQFILTER_LINE_WIDTH`: FASTA wrap width
    /// - `SEQFILTER_LOGIC`: union or intersection
    /// - `SEQFILTER_DROP_PAIR_SUFFIX`: true/false
    /// - `SEQFILTER_PROGRESS`: true/false
    pub fn merge_env(self) -> Result<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(width) = var("SEQFILTER_LINE_WIDTH") {
            self.line_width = width.trim().parse().map_err(|_| {
                CliError::config(format!("SEQFILTER_LINE_WIDTH must be a number, got '{}'", width))
            })?;
        }
        if let Some(logic) = var("SEQFILTER_LOGIC") {
            self.logic = logic.parse()?;
        }
        if let Some(flag) = var("SEQFILTER_DROP_PAIR_SUFFIX") {
            self.drop_pair_suffix = parse_flag("SEQFILTER_DROP_PAIR_SUFFIX", &flag)?;
        }
        if let Some(flag) = var("SEQFILTER_PROGRESS") {
            self.progress = parse_flag("SEQFILTER_PROGRESS", &flag)?;
        }
        Ok(self)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(CliError::config(format!(
            "{} must be true or false, got '{}'",
            name, other
        ))),
    }
}
