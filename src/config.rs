//! Configuration management for the dash-group driver.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project-local or per-user)
//!
//! Precedence is command line, then config file, then defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::field::ImeStrategy;

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".dashgroup.toml";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments for the dash-group driver
#[derive(Debug, Default, Parser)]
#[command(name = "dashgroup")]
#[command(about = "Replay keystrokes through a dash-grouping input field")]
#[command(version)]
pub struct Args {
    /// Input method behavior of the simulated field
    #[arg(long, value_enum, help = "Input method strategy")]
    pub ime: Option<ImeStrategy>,

    /// Emit one JSON snapshot per input line
    #[arg(long, help = "Print snapshots as JSON")]
    pub json: bool,

    /// Explicit config file
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the driver
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Contents of a config file; every key is optional
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ime: Option<ImeStrategy>,
    pub json: Option<bool>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub ime_strategy: ImeStrategy,
    pub json: bool,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ime_strategy: ImeStrategy::default(),
            json: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_path: None,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let (file, config_path) = match args.config {
            Some(path) => (FileConfig::load(&path)?, Some(path)),
            None => match Self::find_config_file() {
                Some(path) => (FileConfig::load(&path)?, Some(path)),
                None => (FileConfig::default(), None),
            },
        };

        Ok(Self::merge(args.ime, args.json, args.log_level, file, config_path))
    }

    fn merge(
        ime: Option<ImeStrategy>,
        json: bool,
        log_level: Option<String>,
        file: FileConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Config {
            ime_strategy: ime.or(file.ime).unwrap_or_default(),
            json: json || file.json.unwrap_or(false),
            log_level: log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path,
        }
    }

    /// Project file first, then the per-user config directory
    fn find_config_file() -> Option<PathBuf> {
        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        dirs::config_dir()
            .map(|dir| dir.join("dashgroup").join("config.toml"))
            .filter(|path| path.is_file())
    }
}
