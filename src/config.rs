//! Configuration management for the linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project or user level)

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Name of the project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".qmdlint.toml";

/// Command-line arguments for the linter
#[derive(Debug, Parser)]
#[command(name = "qmd-lint")]
#[command(about = "Structural linter for Quarto markdown documents")]
#[command(version)]
pub struct Args {
    /// Documents to lint, in order
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Explicit config file
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Exit with status 0 even when diagnostics were emitted
    #[arg(long)]
    pub exit_zero: bool,

    /// Log level for stderr logging
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Settings read from a config file
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub exit_zero: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub exit_zero: bool,
    pub log_level: String,
    /// Config file that was applied, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, discovering config files
    /// in the working directory and the user config directory
    pub fn from_args(args: Args) -> Result<Self> {
        let project_dir =
            std::env::current_dir().context("could not determine working directory")?;
        let user_dir = dirs::config_dir().map(|dir| dir.join("qmd-lint"));
        Self::from_args_with_dirs(args, &project_dir, user_dir.as_deref())
    }

    /// Create configuration with explicit lookup directories (useful for testing)
    pub fn from_args_with_dirs(
        args: Args,
        project_dir: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Self> {
        let config_path = match args.config {
            Some(path) => {
                if !path.is_file() {
                    return Err(anyhow!("config file {} does not exist", path.display()));
                }
                Some(path)
            }
            None => discover_config(project_dir, user_dir),
        };

        let file_config = match &config_path {
            Some(path) => {
                log::debug!("Using config file {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Config {
            files: args.files,
            format: args.format.or(file_config.format).unwrap_or_default(),
            exit_zero: args.exit_zero || file_config.exit_zero.unwrap_or(false),
            log_level: args.log_level,
            config_path,
        })
    }
}

/// Project config wins over the user config
fn discover_config(project_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let project = project_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }
    user_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|path| path.is_file())
}
