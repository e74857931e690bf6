//! Configuration for the `chorewheel` command.
//!
//! Settings are layered with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/chorewheel/config.toml`)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use chrono::NaiveDate;

use crate::task::domain::{DayFormat, TaskDomainError};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured day format is not a valid pattern.
    #[error(transparent)]
    DayFormat(#[from] TaskDomainError),

    /// The platform data directory is not valid UTF-8.
    #[error("data directory {} is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),
}

/// How the board is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per board.
    Json,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ChorewheelConfigFile {
    board: BoardFileConfig,
}

/// `[board]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BoardFileConfig {
    snapshot: Option<Utf8PathBuf>,
    day_format: Option<String>,
    output: Option<OutputFormat>,
    pretty: Option<bool>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for `chorewheel`.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Household chore board")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/chorewheel/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board snapshot file.
    #[arg(short, long, env = "CHOREWHEEL_SNAPSHOT")]
    pub snapshot: Option<Utf8PathBuf>,

    /// strftime pattern for the current-day label.
    #[arg(long)]
    pub day_format: Option<String>,

    /// Output format for the board.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "CHOREWHEEL_LOG")]
    pub log_level: String,

    /// Operation to run; defaults to `show`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Board operations.
#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Catch the day cursor up with today and print the board.
    Show,
    /// Mark a pending task done.
    Done {
        /// Identifier of the pending task.
        id: u64,
        /// Stash the task until next month instead of returning it.
        #[arg(long)]
        stash: bool,
    },
    /// Move the day cursor forward to the given date.
    Advance {
        /// Target day, `YYYY-MM-DD`.
        day: NaiveDate,
    },
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct ChorewheelConfig {
    /// Board snapshot file.
    pub snapshot_path: Utf8PathBuf,
    /// Pattern for the current-day label.
    pub day_format: DayFormat,
    /// Output format for the board.
    pub output: OutputFormat,
    /// Indent JSON output.
    pub pretty_json: bool,
    /// Log level filter string.
    pub log_level: String,
}

impl ChorewheelConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or a resolved setting is invalid.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    /// Priority: CLI > file > default.
    fn resolve(cli: &CliArgs, file: &ChorewheelConfigFile) -> Result<Self, ConfigError> {
        let snapshot_path = match cli
            .snapshot
            .clone()
            .or_else(|| file.board.snapshot.clone())
        {
            Some(path) => path,
            None => default_snapshot_path()?,
        };
        let day_format = cli
            .day_format
            .as_deref()
            .or(file.board.day_format.as_deref())
            .map(DayFormat::new)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            snapshot_path,
            day_format,
            output: cli.output.or(file.board.output).unwrap_or_default(),
            pretty_json: cli.pretty || file.board.pretty.unwrap_or(false),
            log_level: cli.log_level.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// `<data_dir>/chorewheel/board.json`, or `board.json` when the platform has
/// no data directory.
fn default_snapshot_path() -> Result<Utf8PathBuf, ConfigError> {
    let Some(data_dir) = dirs::data_dir() else {
        return Ok(Utf8PathBuf::from("board.json"));
    };
    let root = Utf8PathBuf::from_path_buf(data_dir).map_err(ConfigError::NonUtf8Path)?;
    Ok(root.join("chorewheel").join("board.json"))
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<ChorewheelConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ChorewheelConfigFile::default());
    };
    let path = config_dir.join("chorewheel").join("config.toml");
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(ChorewheelConfigFile::default())
        }
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
