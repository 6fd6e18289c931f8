//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`$XDG_CONFIG_HOME/fogline/config.toml` or
//!    `~/.config/fogline/config.toml`), `[logging]` table
//! 3. Built-in defaults
//!
//! ```toml
//! color = "auto"
//!
//! [logging]
//! level = "debug"
//! report_caller = true
//! timestamp_format = "%Y-%m-%d ¤ %H:%M:%S"
//! show_full_path = false
//! display_width = 22
//! path_segments = 2
//! local_time = false
//! ```
//!
//! The level string is kept as written; it is validated when the logger is
//! built, so a bad value surfaces as a startup error.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LogError;
use crate::formatter::{DEFAULT_PATH_SEGMENTS, DEFAULT_WIDTH, FormatterConfig};
use crate::timestamp;

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level name, e.g. `"info"`.
    pub level: String,
    /// Include the call-site column.
    pub report_caller: bool,
    /// strftime pattern for the timestamp column.
    pub timestamp_format: String,
    pub show_full_path: bool,
    pub display_width: usize,
    pub path_segments: usize,
    /// Render timestamps in the system zone instead of UTC.
    pub local_time: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            report_caller: true,
            timestamp_format: timestamp::DEFAULT_FORMAT.to_string(),
            show_full_path: false,
            display_width: DEFAULT_WIDTH,
            path_segments: DEFAULT_PATH_SEGMENTS,
            local_time: false,
        }
    }
}

impl LoggingConfig {
    /// The formatter settings carried by this configuration.
    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            timestamp_format: self.timestamp_format.clone(),
            show_full_path: self.show_full_path,
            display_width: self.display_width,
            path_segments: self.path_segments,
            time_zone: if self.local_time {
                TimeZone::system()
            } else {
                TimeZone::UTC
            },
        }
    }
}

/// Runtime configuration merged from defaults, config file, and CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults. A config file
    /// named with `--config` must exist.
    pub fn from_cli(cli: &Cli) -> Result<Self, LogError> {
        let mut config = Self::default();

        match cli.config {
            Some(ref path) => {
                config.apply_file_config(FileConfig::load(path)?);
            }
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    config.apply_file_config(FileConfig::load(&path)?);
                }
            }
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }

        let logging = &mut config.logging;
        if let Some(ref level) = cli.level {
            logging.level.clone_from(level);
        }
        if let Some(ref format) = cli.timestamp_format {
            logging.timestamp_format.clone_from(format);
        }
        if let Some(width) = cli.width {
            logging.display_width = width;
        }
        if let Some(segments) = cli.segments {
            logging.path_segments = segments;
        }
        if cli.full_path {
            logging.show_full_path = true;
        }
        if cli.no_caller {
            logging.report_caller = false;
        }
        if cli.local_time {
            logging.local_time = true;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/fogline/config.toml` or
    /// `~/.config/fogline/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("fogline").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("fogline")
                .join("config.toml")
        } else {
            PathBuf::from(".config/fogline/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = ColorMode::from_config_str(&color);
        }

        let Some(section) = file.logging else {
            return;
        };
        let logging = &mut self.logging;
        if let Some(level) = section.level {
            logging.level = level;
        }
        if let Some(report_caller) = section.report_caller {
            logging.report_caller = report_caller;
        }
        if let Some(format) = section.timestamp_format {
            logging.timestamp_format = format;
        }
        if let Some(full) = section.show_full_path {
            logging.show_full_path = full;
        }
        if let Some(width) = section.display_width {
            logging.display_width = width;
        }
        if let Some(segments) = section.path_segments {
            logging.path_segments = segments;
        }
        if let Some(local) = section.local_time {
            logging.local_time = local;
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSection {
    level: Option<String>,
    #[serde(alias = "reportCaller")]
    report_caller: Option<bool>,
    timestamp_format: Option<String>,
    show_full_path: Option<bool>,
    display_width: Option<usize>,
    path_segments: Option<usize>,
    local_time: Option<bool>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
