//! Configuration for the dashboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/shoebox/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `main`.

use crate::stats::YearOrder;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the stats backend (without `/api/stats`)
    pub api_url: String,

    /// Whole-request timeout for a stats fetch
    pub request_timeout_secs: u64,

    /// Theme name: "dark", "light", "trail"
    pub theme: String,

    /// Direction of the yearly rollup
    pub yearly_order: YearOrder,

    pub logging: LoggingConfig,

    /// Whether to enable the TUI (disabled = print one report and exit)
    pub enable_tui: bool,

    /// Serve generated data from an in-process backend
    pub demo_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: DEFAULT_THEME.to_string(),
            yearly_order: YearOrder::default(),
            logging: LoggingConfig::default(),
            enable_tui: true,
            demo_mode: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (runtime flags are env/CLI only)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub yearly_order: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

fn env_flag(value: Option<String>) -> Option<bool> {
    value.map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl Config {
    /// Get the config file path: ~/.config/shoebox/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("shoebox").join("config.toml"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file; a missing file yields defaults
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Merge a parsed file with environment lookups and defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = env("SHOEBOX_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        let request_timeout_secs = env("SHOEBOX_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(defaults.request_timeout_secs);

        let theme = env("SHOEBOX_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let yearly_order = file
            .yearly_order
            .map(|s| YearOrder::from_config(&s))
            .unwrap_or(defaults.yearly_order);

        // Runtime toggles: env only
        let enable_tui = env_flag(env("SHOEBOX_NO_TUI"))
            .map(|no_tui| !no_tui)
            .unwrap_or(defaults.enable_tui);
        let demo_mode = env_flag(env("SHOEBOX_DEMO")).unwrap_or(defaults.demo_mode);

        Self {
            api_url,
            request_timeout_secs,
            theme,
            yearly_order,
            logging: LoggingConfig::from_file(file.logging),
            enable_tui,
            demo_mode,
        }
    }

    /// Values from the file alone, ignoring the environment
    ///
    /// Used when rewriting the file so env overrides never leak into it.
    pub(crate) fn from_file_only(path: &Path) -> Result<Self> {
        Ok(Self::resolve(Self::load_file_config(path)?, |_| None))
    }

    /// Load configuration: env vars -> file -> defaults
    ///
    /// A config file that exists but cannot be parsed is fatal. Silently
    /// falling back to defaults would leave the user debugging the wrong thing.
    pub fn from_env() -> Self {
        let file = match Self::config_path() {
            Some(path) => match Self::load_file_config(&path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - {:#}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `shoebox config --reset`.\n");
                    std::process::exit(1);
                }
            },
            None => FileConfig::default(),
        };

        Self::resolve(file, |key| std::env::var(key).ok())
    }
}
