//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "notestore";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default storage root
    pub root: Option<PathBuf>,

    /// Log filter used when neither `-v` nor `RUST_LOG` is given
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or the default if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notestore/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Resolve the storage root, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--root` argument
    /// 2. Config file `root` setting
    /// 3. Platform data directory (`~/.local/share/notestore` on Linux)
    /// 4. Current working directory
    pub fn storage_root(&self, cli_root: Option<&PathBuf>) -> PathBuf {
        cli_root
            .cloned()
            .or_else(|| self.root.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the default log filter from the `-v` count.
    ///
    /// Without `-v` the config file `log_level` applies, then `warn`.
    pub fn log_filter(&self, verbose: u8) -> String {
        match verbose {
            0 => self.log_level.clone().unwrap_or_else(|| "warn".to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
