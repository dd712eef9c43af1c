//! Configuration loading.
//!
//! Merges, in precedence order (highest first):
//! 1. `HEAVYWORD_*` environment variables
//! 2. Explicit config files (e.g., from `--config`)
//! 3. `heavyword.toml` / `.heavyword.toml` in the project directory
//! 4. Default values
//!
//! # Example
//! ```no_run
//! use heavyword_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load().unwrap();
//! println!("minimum word length: {}", config.min_word_len);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default minimum word length: shorter tokens are discarded before they
/// count toward the filtered total.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

/// Default summary size `k` when the caller supplies none.
pub const DEFAULT_SUMMARY_SIZE: u64 = 100;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information.
    Info,
    /// Warnings about potential issues (default).
    #[default]
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The configuration for heavyword.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Minimum word length for the token filter.
    pub min_word_len: usize,
    /// Default summary size `k` when not given on the command line.
    pub summary_size: u64,
    /// Log level for the application.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            summary_size: DEFAULT_SUMMARY_SIZE,
            log_level: LogLevel::default(),
        }
    }
}

/// Config file names searched in the project directory (low→high precedence).
const CONFIG_FILE_NAMES: &[&str] = &[".heavyword.toml", "heavyword.toml"];

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Directory searched for project config files.
    project_dir: Option<Utf8PathBuf>,
    /// Explicit config files to load (highest file precedence, in order).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to search for `heavyword.toml` / `.heavyword.toml`.
    pub fn with_project_dir<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add an explicit config file. Later files take precedence and all
    /// explicit files override discovered ones.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all sources.
    #[tracing::instrument(skip(self), fields(project_dir = ?self.project_dir))]
    pub fn load(self) -> ConfigResult<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(ref dir) = self.project_dir {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    figment = figment.merge(Toml::file(candidate.as_std_path()));
                }
            }
        }

        for file in &self.explicit_files {
            figment = figment.merge(Toml::file(file.as_std_path()));
        }

        figment = figment.merge(Env::prefixed("HEAVYWORD_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            min_word_len = config.min_word_len,
            summary_size = config.summary_size,
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_any_file() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.min_word_len, DEFAULT_MIN_WORD_LEN);
        assert_eq!(config.summary_size, DEFAULT_SUMMARY_SIZE);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "min_word_len = 4\nlog_level = \"debug\"").unwrap();
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.min_word_len, 4);
        assert_eq!(config.log_level, LogLevel::Debug);
        // untouched fields keep their defaults
        assert_eq!(config.summary_size, DEFAULT_SUMMARY_SIZE);
    }

    #[test]
    fn project_dir_discovery_finds_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("heavyword.toml"), "summary_size = 25").unwrap();
        let dir_path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let config = ConfigLoader::new()
            .with_project_dir(&dir_path)
            .load()
            .unwrap();
        assert_eq!(config.summary_size, 25);
    }
}
