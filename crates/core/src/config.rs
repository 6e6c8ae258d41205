//! Configuration management for the ragask client.
//!
//! Configuration is merged from several sources, lowest precedence first:
//! - Built-in defaults
//! - Config file (`RAGASK_CONFIG` or `.ragask/config.yaml`)
//! - Environment variables
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Base address of the ask service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Base URL of the ask service
    pub base_url: String,

    /// Whole-request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,

    /// Candidate count forwarded to the backend retriever
    pub top_k: Option<u32>,

    /// Reranked candidate count forwarded to the backend
    pub rerank_top_n: Option<u32>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    backend: Option<BackendConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackendConfig {
    base_url: Option<String>,
    timeout: Option<u64>,
    top_k: Option<u32>,
    rerank_top_n: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            top_k: None,
            rerank_top_n: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a config file, environment variables and defaults.
    ///
    /// `config_file` is normally the `--config` flag (clap also reads
    /// `RAGASK_CONFIG` into it). Without one, `.ragask/config.yaml` in the
    /// current directory is used if present. A missing default file is not an
    /// error; a missing explicit file is.
    ///
    /// Environment variables (read here and nowhere else):
    /// - `RAGASK_BASE_URL`: Base URL of the ask service
    /// - `RAGASK_TIMEOUT`: Request timeout in seconds
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use ragask_core::config::AppConfig;
    ///
    /// let config = AppConfig::load_from(None).expect("Failed to load config");
    /// println!("Backend: {}", config.base_url);
    /// ```
    pub fn load_from(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config.config_file = Some(path.clone());
                Some(path)
            }
            None => {
                let default_path = PathBuf::from(".ragask/config.yaml");
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = config_path {
            config = config.merge_yaml(&path)?;
        }

        config.merge_env(|key| std::env::var(key).ok())
    }

    /// Apply environment variables on top of this config.
    ///
    /// This is the only place the process environment is consulted; `lookup`
    /// is injectable so precedence can be tested without touching it.
    fn merge_env<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("RAGASK_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(timeout) = lookup("RAGASK_TIMEOUT") {
            self.timeout_secs = Some(parse_timeout(&timeout)?);
        }

        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = Some(level);
        }

        // Any value counts, including "1" and "true".
        if lookup("NO_COLOR").is_some() {
            self.no_color = true;
        }

        Ok(self)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        self.merge_yaml_str(&contents).map_err(|e| match e {
            AppError::Serialization(msg) => {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, msg))
            }
            other => other,
        })
    }

    fn merge_yaml_str(&self, contents: &str) -> AppResult<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(contents)?
        };

        let mut result = self.clone();

        if let Some(backend) = config_file.backend {
            if let Some(base_url) = backend.base_url {
                result.base_url = base_url;
            }
            if backend.timeout.is_some() {
                result.timeout_secs = backend.timeout;
            }
            if backend.top_k.is_some() {
                result.top_k = backend.top_k;
            }
            if backend.rerank_top_n.is_some() {
                result.rerank_top_n = backend.rerank_top_n;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over everything loaded so far.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }

        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// The configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("Base URL must not be empty".to_string()));
        }

        if self.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Timeout must be at least one second; omit it to wait indefinitely".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_timeout(raw: &str) -> AppResult<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        AppError::Config(format!("Invalid RAGASK_TIMEOUT value {:?}: {}", raw, e))
    })
}
