//! Application configuration management.
//!
//! Holds the provider credentials, the API base URL and logging preferences.
//! Configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{UaError, UaResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider credentials and endpoint.
    #[serde(default)]
    pub airship: AirshipConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Provider connection configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AirshipConfig {
    /// Application key.
    #[serde(default)]
    pub key: String,

    /// Application (master) secret.
    #[serde(default)]
    pub secret: String,

    /// API root, e.g. "https://go.urbanairship.com/api/".
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AirshipConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            secret: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for AirshipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirshipConfig")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AirshipConfig {
    /// Whether both halves of the credential pair are present.
    pub fn is_configured(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }

    /// Normalize a base URL.
    ///
    /// Strips whitespace and quotes, defaults a missing scheme to https and
    /// guarantees a single trailing slash. Scheme validation is left to
    /// the endpoint table.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return default_base_url();
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        format!("{}/", with_scheme.trim_end_matches('/'))
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> UaResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> UaResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file path.
    pub fn save_default(&self) -> UaResult<()> {
        let path = Self::default_config_path()?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> UaResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| UaError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// - Linux: `~/.config/urbanairship/config.toml`
    /// - macOS: `~/Library/Application Support/urbanairship/config.toml`
    /// - Windows: `%APPDATA%/urbanairship/config.toml`
    pub fn default_config_path() -> UaResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| UaError::Config("could not determine config directory".into()))?;
        Ok(base
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> UaResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let base = dirs::data_dir()
                .ok_or_else(|| UaError::Config("could not determine data directory".into()))?;
            Ok(base.join(constants::CONFIG_DIR_NAME).join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }
}
