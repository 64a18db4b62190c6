//! Configuration settings for the pulsegate authentication core.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub secret: SecretConfig,
    #[serde(default)]
    pub freshness: FreshnessConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shared-secret configuration.
///
/// The secret and its declared encoding are the single point where both
/// endpoints must agree out-of-band. The encoding is a required field:
/// it is pinned by configuration, never auto-detected, because a sender
/// and receiver that silently pick different interpretations of the same
/// string each appear locally correct while never agreeing on a digest.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    /// Inline secret value.
    pub value: Option<String>,
    /// Path to a secret file (alternative to `value`).
    pub file: Option<PathBuf>,
    /// How the configured secret string is turned into key bytes.
    pub encoding: SecretEncoding,
}

/// Declared encoding of the configured secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretEncoding {
    /// The configured string's UTF-8 bytes are the key, verbatim.
    Ascii,
    /// The configured string is hex-decoded; the decoded bytes are the key.
    Hex,
}

/// Freshness window configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FreshnessConfig {
    /// Maximum accepted age of a reading in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
    /// Maximum tolerated clock skew for future-dated readings.
    #[serde(default = "default_max_future_skew")]
    pub max_future_skew_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("pretty" or "json").
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_max_age() -> u64 {
    300
}

fn default_max_future_skew() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            max_age_seconds: default_max_age(),
            max_future_skew_seconds: default_max_future_skew(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AuthError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| AuthError::Config {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), AuthError> {
        // Exactly one secret source must be configured
        match (&self.secret.value, &self.secret.file) {
            (None, None) => {
                return Err(AuthError::Config {
                    message: "No secret configured: set either secret.value or secret.file"
                        .to_string(),
                });
            }
            (Some(_), Some(_)) => {
                return Err(AuthError::Config {
                    message: "Ambiguous secret: set secret.value or secret.file, not both"
                        .to_string(),
                });
            }
            _ => {}
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AuthError::Config {
                message: format!(
                    "Invalid log level '{}'. Valid levels: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        // Validate log format
        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(AuthError::Config {
                message: format!(
                    "Invalid log format '{}'. Valid formats: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }
}
