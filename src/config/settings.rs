//! Application settings loading from config.toml
//!
//! Settings cover where the trip document is stored and how the AI analysis
//! service is reached. Secrets (bot token, API key) come from the environment,
//! never from this file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Storage key of the trip log document, shared with the FreteSmart web app.
pub const DEFAULT_TRIPS_KEY: &str = "fretesmart_trips";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    /// Durable storage settings
    pub storage: StorageSettings,
    /// AI analysis service settings
    pub analysis: AnalysisSettings,
}

/// Where the trip sequence is kept
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageSettings {
    /// Key holding the serialized trip sequence
    pub trips_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            trips_key: DEFAULT_TRIPS_KEY.to_string(),
        }
    }
}

/// Gemini analysis settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Whether `/analyze` may call the AI service at all
    pub enabled: bool,
    /// Model name used in the `generateContent` path
    pub model: String,
    /// API base URL, without trailing slash
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gemini-3-pro-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file. A missing file yields the defaults.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config file at {:?}, using default settings", path);
        return Ok(Settings::default());
    }

    debug!("Loading settings from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}

/// Loads settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [storage]
            trips_key = "my_trips"

            [analysis]
            enabled = false
            model = "gemini-2.5-flash"
            endpoint = "http://localhost:8080/v1beta"
            timeout_secs = 5
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.storage.trips_key, "my_trips");
        assert!(!settings.analysis.enabled);
        assert_eq!(settings.analysis.model, "gemini-2.5-flash");
        assert_eq!(settings.analysis.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(settings.analysis.timeout_secs, 5);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings = parse_settings("[analysis]\ntimeout_secs = 10\n").unwrap();
        assert_eq!(settings.storage.trips_key, DEFAULT_TRIPS_KEY);
        assert!(settings.analysis.enabled);
        assert_eq!(settings.analysis.timeout_secs, 10);
    }

    #[test]
    fn test_invalid_settings_is_config_error() {
        let result = parse_settings("[storage]\ntrips_key = 12\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = load_settings("definitely/not/here/config.toml").unwrap();
        assert_eq!(settings.storage.trips_key, DEFAULT_TRIPS_KEY);
    }
}
