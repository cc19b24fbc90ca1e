//! Pricer configuration management.
//!
//! Handles loading of the pricing request from TOML files with
//! environment variable override support.

use pricer_lattice::lattice::TrinomialModel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Inputs of a single pricing run.
///
/// `option_type` is kept as text so that unrecognised values surface as a
/// pricing error rather than a configuration parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Initial asset price (S0)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Up factor (u)
    pub up: f64,
    /// Middle factor (m)
    pub mid: f64,
    /// Down factor (d)
    pub down: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Step length (dt)
    pub dt: f64,
    /// `call` or `put`
    pub option_type: String,
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            up: 1.2,
            mid: 1.0,
            down: 0.8,
            rate: 0.0,
            dt: 1.0,
            option_type: "call".to_string(),
        }
    }
}

impl PricingRequest {
    /// Lattice model described by this request.
    pub fn model(&self) -> TrinomialModel<f64> {
        TrinomialModel::new(self.spot, self.up, self.mid, self.down, self.rate, self.dt)
    }
}

/// Pricer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricerConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pricing request
    #[serde(default)]
    pub request: PricingRequest,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request: PricingRequest::default(),
        }
    }
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("TRINOMIAL_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(option_type) = std::env::var("TRINOMIAL_OPTION_TYPE") {
            self.request.option_type = option_type;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PricerConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request, PricingRequest::default());
        assert_eq!(config.request.option_type, "call");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(PricerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_toml_full() {
        let config = PricerConfig::from_toml(
            r#"
            log_level = "debug"

            [request]
            spot = 50.0
            strike = 55.0
            up = 1.3
            mid = 1.0
            down = 0.7
            rate = 0.02
            dt = 0.5
            option_type = "put"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request.spot, 50.0);
        assert_eq!(config.request.strike, 55.0);
        assert_eq!(config.request.option_type, "put");
    }

    #[test]
    fn test_from_toml_missing_request_uses_defaults() {
        let config = PricerConfig::from_toml("log_level = \"warn\"").unwrap();
        assert_eq!(config.request, PricingRequest::default());
    }

    #[test]
    fn test_from_toml_incomplete_request_rejected() {
        let result = PricerConfig::from_toml("[request]\nspot = 100.0\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"error\"").unwrap();

        let config = PricerConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = PricerConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.request, PricingRequest::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PricerConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("TRINOMIAL_OPTION_TYPE", "put");
        let config = PricerConfig::default().with_env_override();
        assert_eq!(config.request.option_type, "put");
        std::env::remove_var("TRINOMIAL_OPTION_TYPE");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = PricerConfig {
            log_level: "loud".to_string(),
            ..PricerConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let config = PricerConfig {
                log_level: level.to_string(),
                ..PricerConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_request_model() {
        let model = PricingRequest::default().model();
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.up(), 1.2);
        assert_eq!(model.down(), 0.8);
    }
}
