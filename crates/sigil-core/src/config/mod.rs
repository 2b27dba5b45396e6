//! Core configuration parsing and management.
//!
//! The two deployment variants described by the credential core are a
//! configuration axis of one system, not two systems: who may issue claims
//! (`claim_mode`) and whether holders may destroy their own credential
//! (`self_burn_enabled`). Configuration is TOML with serde defaults; the
//! defaults select the stricter administrator-issued deployment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during configuration handling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Who may issue a claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimMode {
    /// Only the authority may claim, on behalf of an identity.
    #[default]
    AdministratorIssued,
    /// Each identity claims its own credential.
    SelfService,
}

/// Configuration for the credential core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Claim issuance mode.
    #[serde(default)]
    pub claim_mode: ClaimMode,

    /// Whether holders may burn their own credential.
    #[serde(default)]
    pub self_burn_enabled: bool,
}

impl CoreConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let config = CoreConfig::default();
        assert_eq!(config.claim_mode, ClaimMode::AdministratorIssued);
        assert!(!config.self_burn_enabled);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = CoreConfig::from_toml("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_parse_self_service_deployment() {
        let config = CoreConfig::from_toml(
            r#"
            claim_mode = "self_service"
            self_burn_enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.claim_mode, ClaimMode::SelfService);
        assert!(config.self_burn_enabled);
    }

    #[test]
    fn test_unknown_claim_mode_errors() {
        let result = CoreConfig::from_toml(r#"claim_mode = "open_season""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CoreConfig {
            claim_mode: ClaimMode::SelfService,
            self_burn_enabled: true,
        };
        let rendered = config.to_toml().unwrap();
        assert_eq!(CoreConfig::from_toml(&rendered).unwrap(), config);
    }
}
