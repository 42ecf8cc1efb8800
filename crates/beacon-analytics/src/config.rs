//! Analytics configuration
//!
//! Deployment environment, transport credentials, and the load timeout,
//! deserializable from the wallet's TOML configuration. Credentials default
//! to the deployment's registered keys; only the environment has no default.

use beacon_core::{BeaconError, Environment};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default data plane endpoint for the event-stream transport
pub const DEFAULT_DATA_PLANE_URL: &str = "https://wallet.dataplane.rudderstack.com";

/// Registered write key for the production main-network deployment
const PRODUCTION_WRITE_KEY: &str = "2aT9rKfVmQwXcN5hYBdLuGzJpEx";

/// Registered write key for every other supported deployment
const STAGING_WRITE_KEY: &str = "2aT9vHnSeDk4bWgM7PAyqZjUtRc";

/// Registered project token for the identity-metrics transport
const METRICS_TOKEN: &str = "8f3acb61d27e49c2b5a90e417cd36158";

fn default_data_plane_url() -> String {
    DEFAULT_DATA_PLANE_URL.to_string()
}

fn default_production_write_key() -> String {
    PRODUCTION_WRITE_KEY.to_string()
}

fn default_staging_write_key() -> String {
    STAGING_WRITE_KEY.to_string()
}

fn default_metrics_token() -> String {
    METRICS_TOKEN.to_string()
}

fn default_load_timeout_ms() -> u64 {
    10_000
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Deployment target, fixed at process start
    pub environment: Environment,

    /// Data plane endpoint for the event-stream transport
    #[serde(default = "default_data_plane_url")]
    pub data_plane_url: String,

    /// Write key selected when the environment is exactly the production
    /// main-network deployment
    #[serde(default = "default_production_write_key")]
    pub production_write_key: String,

    /// Write key selected for every other supported environment
    #[serde(default = "default_staging_write_key")]
    pub staging_write_key: String,

    /// Project token for the identity-metrics transport
    #[serde(default = "default_metrics_token")]
    pub metrics_token: String,

    /// Upper bound on the stream transport load, in milliseconds
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,
}

impl AnalyticsConfig {
    /// Configuration for a given environment with defaulted credentials.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            data_plane_url: default_data_plane_url(),
            production_write_key: default_production_write_key(),
            staging_write_key: default_staging_write_key(),
            metrics_token: default_metrics_token(),
            load_timeout_ms: default_load_timeout_ms(),
        }
    }

    /// Write key for the configured environment, by exact match: the
    /// production deployment gets the production key, every other supported
    /// environment the staging key.
    pub fn write_key(&self) -> &str {
        if self.environment == Environment::Mainnet {
            &self.production_write_key
        } else {
            &self.staging_write_key
        }
    }

    /// Load timeout as a [`Duration`].
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, BeaconError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| BeaconError::invalid(format!("Invalid analytics config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, BeaconError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BeaconError::invalid(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration.
    ///
    /// Credentials and endpoint only matter when the environment is
    /// supported; unsupported environments never contact a transport.
    pub fn validate(&self) -> Result<(), BeaconError> {
        if self.load_timeout_ms == 0 {
            return Err(BeaconError::invalid("load_timeout_ms must be non-zero"));
        }
        if self.environment.analytics_supported() {
            if self.data_plane_url.is_empty() {
                return Err(BeaconError::invalid("data_plane_url cannot be empty"));
            }
            if self.write_key().is_empty() {
                return Err(BeaconError::invalid("write key cannot be empty"));
            }
            if self.metrics_token.is_empty() {
                return Err(BeaconError::invalid("metrics_token cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_key_is_exact_environment_match() {
        let production = AnalyticsConfig::for_environment(Environment::Mainnet);
        assert_eq!(production.write_key(), production.production_write_key);

        let staging = AnalyticsConfig::for_environment(Environment::MainnetStaging);
        assert_eq!(staging.write_key(), staging.staging_write_key);
    }

    #[test]
    fn parses_minimal_toml_with_defaults() {
        let config = AnalyticsConfig::from_toml_str("environment = \"mainnet\"").unwrap();
        assert_eq!(config.environment, Environment::Mainnet);
        assert_eq!(config.data_plane_url, DEFAULT_DATA_PLANE_URL);
        assert_eq!(config.load_timeout_ms, 10_000);
    }

    #[test]
    fn rejects_zero_timeout() {
        let result =
            AnalyticsConfig::from_toml_str("environment = \"mainnet\"\nload_timeout_ms = 0");
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_environment_skips_credential_checks() {
        let mut config = AnalyticsConfig::for_environment(Environment::Development);
        config.data_plane_url.clear();
        config.metrics_token.clear();
        assert!(config.validate().is_ok());
    }
}
