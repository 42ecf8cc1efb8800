//! Deployment environment model
//!
//! The environment is fixed at process start and decides both whether
//! analytics is enabled at all and which transport credential the readiness
//! gate selects. The variants mirror the wallet's deployment targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BeaconError;

/// Named deployment target for the wallet front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development builds
    Development,
    /// Public test network deployment
    Testnet,
    /// Production main-network deployment
    Mainnet,
    /// Staging deployment against the main network
    MainnetStaging,
}

impl Environment {
    /// Whether analytics delivery is enabled for this environment.
    ///
    /// Only the main-network deployments report analytics; every other
    /// environment is silently disabled rather than treated as an error.
    pub fn analytics_supported(&self) -> bool {
        matches!(self, Environment::Mainnet | Environment::MainnetStaging)
    }

    /// Canonical string form, matching the external environment descriptor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testnet => "testnet",
            Environment::Mainnet => "mainnet",
            Environment::MainnetStaging => "mainnet_staging",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = BeaconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "testnet" => Ok(Environment::Testnet),
            "mainnet" => Ok(Environment::Mainnet),
            "mainnet_staging" => Ok(Environment::MainnetStaging),
            other => Err(BeaconError::invalid(format!(
                "Unknown environment: {}",
                other
            ))),
        }
    }
}
