//! Client store effect interface for local persistent key lookup
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `beacon-effects` (Layer 3)
//! - **Usage**: `StreamRecorder` identity enrichment
//!
//! The façades only ever read; absence of a key is a valid state, not an
//! error. A failing store degrades enrichment, never the recording call.

use crate::BeaconError;
use async_trait::async_trait;

/// Pure trait for read-only local client storage
#[async_trait]
pub trait ClientStoreEffects: Send + Sync {
    /// Look up a stored string value by key; `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, BeaconError>;
}
