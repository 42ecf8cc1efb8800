//! Metrics transport effect interface (identity-metrics delivery)
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `beacon-effects` (Layer 3)
//! - **Usage**: `MetricsRecorder` (Layer 4)
//!
//! This transport keeps a distinct-id notion of its own: an anonymous id
//! minted at `init`, later linkable to a known account via `alias` and
//! replaceable via `identify`.

use crate::{BeaconError, Properties};
use async_trait::async_trait;

/// Pure trait for identity-metrics analytics transports
#[async_trait]
pub trait MetricsTransportEffects: Send + Sync {
    /// Configure the transport with its project token.
    async fn init(&self, token: &str) -> Result<(), BeaconError>;

    /// Register static super-properties merged into every subsequent event.
    async fn register(&self, properties: Properties) -> Result<(), BeaconError>;

    /// Current anonymous or identified distinct id.
    async fn distinct_id(&self) -> Result<String, BeaconError>;

    /// Switch the distinct id to a known identifier.
    async fn identify(&self, id: &str) -> Result<(), BeaconError>;

    /// Link a newly known identifier to the previously anonymous one.
    async fn alias(&self, id: &str) -> Result<(), BeaconError>;

    /// Deliver a named event.
    async fn track(&self, name: &str, properties: Properties) -> Result<(), BeaconError>;

    /// Unconditional user-profile trait update.
    async fn people_set(&self, properties: Properties) -> Result<(), BeaconError>;

    /// First-write-wins user-profile trait update.
    async fn people_set_once(&self, properties: Properties) -> Result<(), BeaconError>;
}
