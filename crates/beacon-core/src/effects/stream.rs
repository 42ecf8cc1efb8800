//! Stream transport effect interface (event-stream analytics delivery)
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `beacon-effects` (Layer 3)
//! - **Usage**: `ReadinessGate` (load/ready) and `StreamRecorder` (delivery)
//!
//! The readiness gate drives `load`/`await_ready` at most once per process;
//! the recorder forwards enriched records only after the gate reports ready.

use crate::{BeaconError, EventRecord, TraitsRecord};
use async_trait::async_trait;

/// Pure trait for event-stream analytics transports
#[async_trait]
pub trait StreamTransportEffects: Send + Sync {
    /// Begin asynchronous initialization against the data plane.
    ///
    /// Called at most once per process lifetime with the credential selected
    /// for the current environment.
    async fn load(&self, write_key: &str, data_plane_url: &str) -> Result<(), BeaconError>;

    /// Resolve once the transport has finished initializing and is willing
    /// to accept records.
    async fn await_ready(&self) -> Result<(), BeaconError>;

    /// Deliver a tracked event.
    async fn track(&self, record: EventRecord) -> Result<(), BeaconError>;

    /// Deliver a user-trait update.
    async fn identify(&self, record: TraitsRecord) -> Result<(), BeaconError>;

    /// Drop the current identity (logout).
    async fn reset(&self) -> Result<(), BeaconError>;
}
