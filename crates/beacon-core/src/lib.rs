//! Beacon Core - Foundation of the Beacon analytics system
//!
//! This crate provides the foundational types and effect interfaces shared by
//! every other Beacon crate. It contains only pure definitions: deployment
//! environments, event/trait record shapes, the unified error type, and the
//! effect traits that production handlers and test doubles implement.
//!
//! # Architecture Layers
//!
//! - **Layer 1 (this crate)**: pure types and effect signatures, no I/O
//! - **Layer 3 (`beacon-effects`)**: production handlers (HTTP transports,
//!   filesystem store, system client context)
//! - **Layer 4 (`beacon-analytics`)**: the readiness gate and event façades
//! - **Layer 8 (`beacon-testkit`)**: capture/mock handlers for tests
//!
//! All recording code is parameterized by the effect traits in
//! [`effects`], so the façades can be exercised against capture doubles
//! without touching global state or the network.

#![forbid(unsafe_code)]

/// Deployment environments and analytics enablement rules
pub mod environment;

/// Event and trait record shapes forwarded to transports
pub mod records;

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

pub use environment::Environment;
pub use errors::BeaconError;
pub use records::{EventRecord, Properties, TraitsRecord};

/// Local storage key holding the wallet's active account identifier.
///
/// The façades re-read this key on every call so enrichment always reflects
/// the most recently persisted account.
pub const KEY_ACTIVE_ACCOUNT_ID: &str = "wallet:active-account-id";
