//! Layer 8: Test doubles for the Beacon effect traits
//!
//! Capture handlers with deterministic, inspectable behavior: transports
//! that record every call instead of performing network I/O, an in-memory
//! client store, and a static client context. Production code never depends
//! on this crate.
//!
//! # Blocking Lock Usage
//!
//! Uses `std::sync::Mutex` because this is test infrastructure where lock
//! contention is not a concern and the simpler synchronous API keeps test
//! assertions clear.

#![forbid(unsafe_code)]
#![allow(clippy::unwrap_used)]

/// Static client context double
pub mod client;

/// Capture double for the identity-metrics transport
pub mod metrics;

/// In-memory client store double
pub mod store;

/// Capture double for the event-stream transport
pub mod stream;

pub use client::StaticClientContext;
pub use metrics::CaptureMetricsTransport;
pub use store::MemoryClientStore;
pub use stream::CaptureStreamTransport;
