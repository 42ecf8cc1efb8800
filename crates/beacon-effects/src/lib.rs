//! Layer 3: Production Effect Handlers
//!
//! Stateless-as-possible implementations of the effect traits from
//! beacon-core (Layer 1). These handlers provide production analytics
//! delivery over HTTP, filesystem-backed client storage, and system client
//! context.
//!
//! **Layer Constraint**: NO mock handlers - those belong in beacon-testkit
//! (Layer 8). This crate contains only production-grade handlers.

#![forbid(unsafe_code)]

/// System client context handler (user agent, referrer)
pub mod client;

/// Identity-metrics HTTP transport handler
pub mod metrics;

/// Filesystem-backed client store handler
pub mod store;

/// Event-stream HTTP transport handler
pub mod stream;

pub use client::SystemClientContext;
pub use metrics::HttpMetricsTransport;
pub use store::FilesystemClientStore;
pub use stream::HttpStreamTransport;
