//! Layer 1: Core Effect Trait Definitions
//!
//! Pure trait definitions for every side-effect the analytics system
//! performs. This module defines **what** effects can be performed; handlers
//! define **how**.
//!
//! # Effect Classification
//!
//! ## Infrastructure Effects (Layer 3: `beacon-effects`)
//! - **StreamTransport**: event-stream analytics delivery (load/ready/track/
//!   identify/reset)
//! - **MetricsTransport**: identity-metrics delivery (init/register/track/
//!   alias/people)
//! - **ClientStore**: read-only local key lookup (active account id)
//! - **ClientContext**: browser/client facts (user agent, referrer)
//!
//! ## Testing Effects (Layer 8: `beacon-testkit`)
//! Capture doubles implementing the same traits with in-memory state.
//!
//! All façade code is parameterized by these traits, enabling deterministic
//! testing and handler substitution without global state.

pub mod client;
pub mod metrics;
pub mod store;
pub mod stream;

pub use client::ClientContextEffects;
pub use metrics::MetricsTransportEffects;
pub use store::ClientStoreEffects;
pub use stream::StreamTransportEffects;
