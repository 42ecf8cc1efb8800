//! Beacon Analytics - readiness gate and event façades
//!
//! Layer 4 of the Beacon system: the domain services that decide whether
//! analytics is live and forward enriched records to the injected
//! transports.
//!
//! - [`ReadinessGate`]: one-shot asynchronous initialization of the stream
//!   transport; distinguishes ready, pending, and disabled states
//! - [`StreamRecorder`]: fire-and-forget event/trait/reset recording, gated
//!   on readiness and enriched with the locally persisted account identity
//! - [`MetricsRecorder`]: identity-metrics façade with alias/people
//!   operations and the `with_tracking` start/finish/fail decorator
//!
//! Recording never fails the caller: every operation returns a discardable
//! [`RecordOutcome`] and suppressed errors are logged via `tracing`.

#![forbid(unsafe_code)]

/// Analytics configuration (environment, credentials, timeouts)
pub mod config;

/// Identity-metrics façade
pub mod metrics;

/// Discardable recording outcomes
pub mod outcome;

/// One-shot transport readiness gate
pub mod readiness;

/// Event-stream façade
pub mod stream;

pub use config::AnalyticsConfig;
pub use metrics::MetricsRecorder;
pub use outcome::{RecordOutcome, SkipReason};
pub use readiness::{DisabledReason, ReadinessGate, ReadinessState};
pub use stream::StreamRecorder;
