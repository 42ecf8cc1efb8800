//! One-shot readiness gate for the stream transport
//!
//! The gate owns the process-wide readiness decision: it loads the stream
//! transport at most once, shares the in-flight initialization between
//! concurrent callers, and never reverts a decision. Unsupported
//! environments resolve immediately without touching the transport, and a
//! failed or timed-out load disables analytics rather than leaving callers
//! hanging on a completion that will never arrive.

use beacon_core::effects::StreamTransportEffects;
use beacon_core::Environment;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::AnalyticsConfig;

/// Why the gate settled on [`ReadinessState::Disabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// Analytics is not supported for the configured environment
    UnsupportedEnvironment,
    /// The transport load failed
    LoadFailed,
    /// The transport did not become ready within the configured timeout
    TimedOut,
}

/// Observable state of the gate.
///
/// `Disabled` is deliberately distinct from `Ready`: a gate that resolved
/// because analytics is off must not be treated as a license to forward
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    /// Initialization has not been attempted or has not finished
    Pending,
    /// The transport is loaded and records may be forwarded
    Ready,
    /// Analytics is permanently off for this process
    Disabled(DisabledReason),
}

#[derive(Debug, Clone, Copy)]
enum Decision {
    Enabled,
    Disabled(DisabledReason),
}

/// One-shot initialization service for the stream transport
pub struct ReadinessGate {
    config: AnalyticsConfig,
    transport: Arc<dyn StreamTransportEffects>,
    decision: OnceCell<Decision>,
}

impl ReadinessGate {
    /// Create a gate for the given configuration and injected transport.
    pub fn new(config: AnalyticsConfig, transport: Arc<dyn StreamTransportEffects>) -> Self {
        Self {
            config,
            transport,
            decision: OnceCell::new(),
        }
    }

    /// Environment the gate was configured for.
    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    /// Initialize the transport, at most once per process lifetime.
    ///
    /// Idempotent: the first caller drives the load, concurrent and later
    /// callers share the same completion. Always resolves; a load failure
    /// or timeout settles the gate as [`ReadinessState::Disabled`].
    pub async fn initialize(&self) -> ReadinessState {
        let decision = self.decision.get_or_init(|| self.decide()).await;
        match decision {
            Decision::Enabled => ReadinessState::Ready,
            Decision::Disabled(reason) => ReadinessState::Disabled(*reason),
        }
    }

    /// Non-blocking readiness query.
    pub fn state(&self) -> ReadinessState {
        match self.decision.get() {
            None => ReadinessState::Pending,
            Some(Decision::Enabled) => ReadinessState::Ready,
            Some(Decision::Disabled(reason)) => ReadinessState::Disabled(*reason),
        }
    }

    /// Whether records may currently be forwarded.
    pub fn is_ready(&self) -> bool {
        matches!(self.state(), ReadinessState::Ready)
    }

    async fn decide(&self) -> Decision {
        if !self.config.environment.analytics_supported() {
            tracing::debug!(
                environment = %self.config.environment,
                "analytics disabled for environment"
            );
            return Decision::Disabled(DisabledReason::UnsupportedEnvironment);
        }

        let load = async {
            self.transport
                .load(self.config.write_key(), &self.config.data_plane_url)
                .await?;
            self.transport.await_ready().await
        };

        match tokio::time::timeout(self.config.load_timeout(), load).await {
            Ok(Ok(())) => {
                tracing::debug!(environment = %self.config.environment, "analytics ready");
                Decision::Enabled
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "analytics transport load failed; disabling");
                Decision::Disabled(DisabledReason::LoadFailed)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.load_timeout_ms,
                    "analytics transport load timed out; disabling"
                );
                Decision::Disabled(DisabledReason::TimedOut)
            }
        }
    }
}
