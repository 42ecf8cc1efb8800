//! Identity-metrics façade
//!
//! Thin recording façade over the identity-metrics transport, plus the
//! `with_tracking` decorator that brackets an arbitrary asynchronous action
//! with start/finish/fail telemetry. Like the stream façade, nothing here
//! ever propagates an error to the caller.

use beacon_core::effects::{ClientContextEffects, MetricsTransportEffects};
use beacon_core::Properties;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::outcome::RecordOutcome;

/// Recording façade over the identity-metrics transport
pub struct MetricsRecorder {
    transport: Arc<dyn MetricsTransportEffects>,
    context: Arc<dyn ClientContextEffects>,
}

impl MetricsRecorder {
    /// Create a recorder over the given injected handlers.
    pub fn new(
        transport: Arc<dyn MetricsTransportEffects>,
        context: Arc<dyn ClientContextEffects>,
    ) -> Self {
        Self { transport, context }
    }

    /// Initialize the transport and register the static super-properties
    /// (timestamp and launch referrer).
    ///
    /// Failures are logged and swallowed; the recorder stays usable either
    /// way.
    pub async fn initialize(&self, token: &str) {
        if let Err(e) = self.transport.init(token).await {
            tracing::warn!(error = %e, "metrics transport init failed");
            return;
        }

        let mut properties = Properties::new();
        properties.insert(
            "timestamp".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );
        properties.insert(
            "$referrer".to_string(),
            Value::String(self.context.referrer().await.unwrap_or_default()),
        );
        if let Err(e) = self.transport.register(properties).await {
            tracing::warn!(error = %e, "metrics super-property registration failed");
        }
    }

    /// Current anonymous or identified distinct id, `None` when the
    /// transport cannot answer.
    pub async fn distinct_id(&self) -> Option<String> {
        match self.transport.distinct_id().await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "distinct id query failed");
                None
            }
        }
    }

    /// Switch the distinct id to a known identifier.
    pub async fn identify(&self, id: &str) -> RecordOutcome {
        self.outcome("identify", self.transport.identify(id).await)
    }

    /// Link a newly known identifier to the previously anonymous one.
    pub async fn alias(&self, id: &str) -> RecordOutcome {
        self.outcome("alias", self.transport.alias(id).await)
    }

    /// Record a named event.
    pub async fn track(&self, name: &str, properties: Properties) -> RecordOutcome {
        self.outcome("track", self.transport.track(name, properties).await)
    }

    /// Unconditional user-profile trait update.
    pub async fn set_traits(&self, properties: Properties) -> RecordOutcome {
        self.outcome("people set", self.transport.people_set(properties).await)
    }

    /// First-write-wins user-profile trait update.
    pub async fn set_traits_once(&self, properties: Properties) -> RecordOutcome {
        self.outcome(
            "people set_once",
            self.transport.people_set_once(properties).await,
        )
    }

    /// Bracket an asynchronous action with lifecycle telemetry.
    ///
    /// Emits `"<name> start"`, then runs the action. Success emits
    /// `"<name> finish"` and returns the value; failure emits
    /// `"<name> fail"` carrying the error's display form, invokes
    /// `on_error`, and returns `None`. `on_finally` runs exactly once on
    /// both paths. The error is reported, not re-thrown.
    pub async fn with_tracking<T, E, Fut, FErr, FFin>(
        &self,
        name: &str,
        action: Fut,
        on_error: FErr,
        on_finally: FFin,
    ) -> Option<T>
    where
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
        FErr: FnOnce(&E),
        FFin: FnOnce(),
    {
        self.track(&format!("{} start", name), Properties::new())
            .await;

        let value = match action.await {
            Ok(value) => {
                self.track(&format!("{} finish", name), Properties::new())
                    .await;
                Some(value)
            }
            Err(error) => {
                let mut properties = Properties::new();
                properties.insert("error".to_string(), Value::String(error.to_string()));
                self.track(&format!("{} fail", name), properties).await;
                on_error(&error);
                None
            }
        };

        on_finally();
        value
    }

    fn outcome(
        &self,
        operation: &str,
        result: Result<(), beacon_core::BeaconError>,
    ) -> RecordOutcome {
        match result {
            Ok(()) => RecordOutcome::Recorded,
            Err(e) => {
                tracing::warn!(error = %e, operation, "metrics call suppressed");
                RecordOutcome::Suppressed(e)
            }
        }
    }
}
