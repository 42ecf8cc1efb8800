//! Event-stream façade
//!
//! Fire-and-forget recording over the stream transport, gated on readiness
//! and enriched per call with the locally persisted account identity. A UI
//! action must never fail or stall because analytics failed: every error is
//! logged and folded into the returned [`RecordOutcome`].

use beacon_core::effects::{ClientContextEffects, ClientStoreEffects, StreamTransportEffects};
use beacon_core::{BeaconError, EventRecord, Properties, TraitsRecord, KEY_ACTIVE_ACCOUNT_ID};
use std::sync::Arc;

use crate::outcome::{RecordOutcome, SkipReason};
use crate::readiness::{ReadinessGate, ReadinessState};

/// Recording façade over the event-stream transport
pub struct StreamRecorder {
    gate: Arc<ReadinessGate>,
    transport: Arc<dyn StreamTransportEffects>,
    store: Arc<dyn ClientStoreEffects>,
    context: Arc<dyn ClientContextEffects>,
}

impl StreamRecorder {
    /// Create a recorder over the given gate and injected handlers.
    ///
    /// The transport should be the same instance the gate initializes.
    pub fn new(
        gate: Arc<ReadinessGate>,
        transport: Arc<dyn StreamTransportEffects>,
        store: Arc<dyn ClientStoreEffects>,
        context: Arc<dyn ClientContextEffects>,
    ) -> Self {
        Self {
            gate,
            transport,
            store,
            context,
        }
    }

    /// Record a named event with free-form properties.
    ///
    /// Reads the active account id from the client store and merges it into
    /// the properties as `userId`. No-op until the gate is ready.
    pub async fn record_event(&self, name: &str, properties: Properties) -> RecordOutcome {
        if let Some(skipped) = self.guard() {
            return skipped;
        }
        if name.is_empty() {
            let error = BeaconError::invalid("Event name cannot be empty");
            tracing::warn!(error = %error, "analytics event suppressed");
            return RecordOutcome::Suppressed(error);
        }

        let user_id = self.active_account_id().await;
        let record = EventRecord::new(name, properties, user_id);
        match self.transport.track(record).await {
            Ok(()) => RecordOutcome::Recorded,
            Err(e) => {
                tracing::warn!(error = %e, event = name, "analytics event suppressed");
                RecordOutcome::Suppressed(e)
            }
        }
    }

    /// Record user traits against the best-available identity.
    ///
    /// Identity resolution order: locally persisted account id, then the
    /// caller-supplied fallback, then none. The trait map is stamped with
    /// the client user agent (`"Unknown"` when the context has none).
    pub async fn record_state(
        &self,
        traits: Properties,
        fallback_id: Option<&str>,
    ) -> RecordOutcome {
        if let Some(skipped) = self.guard() {
            return skipped;
        }

        let account_id = self
            .active_account_id()
            .await
            .or_else(|| fallback_id.map(str::to_string));
        let user_agent = self.context.user_agent().await;
        let record = TraitsRecord::new(account_id, traits, user_agent);
        match self.transport.identify(record).await {
            Ok(()) => RecordOutcome::Recorded,
            Err(e) => {
                tracing::warn!(error = %e, "analytics identify suppressed");
                RecordOutcome::Suppressed(e)
            }
        }
    }

    /// Drop the transport-side identity (logout).
    pub async fn reset_identity(&self) -> RecordOutcome {
        if let Some(skipped) = self.guard() {
            return skipped;
        }
        match self.transport.reset().await {
            Ok(()) => RecordOutcome::Recorded,
            Err(e) => {
                tracing::warn!(error = %e, "analytics reset suppressed");
                RecordOutcome::Suppressed(e)
            }
        }
    }

    fn guard(&self) -> Option<RecordOutcome> {
        match self.gate.state() {
            ReadinessState::Ready => None,
            ReadinessState::Pending => Some(RecordOutcome::Skipped(SkipReason::NotReady)),
            ReadinessState::Disabled(_) => Some(RecordOutcome::Skipped(SkipReason::Disabled)),
        }
    }

    /// Latest locally persisted account id; a failing store degrades to no
    /// identity rather than failing the call.
    async fn active_account_id(&self) -> Option<String> {
        match self.store.get(KEY_ACTIVE_ACCOUNT_ID).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "client store read failed; recording without identity");
                None
            }
        }
    }
}
