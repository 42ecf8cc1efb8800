//! Discardable recording outcomes
//!
//! Façade operations never propagate errors: the instrumentation layer must
//! not be able to break the product. Each operation instead reports what
//! happened through a [`RecordOutcome`] the caller is free to drop. Tests
//! assert on it; production call sites usually ignore it.

use beacon_core::BeaconError;

/// Why a recording call was skipped without touching the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The readiness gate has not finished initializing
    NotReady,
    /// Analytics is disabled for this environment or failed to load
    Disabled,
}

/// Result of a fire-and-forget recording operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record was handed to the transport
    Recorded,
    /// The call was a deliberate no-op
    Skipped(SkipReason),
    /// The transport or enrichment failed; the error was logged and swallowed
    Suppressed(BeaconError),
}

impl RecordOutcome {
    /// Whether the record reached the transport.
    pub fn is_recorded(&self) -> bool {
        matches!(self, RecordOutcome::Recorded)
    }

    /// Whether the call was skipped as a deliberate no-op.
    pub fn is_skipped(&self) -> bool {
        matches!(self, RecordOutcome::Skipped(_))
    }
}
