//! Readiness gate behavior: idempotent one-shot initialization, environment
//! gating, and failure hardening.

use beacon_analytics::{
    AnalyticsConfig, DisabledReason, ReadinessGate, ReadinessState, RecordOutcome, SkipReason,
    StreamRecorder,
};
use beacon_core::{Environment, Properties};
use beacon_testkit::{CaptureStreamTransport, MemoryClientStore, StaticClientContext};
use std::sync::Arc;
use std::time::Duration;

fn recorder_over(gate: Arc<ReadinessGate>, transport: Arc<CaptureStreamTransport>) -> StreamRecorder {
    StreamRecorder::new(
        gate,
        transport,
        Arc::new(MemoryClientStore::new()),
        Arc::new(StaticClientContext::new("test-agent/1.0")),
    )
}

#[tokio::test]
async fn recording_is_a_no_op_before_initialization() {
    let transport = Arc::new(CaptureStreamTransport::new());
    let gate = Arc::new(ReadinessGate::new(
        AnalyticsConfig::for_environment(Environment::Mainnet),
        transport.clone(),
    ));
    let recorder = recorder_over(gate.clone(), transport.clone());

    assert_eq!(gate.state(), ReadinessState::Pending);
    assert_eq!(
        recorder.record_event("signup", Properties::new()).await,
        RecordOutcome::Skipped(SkipReason::NotReady)
    );
    assert_eq!(
        recorder.record_state(Properties::new(), None).await,
        RecordOutcome::Skipped(SkipReason::NotReady)
    );
    assert_eq!(
        recorder.reset_identity().await,
        RecordOutcome::Skipped(SkipReason::NotReady)
    );
    assert_eq!(transport.total_calls(), 0);
}

#[tokio::test]
async fn concurrent_initialization_loads_at_most_once() {
    let transport = Arc::new(
        CaptureStreamTransport::new().with_load_delay(Duration::from_millis(50)),
    );
    let gate = Arc::new(ReadinessGate::new(
        AnalyticsConfig::for_environment(Environment::Mainnet),
        transport.clone(),
    ));

    let (first, second) = tokio::join!(gate.initialize(), gate.initialize());
    assert_eq!(first, ReadinessState::Ready);
    assert_eq!(second, ReadinessState::Ready);
    assert_eq!(transport.load_calls(), 1);

    // Later calls short-circuit without another load.
    assert_eq!(gate.initialize().await, ReadinessState::Ready);
    assert_eq!(transport.load_calls(), 1);
}

#[tokio::test]
async fn unsupported_environment_resolves_without_loading() {
    let transport = Arc::new(CaptureStreamTransport::new());
    let gate = Arc::new(ReadinessGate::new(
        AnalyticsConfig::for_environment(Environment::Testnet),
        transport.clone(),
    ));
    let recorder = recorder_over(gate.clone(), transport.clone());

    assert_eq!(
        gate.initialize().await,
        ReadinessState::Disabled(DisabledReason::UnsupportedEnvironment)
    );
    assert_eq!(transport.load_calls(), 0);

    // Recording stays a no-op even though initialize() resolved.
    assert_eq!(
        recorder.record_event("signup", Properties::new()).await,
        RecordOutcome::Skipped(SkipReason::Disabled)
    );
    assert_eq!(transport.total_calls(), 0);
}

#[tokio::test]
async fn write_key_selection_is_exact_environment_match() {
    let production_transport = Arc::new(CaptureStreamTransport::new());
    let production_config = AnalyticsConfig::for_environment(Environment::Mainnet);
    let expected_production_key = production_config.write_key().to_string();
    let gate = ReadinessGate::new(production_config, production_transport.clone());
    gate.initialize().await;
    assert_eq!(production_transport.loads()[0].0, expected_production_key);

    let staging_transport = Arc::new(CaptureStreamTransport::new());
    let staging_config = AnalyticsConfig::for_environment(Environment::MainnetStaging);
    let expected_staging_key = staging_config.write_key().to_string();
    let gate = ReadinessGate::new(staging_config, staging_transport.clone());
    gate.initialize().await;
    assert_eq!(staging_transport.loads()[0].0, expected_staging_key);

    assert_ne!(expected_production_key, expected_staging_key);
}

#[tokio::test]
async fn failed_load_disables_analytics() {
    let transport = Arc::new(CaptureStreamTransport::new().with_failing_load());
    let gate = Arc::new(ReadinessGate::new(
        AnalyticsConfig::for_environment(Environment::Mainnet),
        transport.clone(),
    ));
    let recorder = recorder_over(gate.clone(), transport.clone());

    assert_eq!(
        gate.initialize().await,
        ReadinessState::Disabled(DisabledReason::LoadFailed)
    );
    assert_eq!(
        recorder.record_event("signup", Properties::new()).await,
        RecordOutcome::Skipped(SkipReason::Disabled)
    );
}

#[tokio::test]
async fn slow_load_times_out_and_disables_analytics() {
    let transport = Arc::new(
        CaptureStreamTransport::new().with_load_delay(Duration::from_millis(200)),
    );
    let mut config = AnalyticsConfig::for_environment(Environment::Mainnet);
    config.load_timeout_ms = 20;
    let gate = ReadinessGate::new(config, transport.clone());

    assert_eq!(
        gate.initialize().await,
        ReadinessState::Disabled(DisabledReason::TimedOut)
    );
    // The decision never reverts, even though the transport would have
    // finished eventually.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(
        gate.state(),
        ReadinessState::Disabled(DisabledReason::TimedOut)
    );
}
