//! Metrics façade behavior: initialization super-properties, identity
//! operations, and the with_tracking lifecycle decorator.

use beacon_analytics::{MetricsRecorder, RecordOutcome};
use beacon_core::Properties;
use beacon_testkit::{CaptureMetricsTransport, StaticClientContext};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn recorder(transport: Arc<CaptureMetricsTransport>) -> MetricsRecorder {
    MetricsRecorder::new(
        transport,
        Arc::new(StaticClientContext::new("test-agent/1.0").with_referrer("https://launch.example")),
    )
}

#[tokio::test]
async fn initialize_registers_timestamp_and_referrer() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = recorder(transport.clone());

    recorder.initialize("project-token").await;

    assert_eq!(transport.init_tokens(), vec!["project-token".to_string()]);
    let registered = transport.registered();
    assert_eq!(registered.len(), 1);
    assert!(registered[0].contains_key("timestamp"));
    assert_eq!(
        registered[0].get("$referrer"),
        Some(&json!("https://launch.example"))
    );
}

#[tokio::test]
async fn initialize_defaults_referrer_to_empty() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = MetricsRecorder::new(transport.clone(), Arc::new(StaticClientContext::empty()));

    recorder.initialize("project-token").await;
    assert_eq!(transport.registered()[0].get("$referrer"), Some(&json!("")));
}

#[tokio::test]
async fn distinct_id_is_a_passthrough_query() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = recorder(transport.clone());

    assert_eq!(recorder.distinct_id().await.as_deref(), Some("anon-1"));
    recorder.identify("alice").await;
    assert_eq!(recorder.distinct_id().await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn alias_and_trait_updates_reach_the_transport() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = recorder(transport.clone());

    assert!(recorder.alias("alice").await.is_recorded());
    assert_eq!(transport.aliased(), vec!["alice".to_string()]);

    let mut traits = Properties::new();
    traits.insert("plan".to_string(), json!("pro"));
    assert!(recorder.set_traits(traits.clone()).await.is_recorded());
    assert!(recorder.set_traits_once(traits).await.is_recorded());

    assert_eq!(transport.people_sets().len(), 1);
    assert_eq!(transport.people_set_onces().len(), 1);
    assert_eq!(transport.people_sets()[0].get("plan"), Some(&json!("pro")));
}

#[tokio::test]
async fn failing_track_is_suppressed() {
    let transport = Arc::new(CaptureMetricsTransport::new().with_failing_track());
    let recorder = recorder(transport.clone());

    let outcome = recorder.track("doomed", Properties::new()).await;
    assert!(matches!(outcome, RecordOutcome::Suppressed(_)));
}

#[tokio::test]
async fn with_tracking_brackets_a_successful_action() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = recorder(transport.clone());

    let finally_calls = Arc::new(AtomicUsize::new(0));
    let error_calls = Arc::new(AtomicUsize::new(0));

    let value = recorder
        .with_tracking(
            "deploy",
            async { Ok::<u32, String>(7) },
            {
                let error_calls = error_calls.clone();
                move |_e: &String| {
                    error_calls.fetch_add(1, Ordering::SeqCst);
                }
            },
            {
                let finally_calls = finally_calls.clone();
                move || {
                    finally_calls.fetch_add(1, Ordering::SeqCst);
                }
            },
        )
        .await;

    assert_eq!(value, Some(7));
    assert_eq!(
        transport.event_names(),
        vec!["deploy start".to_string(), "deploy finish".to_string()]
    );
    assert_eq!(finally_calls.load(Ordering::SeqCst), 1);
    assert_eq!(error_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn with_tracking_reports_failure_and_finalizes_once() {
    let transport = Arc::new(CaptureMetricsTransport::new());
    let recorder = recorder(transport.clone());

    let finally_calls = Arc::new(AtomicUsize::new(0));
    let seen_error = Arc::new(Mutex::new(None::<String>));

    let value = recorder
        .with_tracking(
            "deploy",
            async { Err::<u32, String>("boom".to_string()) },
            {
                let seen_error = seen_error.clone();
                move |e: &String| {
                    *seen_error.lock().unwrap() = Some(e.clone());
                }
            },
            {
                let finally_calls = finally_calls.clone();
                move || {
                    finally_calls.fetch_add(1, Ordering::SeqCst);
                }
            },
        )
        .await;

    assert_eq!(value, None);
    assert_eq!(
        transport.event_names(),
        vec!["deploy start".to_string(), "deploy fail".to_string()]
    );

    let events = transport.events();
    assert_eq!(events[1].1.get("error"), Some(&json!("boom")));
    assert_eq!(seen_error.lock().unwrap().as_deref(), Some("boom"));
    assert_eq!(finally_calls.load(Ordering::SeqCst), 1);
}
