//! Capture double for the identity-metrics transport
//!
//! Records init tokens, registered super-properties, events, alias links,
//! and people updates. The distinct id is deterministic and settable so
//! alias/identify flows can be asserted exactly.

use async_trait::async_trait;
use beacon_core::effects::MetricsTransportEffects;
use beacon_core::{BeaconError, Properties};
use std::sync::{Arc, Mutex};

/// Identity-metrics transport double that captures calls in memory
#[derive(Clone)]
pub struct CaptureMetricsTransport {
    state: Arc<Mutex<MetricsState>>,
    fail_tracks: bool,
}

#[derive(Default)]
struct MetricsState {
    init_tokens: Vec<String>,
    registered: Vec<Properties>,
    distinct_id: String,
    identified: Vec<String>,
    aliased: Vec<String>,
    events: Vec<(String, Properties)>,
    people_sets: Vec<Properties>,
    people_set_onces: Vec<Properties>,
}

impl Default for CaptureMetricsTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureMetricsTransport {
    /// A transport with the deterministic anonymous id `"anon-1"`.
    pub fn new() -> Self {
        let state = MetricsState {
            distinct_id: "anon-1".to_string(),
            ..MetricsState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            fail_tracks: false,
        }
    }

    /// Make `track` fail while every other primitive still succeeds.
    pub fn with_failing_track(mut self) -> Self {
        self.fail_tracks = true;
        self
    }

    /// Tokens handed to `init`.
    pub fn init_tokens(&self) -> Vec<String> {
        self.state.lock().unwrap().init_tokens.clone()
    }

    /// Super-property maps handed to `register`.
    pub fn registered(&self) -> Vec<Properties> {
        self.state.lock().unwrap().registered.clone()
    }

    /// Identifiers handed to `identify`.
    pub fn identified(&self) -> Vec<String> {
        self.state.lock().unwrap().identified.clone()
    }

    /// Identifiers handed to `alias`.
    pub fn aliased(&self) -> Vec<String> {
        self.state.lock().unwrap().aliased.clone()
    }

    /// Every tracked event with its properties, in order.
    pub fn events(&self) -> Vec<(String, Properties)> {
        self.state.lock().unwrap().events.clone()
    }

    /// Tracked event names, in order.
    pub fn event_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .events
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Property maps handed to `people_set`.
    pub fn people_sets(&self) -> Vec<Properties> {
        self.state.lock().unwrap().people_sets.clone()
    }

    /// Property maps handed to `people_set_once`.
    pub fn people_set_onces(&self) -> Vec<Properties> {
        self.state.lock().unwrap().people_set_onces.clone()
    }
}

#[async_trait]
impl MetricsTransportEffects for CaptureMetricsTransport {
    async fn init(&self, token: &str) -> Result<(), BeaconError> {
        self.state
            .lock()
            .unwrap()
            .init_tokens
            .push(token.to_string());
        Ok(())
    }

    async fn register(&self, properties: Properties) -> Result<(), BeaconError> {
        self.state.lock().unwrap().registered.push(properties);
        Ok(())
    }

    async fn distinct_id(&self) -> Result<String, BeaconError> {
        Ok(self.state.lock().unwrap().distinct_id.clone())
    }

    async fn identify(&self, id: &str) -> Result<(), BeaconError> {
        let mut state = self.state.lock().unwrap();
        state.identified.push(id.to_string());
        state.distinct_id = id.to_string();
        Ok(())
    }

    async fn alias(&self, id: &str) -> Result<(), BeaconError> {
        self.state.lock().unwrap().aliased.push(id.to_string());
        Ok(())
    }

    async fn track(&self, name: &str, properties: Properties) -> Result<(), BeaconError> {
        if self.fail_tracks {
            return Err(BeaconError::transport("capture transport set to fail"));
        }
        self.state
            .lock()
            .unwrap()
            .events
            .push((name.to_string(), properties));
        Ok(())
    }

    async fn people_set(&self, properties: Properties) -> Result<(), BeaconError> {
        self.state.lock().unwrap().people_sets.push(properties);
        Ok(())
    }

    async fn people_set_once(&self, properties: Properties) -> Result<(), BeaconError> {
        self.state.lock().unwrap().people_set_onces.push(properties);
        Ok(())
    }
}
