//! Capture double for the event-stream transport
//!
//! Records every call for later assertion. Configurable to delay the load
//! (to exercise concurrent initialization) or to fail loading or delivery.

use async_trait::async_trait;
use beacon_core::effects::StreamTransportEffects;
use beacon_core::{BeaconError, EventRecord, TraitsRecord};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Event-stream transport double that captures calls in memory
#[derive(Clone, Default)]
pub struct CaptureStreamTransport {
    state: Arc<Mutex<StreamState>>,
    load_delay: Option<Duration>,
    fail_load: bool,
    fail_delivery: bool,
}

#[derive(Default)]
struct StreamState {
    loads: Vec<(String, String)>,
    tracked: Vec<EventRecord>,
    identified: Vec<TraitsRecord>,
    resets: usize,
}

impl CaptureStreamTransport {
    /// A transport that loads immediately and accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the load open for the given duration before succeeding.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = Some(delay);
        self
    }

    /// Make `load` fail.
    pub fn with_failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make `track`/`identify`/`reset` fail while loading still succeeds.
    pub fn with_failing_delivery(mut self) -> Self {
        self.fail_delivery = true;
        self
    }

    /// Number of times `load` was invoked.
    pub fn load_calls(&self) -> usize {
        self.state.lock().unwrap().loads.len()
    }

    /// Write key and endpoint of each load call.
    pub fn loads(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().loads.clone()
    }

    /// Every event handed to `track`.
    pub fn tracked(&self) -> Vec<EventRecord> {
        self.state.lock().unwrap().tracked.clone()
    }

    /// Every record handed to `identify`.
    pub fn identified(&self) -> Vec<TraitsRecord> {
        self.state.lock().unwrap().identified.clone()
    }

    /// Number of `reset` calls.
    pub fn resets(&self) -> usize {
        self.state.lock().unwrap().resets
    }

    /// Total observable transport activity, load included.
    pub fn total_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.loads.len() + state.tracked.len() + state.identified.len() + state.resets
    }

    fn deliver(&self) -> Result<(), BeaconError> {
        if self.fail_delivery {
            Err(BeaconError::transport("capture transport set to fail"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StreamTransportEffects for CaptureStreamTransport {
    async fn load(&self, write_key: &str, data_plane_url: &str) -> Result<(), BeaconError> {
        self.state
            .lock()
            .unwrap()
            .loads
            .push((write_key.to_string(), data_plane_url.to_string()));
        if let Some(delay) = self.load_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_load {
            return Err(BeaconError::transport("capture transport load failure"));
        }
        Ok(())
    }

    async fn await_ready(&self) -> Result<(), BeaconError> {
        if self.state.lock().unwrap().loads.is_empty() {
            return Err(BeaconError::transport("not loaded"));
        }
        Ok(())
    }

    async fn track(&self, record: EventRecord) -> Result<(), BeaconError> {
        self.deliver()?;
        self.state.lock().unwrap().tracked.push(record);
        Ok(())
    }

    async fn identify(&self, record: TraitsRecord) -> Result<(), BeaconError> {
        self.deliver()?;
        self.state.lock().unwrap().identified.push(record);
        Ok(())
    }

    async fn reset(&self) -> Result<(), BeaconError> {
        self.deliver()?;
        self.state.lock().unwrap().resets += 1;
        Ok(())
    }
}
