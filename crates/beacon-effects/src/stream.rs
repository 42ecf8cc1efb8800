//! Event-stream transport over the data-plane REST API
//!
//! Production implementation of `StreamTransportEffects`. `load` establishes
//! a delivery session (write key + data plane endpoint) and probes the data
//! plane's health endpoint; `track`/`identify` POST JSON records
//! authenticated with the write key. Each session carries an anonymous id so
//! records without a resolved account still correlate; `reset` rotates it.

use async_trait::async_trait;
use beacon_core::effects::StreamTransportEffects;
use beacon_core::{BeaconError, EventRecord, TraitsRecord};
use parking_lot::RwLock;
use serde_json::json;
use uuid::Uuid;

/// HTTP delivery handler for the event-stream transport
pub struct HttpStreamTransport {
    client: reqwest::Client,
    session: RwLock<Option<StreamSession>>,
}

#[derive(Clone)]
struct StreamSession {
    write_key: String,
    data_plane_url: String,
    anonymous_id: String,
}

impl HttpStreamTransport {
    /// Create a handler with a fresh HTTP client and no session.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            session: RwLock::new(None),
        }
    }

    fn session(&self) -> Result<StreamSession, BeaconError> {
        self.session
            .read()
            .clone()
            .ok_or_else(|| BeaconError::transport("Stream transport not loaded"))
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), BeaconError> {
        let session = self.session()?;
        let url = format!("{}/{}", session.data_plane_url.trim_end_matches('/'), path);
        self.client
            .post(url)
            .basic_auth(&session.write_key, Some(""))
            .json(&body)
            .send()
            .await
            .map_err(|e| BeaconError::transport(format!("POST {} failed: {}", path, e)))?
            .error_for_status()
            .map_err(|e| BeaconError::transport(format!("POST {} rejected: {}", path, e)))?;
        Ok(())
    }
}

impl Default for HttpStreamTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamTransportEffects for HttpStreamTransport {
    async fn load(&self, write_key: &str, data_plane_url: &str) -> Result<(), BeaconError> {
        if write_key.is_empty() {
            return Err(BeaconError::invalid("Write key cannot be empty"));
        }
        {
            let mut session = self.session.write();
            *session = Some(StreamSession {
                write_key: write_key.to_string(),
                data_plane_url: data_plane_url.to_string(),
                anonymous_id: Uuid::new_v4().to_string(),
            });
        }

        // The data plane exposes a health endpoint; a successful probe is the
        // readiness signal for this transport.
        let url = format!("{}/health", data_plane_url.trim_end_matches('/'));
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| BeaconError::transport(format!("Data plane unreachable: {}", e)))?
            .error_for_status()
            .map_err(|e| BeaconError::transport(format!("Data plane unhealthy: {}", e)))?;

        tracing::debug!(data_plane_url, "stream transport loaded");
        Ok(())
    }

    async fn await_ready(&self) -> Result<(), BeaconError> {
        // `load` completes only after the health probe, so readiness reduces
        // to having a session at all.
        self.session().map(|_| ())
    }

    async fn track(&self, record: EventRecord) -> Result<(), BeaconError> {
        let session = self.session()?;
        self.post(
            "v1/track",
            json!({
                "event": record.name,
                "properties": record.properties,
                "userId": record.user_id,
                "anonymousId": session.anonymous_id,
            }),
        )
        .await
    }

    async fn identify(&self, record: TraitsRecord) -> Result<(), BeaconError> {
        let session = self.session()?;
        self.post(
            "v1/identify",
            json!({
                "userId": record.account_id,
                "anonymousId": session.anonymous_id,
                "traits": record.traits,
            }),
        )
        .await
    }

    async fn reset(&self) -> Result<(), BeaconError> {
        let mut session = self.session.write();
        match session.as_mut() {
            Some(s) => {
                s.anonymous_id = Uuid::new_v4().to_string();
                Ok(())
            }
            None => Err(BeaconError::transport("Stream transport not loaded")),
        }
    }
}
