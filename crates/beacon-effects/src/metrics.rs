//! Identity-metrics transport over the ingestion HTTP API
//!
//! Production implementation of `MetricsTransportEffects`. The ingestion API
//! takes base64-encoded JSON payloads: events on `/track`, profile updates on
//! `/engage`. Super-properties registered once are merged into every event,
//! and the distinct id starts anonymous until `identify`/`alias` bind it to a
//! known account.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use beacon_core::effects::MetricsTransportEffects;
use beacon_core::{BeaconError, Properties};
use parking_lot::RwLock;
use serde_json::{json, Value};
use uuid::Uuid;

/// Default ingestion endpoint for the metrics API
pub const DEFAULT_METRICS_API_URL: &str = "https://api.mixpanel.com";

/// HTTP delivery handler for the identity-metrics transport
pub struct HttpMetricsTransport {
    client: reqwest::Client,
    api_url: String,
    state: RwLock<MetricsState>,
}

#[derive(Default)]
struct MetricsState {
    token: Option<String>,
    distinct_id: Option<String>,
    super_properties: Properties,
}

impl HttpMetricsTransport {
    /// Create a handler against the default ingestion endpoint.
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_METRICS_API_URL)
    }

    /// Create a handler against a specific ingestion endpoint.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            state: RwLock::new(MetricsState::default()),
        }
    }

    fn snapshot(&self) -> Result<(String, String, Properties), BeaconError> {
        let state = self.state.read();
        let token = state
            .token
            .clone()
            .ok_or_else(|| BeaconError::transport("Metrics transport not initialized"))?;
        let distinct_id = state
            .distinct_id
            .clone()
            .ok_or_else(|| BeaconError::transport("Metrics transport has no distinct id"))?;
        Ok((token, distinct_id, state.super_properties.clone()))
    }

    async fn post_encoded(&self, path: &str, payload: Value) -> Result<(), BeaconError> {
        let encoded = BASE64.encode(serde_json::to_vec(&payload)?);
        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), path);
        self.client
            .post(url)
            .form(&[("data", encoded)])
            .send()
            .await
            .map_err(|e| BeaconError::transport(format!("POST {} failed: {}", path, e)))?
            .error_for_status()
            .map_err(|e| BeaconError::transport(format!("POST {} rejected: {}", path, e)))?;
        Ok(())
    }

    async fn post_event(&self, name: &str, properties: Properties) -> Result<(), BeaconError> {
        let (token, distinct_id, super_properties) = self.snapshot()?;
        let mut merged = super_properties;
        for (key, value) in properties {
            merged.insert(key, value);
        }
        merged.insert("token".to_string(), Value::String(token));
        merged.insert("distinct_id".to_string(), Value::String(distinct_id));
        self.post_encoded("track", json!({ "event": name, "properties": merged }))
            .await
    }

    async fn post_engage(&self, op: &str, properties: Properties) -> Result<(), BeaconError> {
        let (token, distinct_id, _) = self.snapshot()?;
        self.post_encoded(
            "engage",
            json!({
                "$token": token,
                "$distinct_id": distinct_id,
                op: properties,
            }),
        )
        .await
    }
}

impl Default for HttpMetricsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsTransportEffects for HttpMetricsTransport {
    async fn init(&self, token: &str) -> Result<(), BeaconError> {
        if token.is_empty() {
            return Err(BeaconError::invalid("Metrics token cannot be empty"));
        }
        let mut state = self.state.write();
        state.token = Some(token.to_string());
        if state.distinct_id.is_none() {
            state.distinct_id = Some(Uuid::new_v4().to_string());
        }
        Ok(())
    }

    async fn register(&self, properties: Properties) -> Result<(), BeaconError> {
        let mut state = self.state.write();
        for (key, value) in properties {
            state.super_properties.insert(key, value);
        }
        Ok(())
    }

    async fn distinct_id(&self) -> Result<String, BeaconError> {
        self.snapshot().map(|(_, id, _)| id)
    }

    async fn identify(&self, id: &str) -> Result<(), BeaconError> {
        let mut state = self.state.write();
        state.distinct_id = Some(id.to_string());
        Ok(())
    }

    async fn alias(&self, id: &str) -> Result<(), BeaconError> {
        let (_, distinct_id, _) = self.snapshot()?;
        let mut properties = Properties::new();
        properties.insert("alias".to_string(), Value::String(id.to_string()));
        properties.insert("original".to_string(), Value::String(distinct_id));
        self.post_event("$create_alias", properties).await
    }

    async fn track(&self, name: &str, properties: Properties) -> Result<(), BeaconError> {
        self.post_event(name, properties).await
    }

    async fn people_set(&self, properties: Properties) -> Result<(), BeaconError> {
        self.post_engage("$set", properties).await
    }

    async fn people_set_once(&self, properties: Properties) -> Result<(), BeaconError> {
        self.post_engage("$set_once", properties).await
    }
}
