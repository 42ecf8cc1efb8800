//! Record shapes forwarded to the analytics transports
//!
//! Records are constructed per call by the façades and never persisted.
//! Identity is resolved at construction time from the client store (or a
//! caller-supplied fallback) so each record reflects the latest locally
//! persisted account.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form property mapping attached to events and trait updates.
pub type Properties = serde_json::Map<String, Value>;

/// A single tracked event, enriched with the best-available identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event name, non-empty
    pub name: String,
    /// Caller-supplied properties plus enrichment
    pub properties: Properties,
    /// Active account id, omitted when no identity is available
    pub user_id: Option<String>,
}

impl EventRecord {
    /// Build an event record, merging the identity into the property map
    /// under `userId` when present.
    pub fn new(name: impl Into<String>, mut properties: Properties, user_id: Option<String>) -> Self {
        if let Some(id) = &user_id {
            properties.insert("userId".to_string(), Value::String(id.clone()));
        }
        Self {
            name: name.into(),
            properties,
            user_id,
        }
    }
}

/// A user-trait update forwarded to the transport's identify primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitsRecord {
    /// Resolved account id; absent when neither the store nor the caller
    /// supplied one
    pub account_id: Option<String>,
    /// Trait mapping, always carrying a `userAgent` entry
    pub traits: Properties,
}

impl TraitsRecord {
    /// Build a traits record, stamping the user agent (`"Unknown"` when the
    /// client context has none).
    pub fn new(account_id: Option<String>, mut traits: Properties, user_agent: Option<String>) -> Self {
        traits.insert(
            "userAgent".to_string(),
            Value::String(user_agent.unwrap_or_else(|| "Unknown".to_string())),
        );
        Self { account_id, traits }
    }
}
