//! Static client context double

use async_trait::async_trait;
use beacon_core::effects::ClientContextEffects;

/// Client context double returning fixed values
#[derive(Debug, Clone, Default)]
pub struct StaticClientContext {
    user_agent: Option<String>,
    referrer: Option<String>,
}

impl StaticClientContext {
    /// A context with the given user agent and no referrer.
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: Some(user_agent.to_string()),
            referrer: None,
        }
    }

    /// A context that knows nothing about its client.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a referrer.
    pub fn with_referrer(mut self, referrer: &str) -> Self {
        self.referrer = Some(referrer.to_string());
        self
    }
}

#[async_trait]
impl ClientContextEffects for StaticClientContext {
    async fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    async fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }
}
