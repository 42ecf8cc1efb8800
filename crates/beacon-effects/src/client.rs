//! System client context
//!
//! Composes a product/version/OS user-agent string for trait enrichment and
//! carries an optional launch referrer (deep link or campaign source) set by
//! the hosting shell at startup.

use async_trait::async_trait;
use beacon_core::effects::ClientContextEffects;

/// Client context handler describing the hosting process
#[derive(Debug, Clone)]
pub struct SystemClientContext {
    user_agent: String,
    referrer: Option<String>,
}

impl SystemClientContext {
    /// Build a context for the given product name and version.
    pub fn new(product: &str, version: &str) -> Self {
        Self {
            user_agent: format!(
                "{}/{} ({} {})",
                product,
                version,
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
            referrer: None,
        }
    }

    /// Attach the launch referrer reported by the hosting shell.
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }
}

#[async_trait]
impl ClientContextEffects for SystemClientContext {
    async fn user_agent(&self) -> Option<String> {
        Some(self.user_agent.clone())
    }

    async fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn user_agent_carries_product_and_version() {
        let context = SystemClientContext::new("beacon-wallet", "0.1.0");
        let ua = context.user_agent().await.unwrap();
        assert!(ua.starts_with("beacon-wallet/0.1.0"));
    }

    #[tokio::test]
    async fn referrer_defaults_to_none() {
        let context = SystemClientContext::new("beacon-wallet", "0.1.0");
        assert_eq!(context.referrer().await, None);
        let context = context.with_referrer("https://wallet.example/launch");
        assert_eq!(
            context.referrer().await.as_deref(),
            Some("https://wallet.example/launch")
        );
    }
}
