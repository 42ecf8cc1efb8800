//! Client context effect interface (user agent, referrer)
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `beacon-effects` (Layer 3)
//! - **Usage**: trait enrichment in both façades
//!
//! Read-only facts about the hosting client, supplied at call time. Both
//! queries are total: a context with nothing to report returns `None`.

use async_trait::async_trait;

/// Pure trait for client environment facts
#[async_trait]
pub trait ClientContextEffects: Send + Sync {
    /// User-agent string of the hosting client, if known.
    async fn user_agent(&self) -> Option<String>;

    /// Page or deep-link referrer the client was opened from, if any.
    async fn referrer(&self) -> Option<String>;
}
