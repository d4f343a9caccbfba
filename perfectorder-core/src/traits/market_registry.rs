//! Market adapter registry abstraction.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use perfectorder_market::MarketAdapter;

/// Registry of live adapter instances, keyed by credential id.
///
/// Adapters hold a configured HTTP client, so they are created once per
/// credential and shared. A default in-memory implementation is provided
/// by [`InMemoryMarketRegistry`].
#[async_trait]
pub trait MarketRegistry: Send + Sync {
    /// Register an adapter instance.
    async fn register(&self, credential_id: String, adapter: Arc<dyn MarketAdapter>);

    /// Drop an adapter instance.
    async fn unregister(&self, credential_id: &str);

    /// Get an adapter instance.
    async fn get(&self, credential_id: &str) -> Option<Arc<dyn MarketAdapter>>;

    /// List all registered credential ids.
    async fn list_credential_ids(&self) -> Vec<String>;
}

/// In-memory adapter registry.
///
/// Default implementation, sufficient for single-process deployments.
#[derive(Clone, Default)]
pub struct InMemoryMarketRegistry {
    adapters: Arc<RwLock<HashMap<String, Arc<dyn MarketAdapter>>>>,
}

impl InMemoryMarketRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarketRegistry for InMemoryMarketRegistry {
    async fn register(&self, credential_id: String, adapter: Arc<dyn MarketAdapter>) {
        self.adapters.write().await.insert(credential_id, adapter);
    }

    async fn unregister(&self, credential_id: &str) {
        self.adapters.write().await.remove(credential_id);
    }

    async fn get(&self, credential_id: &str) -> Option<Arc<dyn MarketAdapter>> {
        self.adapters.read().await.get(credential_id).cloned()
    }

    async fn list_credential_ids(&self) -> Vec<String> {
        self.adapters.read().await.keys().cloned().collect()
    }
}
