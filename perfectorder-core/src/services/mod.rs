//! Core services.
//!
//! Services are thin orchestration layers over the storage traits and the
//! marketplace adapters. They share a [`ServiceContext`] holding the trait
//! objects, the egress configuration, and the per-user merge locks.

mod credential_service;
mod order_service;
mod sync_service;

pub use credential_service::CredentialService;
pub use order_service::OrderService;
pub use sync_service::SyncService;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use perfectorder_market::{create_market, EgressConfig, MarketAdapter, MarketError};

use crate::traits::{CredentialStore, MarketRegistry, OrderRepository};
use crate::types::Credential;

/// Shared dependency container for all services.
pub struct ServiceContext {
    credential_store: Arc<dyn CredentialStore>,
    order_repository: Arc<dyn OrderRepository>,
    market_registry: Arc<dyn MarketRegistry>,
    egress: EgressConfig,
    /// One lock per user serializes that user's order merges. Lazily
    /// populated and never drained; the entry count is bounded by the
    /// number of distinct users seen by this process.
    merge_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        order_repository: Arc<dyn OrderRepository>,
        market_registry: Arc<dyn MarketRegistry>,
        egress: EgressConfig,
    ) -> Self {
        Self {
            credential_store,
            order_repository,
            market_registry,
            egress,
            merge_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Credential store accessor.
    #[must_use]
    pub fn credential_store(&self) -> &Arc<dyn CredentialStore> {
        &self.credential_store
    }

    /// Order repository accessor.
    #[must_use]
    pub fn order_repository(&self) -> &Arc<dyn OrderRepository> {
        &self.order_repository
    }

    /// Market registry accessor.
    #[must_use]
    pub fn market_registry(&self) -> &Arc<dyn MarketRegistry> {
        &self.market_registry
    }

    /// Egress configuration accessor.
    #[must_use]
    pub fn egress(&self) -> &EgressConfig {
        &self.egress
    }

    /// The merge lock for a user. Hold it across an entire
    /// read-existing-keys / insert sequence.
    pub async fn merge_guard(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.merge_locks.lock().await;
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Resolve the live adapter for a credential, creating and registering
    /// one from the stored key material if the registry has none.
    pub async fn adapter_for(
        &self,
        credential: &Credential,
    ) -> Result<Arc<dyn MarketAdapter>, MarketError> {
        if let Some(adapter) = self.market_registry.get(&credential.id).await {
            return Ok(adapter);
        }
        let adapter = create_market(credential.credentials.clone(), &self.egress)?;
        self.market_registry
            .register(credential.id.clone(), adapter.clone())
            .await;
        Ok(adapter)
    }
}
