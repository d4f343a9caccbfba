//! Credential lifecycle service.

use std::sync::Arc;

use chrono::Utc;

use perfectorder_market::{create_market, MarketError};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CreateCredentialRequest, Credential};

/// Credential CRUD plus remote verification.
pub struct CredentialService {
    ctx: Arc<ServiceContext>,
}

impl CredentialService {
    /// Create a credential service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Create and store a credential.
    ///
    /// Key material is sanitized and field-validated first. The alias must
    /// be unique per (user, marketplace), and the same key material may not
    /// be registered twice for one user. For marketplaces with an adapter
    /// implementation the adapter is built and registered immediately;
    /// adapterless marketplaces (stored for bookkeeping) are saved without
    /// one and surface `UnsupportedMarket` when synced.
    pub async fn create(&self, request: CreateCredentialRequest) -> CoreResult<Credential> {
        let credentials = request.credentials.sanitized();
        credentials
            .validate()
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;

        let alias = request.alias.trim().to_string();
        if alias.is_empty() {
            return Err(CoreError::ValidationError(
                "Alias must not be empty".to_string(),
            ));
        }

        let market = credentials.market_type();
        let existing = self
            .ctx
            .credential_store()
            .list_for_user(&request.user_id)
            .await?;
        for cred in &existing {
            if cred.market != market {
                continue;
            }
            if cred.alias == alias {
                return Err(CoreError::AliasInUse(alias));
            }
            if cred.credentials.to_map() == credentials.to_map() {
                return Err(CoreError::DuplicateCredential(cred.alias.clone()));
            }
        }

        let adapter = match create_market(credentials.clone(), self.ctx.egress()) {
            Ok(adapter) => Some(adapter),
            Err(MarketError::UnsupportedMarket { .. }) => {
                log::warn!("[credential] Storing {market} credential without an adapter");
                None
            }
            Err(e) => return Err(e.into()),
        };

        let credential = Credential {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: request.user_id,
            market,
            alias,
            credentials,
            active: true,
            created_at: Utc::now(),
        };

        if let Some(adapter) = adapter {
            self.ctx
                .market_registry()
                .register(credential.id.clone(), adapter)
                .await;
        }

        if let Err(e) = self.ctx.credential_store().save(&credential).await {
            log::error!("[credential] Save failed, unregistering adapter: {e}");
            self.ctx.market_registry().unregister(&credential.id).await;
            return Err(e);
        }

        log::info!(
            "[credential] Created {} credential '{}' for user {}",
            credential.market,
            credential.alias,
            credential.user_id
        );
        Ok(credential)
    }

    /// List all of a user's credentials.
    pub async fn list(&self, user_id: &str) -> CoreResult<Vec<Credential>> {
        self.ctx.credential_store().list_for_user(user_id).await
    }

    /// Toggle whether a credential participates in sync passes.
    pub async fn set_active(&self, credential_id: &str, active: bool) -> CoreResult<Credential> {
        let mut credential = self.find(credential_id).await?;
        credential.active = active;
        self.ctx.credential_store().save(&credential).await?;
        Ok(credential)
    }

    /// Delete a credential and drop its live adapter.
    pub async fn delete(&self, credential_id: &str) -> CoreResult<()> {
        self.find(credential_id).await?;
        self.ctx.market_registry().unregister(credential_id).await;
        self.ctx.credential_store().remove(credential_id).await?;
        log::info!("[credential] Deleted credential {credential_id}");
        Ok(())
    }

    /// Check the stored key material against the live vendor API.
    pub async fn verify(&self, credential_id: &str) -> CoreResult<bool> {
        let credential = self.find(credential_id).await?;
        let adapter = self.ctx.adapter_for(&credential).await?;
        Ok(adapter.validate_credentials().await?)
    }

    async fn find(&self, credential_id: &str) -> CoreResult<Credential> {
        self.ctx
            .credential_store()
            .find_by_id(credential_id)
            .await?
            .ok_or_else(|| CoreError::CredentialNotFound(credential_id.to_string()))
    }
}
