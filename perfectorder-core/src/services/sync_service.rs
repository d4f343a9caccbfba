//! Sync orchestration.

use std::sync::Arc;

use futures::future::join_all;

use perfectorder_market::{FetchParams, MarketError, Order};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{Credential, SyncFailure, SyncReport};

/// Orchestrates one sync pass across a user's active credentials.
///
/// Fetches run concurrently; a credential's failure is recorded in the
/// report and never aborts its siblings. Only storage-layer errors are
/// fatal to the pass.
pub struct SyncService {
    ctx: Arc<ServiceContext>,
}

impl SyncService {
    /// Create a sync service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Run a sync pass for a user.
    ///
    /// With no active credentials this returns a zero report without any
    /// network traffic. The merge step runs under the user's merge lock:
    /// insert-if-new keyed by [`OrderKey`](perfectorder_market::OrderKey),
    /// duplicates (against the store or within the batch) are dropped
    /// silently, and existing orders are never modified.
    pub async fn sync_all(&self, user_id: &str) -> CoreResult<SyncReport> {
        let credentials = self.ctx.credential_store().list_for_user(user_id).await?;
        let active: Vec<Credential> = credentials.into_iter().filter(|c| c.active).collect();
        if active.is_empty() {
            log::info!("[sync] No active credentials for user {user_id}");
            return Ok(SyncReport::default());
        }

        log::info!(
            "[sync] Starting pass for user {user_id} across {} credentials",
            active.len()
        );

        let fetches = active.iter().map(|credential| async move {
            let result = self.fetch_orders(credential).await;
            (credential, result)
        });
        let results = join_all(fetches).await;

        let mut batch: Vec<Order> = Vec::new();
        let mut errors: Vec<SyncFailure> = Vec::new();
        for (credential, result) in results {
            match result {
                Ok(orders) => {
                    log::info!(
                        "[sync] {} ({}): fetched {} orders",
                        credential.alias,
                        credential.market,
                        orders.len()
                    );
                    batch.extend(orders);
                }
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("[sync] {} failed: {e}", credential.alias);
                    } else {
                        log::error!("[sync] {} failed: {e}", credential.alias);
                    }
                    errors.push(SyncFailure {
                        credential_id: credential.id.clone(),
                        alias: credential.alias.clone(),
                        error: e,
                    });
                }
            }
        }

        let guard = self.ctx.merge_guard(user_id).await;
        let _merge = guard.lock().await;
        let inserted_count = self.merge(user_id, batch).await?;

        log::info!(
            "[sync] Pass complete for user {user_id}: {inserted_count} inserted, {} failures",
            errors.len()
        );

        Ok(SyncReport {
            inserted_count,
            errors,
        })
    }

    /// Resolve the credential's adapter and fetch with default parameters.
    async fn fetch_orders(&self, credential: &Credential) -> Result<Vec<Order>, MarketError> {
        let adapter = self.ctx.adapter_for(credential).await?;
        adapter.fetch_orders(&FetchParams::default()).await
    }

    /// Insert-if-new merge. Caller holds the user's merge lock.
    async fn merge(&self, user_id: &str, batch: Vec<Order>) -> CoreResult<usize> {
        let mut seen = self.ctx.order_repository().existing_keys(user_id).await?;
        let mut inserted = 0;
        for order in batch {
            let key = order.key();
            if seen.contains(&key) {
                continue;
            }
            self.ctx.order_repository().insert(user_id, &order).await?;
            seen.insert(key);
            inserted += 1;
        }
        Ok(inserted)
    }
}
