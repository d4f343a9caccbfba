//! Order storage abstraction.

use std::collections::HashSet;

use async_trait::async_trait;

use perfectorder_market::{Order, OrderKey};

use crate::error::CoreResult;

/// Order storage trait.
///
/// Orders are scoped per user; the same vendor order synced by two users
/// yields two independent rows. `existing_keys` exists so a sync merge can
/// dedup an entire batch with one storage round-trip.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All uniqueness keys currently stored for a user.
    async fn existing_keys(&self, user_id: &str) -> CoreResult<HashSet<OrderKey>>;

    /// Insert a new order.
    async fn insert(&self, user_id: &str, order: &Order) -> CoreResult<()>;

    /// Find an order by its id.
    async fn find(&self, user_id: &str, order_id: &str) -> CoreResult<Option<Order>>;

    /// Overwrite an existing order.
    async fn update(&self, user_id: &str, order: &Order) -> CoreResult<()>;

    /// List all of a user's orders.
    async fn list(&self, user_id: &str) -> CoreResult<Vec<Order>>;
}
