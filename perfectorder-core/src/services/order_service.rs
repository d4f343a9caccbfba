//! Order workflow service.

use std::sync::Arc;

use perfectorder_market::{Order, OrderStatus};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// User-driven order status transitions.
///
/// The only transitions this service performs are confirm (`New` ->
/// `Pending`) and dispatch (`New`/`Pending` -> `Shipping`); everything else
/// comes from vendor fetches and is rejected here.
pub struct OrderService {
    ctx: Arc<ServiceContext>,
}

impl OrderService {
    /// Create an order service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List all of a user's orders.
    pub async fn list(&self, user_id: &str) -> CoreResult<Vec<Order>> {
        self.ctx.order_repository().list(user_id).await
    }

    /// Confirm a new order (`New` -> `Pending`).
    pub async fn confirm(&self, user_id: &str, order_id: &str) -> CoreResult<Order> {
        let mut order = self.find(user_id, order_id).await?;
        if order.status != OrderStatus::New {
            return Err(CoreError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Pending,
            });
        }
        order.status = OrderStatus::Pending;
        self.ctx.order_repository().update(user_id, &order).await?;
        log::info!("[order] Confirmed {order_id}");
        Ok(order)
    }

    /// Dispatch an order (`New`/`Pending` -> `Shipping`), recording the
    /// carrier and invoice (tracking) number.
    pub async fn dispatch(
        &self,
        user_id: &str,
        order_id: &str,
        carrier: &str,
        invoice_no: &str,
    ) -> CoreResult<Order> {
        let carrier = carrier.trim();
        let invoice_no = invoice_no.trim();
        if carrier.is_empty() || invoice_no.is_empty() {
            return Err(CoreError::ValidationError(
                "Carrier and invoice number are required for dispatch".to_string(),
            ));
        }

        let mut order = self.find(user_id, order_id).await?;
        if !matches!(order.status, OrderStatus::New | OrderStatus::Pending) {
            return Err(CoreError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Shipping,
            });
        }
        order.status = OrderStatus::Shipping;
        order.carrier = Some(carrier.to_string());
        order.invoice_no = Some(invoice_no.to_string());
        self.ctx.order_repository().update(user_id, &order).await?;
        log::info!("[order] Dispatched {order_id} via {carrier}");
        Ok(order)
    }

    async fn find(&self, user_id: &str, order_id: &str) -> CoreResult<Order> {
        self.ctx
            .order_repository()
            .find(user_id, order_id)
            .await?
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))
    }
}
