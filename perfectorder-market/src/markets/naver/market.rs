//! Naver `MarketAdapter` implementation

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde_json::json;

use crate::error::Result;
use crate::traits::{MarketAdapter, MarketErrorMapper};
use crate::types::{
    FetchParams, FieldType, MarketCredentialField, MarketFeatures, MarketLimits, MarketMetadata,
    MarketType, Order, OrderItem, OrderStatus,
};

use super::{
    LAST_CHANGED_PATH, MAX_QUERY_BATCH, NaverLastChangedResponse, NaverMarket,
    NaverProductOrderDetail, NaverQueryResponse, QUERY_PATH,
};

/// Naver timestamps are KST with millisecond precision.
fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("KST offset is within bounds")
}

// ============ Status table ============

/// Vendor -> canonical status. Request states (`*_REQUESTED`) are already
/// treated as their terminal direction; a cancellation request leaves the
/// fulfillment flow immediately.
fn vendor_to_canonical(status: &str) -> Option<OrderStatus> {
    match status {
        "PAYED" => Some(OrderStatus::New),
        "PRODUCT_PREPARE" => Some(OrderStatus::Pending),
        "DELIVERY" => Some(OrderStatus::Shipping),
        "DELIVERED" => Some(OrderStatus::Delivered),
        "CANCELED" | "CANCEL_REQUESTED" => Some(OrderStatus::Cancelled),
        "RETURNED" | "RETURN_REQUESTED" => Some(OrderStatus::Returned),
        _ => None,
    }
}

// ============ Lookback window ============

/// `lastChangedFrom` value: the explicit `since`, or a 24-hour lookback.
fn last_changed_from(params: &FetchParams, now: DateTime<Utc>) -> String {
    params
        .since
        .unwrap_or_else(|| now - Duration::hours(24))
        .with_timezone(&kst())
        .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        .to_string()
}

impl NaverMarket {
    /// Map one product-order detail into a canonical [`Order`].
    ///
    /// Naver's unit of status is the product order (one product line), so
    /// each product order becomes its own canonical order with a single
    /// item.
    fn map_detail(&self, detail: &NaverProductOrderDetail) -> Result<Order> {
        let po = &detail.product_order;
        let Some(status) = vendor_to_canonical(&po.product_order_status) else {
            return Err(self.mapping_error(format!(
                "Unknown product order status: {}",
                po.product_order_status
            )));
        };

        let ordered_at = detail
            .order
            .as_ref()
            .and_then(|o| o.order_date.as_deref())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let unit_price = po.unit_price.unwrap_or(0);
        let address = po.shipping_address.as_ref();
        Ok(Order {
            id: Order::compose_id(MarketType::Naver, &po.product_order_id),
            market: MarketType::Naver,
            vendor_order_no: po.product_order_id.clone(),
            status,
            orderer_name: detail
                .order
                .as_ref()
                .and_then(|o| o.orderer_name.clone())
                .unwrap_or_default(),
            receiver_name: address.and_then(|a| a.name.clone()).unwrap_or_default(),
            receiver_phone: address.and_then(|a| a.tel1.clone()),
            receiver_address: address.map(|a| {
                let base = a.base_address.clone().unwrap_or_default();
                let detailed = a.detailed_address.clone().unwrap_or_default();
                format!("{base} {detailed}").trim().to_string()
            }),
            items: vec![OrderItem {
                product_name: po.product_name.clone(),
                product_id: po.product_id.clone().unwrap_or_default(),
                option: po.product_option.clone(),
                quantity: po.quantity,
                unit_price,
            }],
            total_price: po
                .total_payment_amount
                .unwrap_or_else(|| unit_price * i64::from(po.quantity)),
            carrier: detail
                .delivery
                .as_ref()
                .and_then(|d| d.delivery_company.clone()),
            invoice_no: detail
                .delivery
                .as_ref()
                .and_then(|d| d.tracking_number.clone()),
            ordered_at,
            fetched_at: Utc::now(),
        })
    }

    /// Step 1: product-order ids whose status changed in the window.
    async fn changed_order_ids(&self, token: &str, params: &FetchParams) -> Result<Vec<String>> {
        let from = last_changed_from(params, Utc::now());
        let body: NaverLastChangedResponse = self
            .authed_get(token, LAST_CHANGED_PATH, &[("lastChangedFrom", from)])
            .await?;

        let statuses = body
            .data
            .map(|d| d.last_change_statuses)
            .unwrap_or_default();

        let until = params.until;
        Ok(statuses
            .into_iter()
            .filter(|s| match (until, s.last_changed_date.as_deref()) {
                (Some(until), Some(date)) => DateTime::parse_from_rfc3339(date)
                    .map(|dt| dt.with_timezone(&Utc) <= until)
                    .unwrap_or(true),
                _ => true,
            })
            .map(|s| s.product_order_id)
            .collect())
    }

    /// Step 2: full details, batched at the API's id limit.
    async fn query_details(
        &self,
        token: &str,
        ids: &[String],
    ) -> Result<Vec<NaverProductOrderDetail>> {
        let mut details = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_QUERY_BATCH) {
            let body: NaverQueryResponse = self
                .authed_post(token, QUERY_PATH, &json!({ "productOrderIds": chunk }))
                .await?;
            details.extend(body.data);
        }
        Ok(details)
    }
}

#[async_trait]
impl MarketAdapter for NaverMarket {
    fn id(&self) -> &'static str {
        "NAVER"
    }

    fn metadata() -> MarketMetadata {
        MarketMetadata {
            id: MarketType::Naver,
            name: "Naver Smart Store".to_string(),
            description: "Naver commerce API (OAuth2 client credentials)".to_string(),
            required_fields: vec![
                MarketCredentialField {
                    key: "clientId".to_string(),
                    label: "Client ID".to_string(),
                    field_type: FieldType::Text,
                    placeholder: None,
                    help_text: Some("커머스API센터 > 애플리케이션 정보".to_string()),
                },
                MarketCredentialField {
                    key: "clientSecret".to_string(),
                    label: "Client Secret".to_string(),
                    field_type: FieldType::Password,
                    placeholder: None,
                    help_text: None,
                },
            ],
            features: MarketFeatures {
                ip_allowlist: false,
                invoice_registration: true,
            },
            limits: MarketLimits {
                max_window_days: 1,
                max_detail_batch: Some(50),
            },
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        // A successful token exchange is exactly the check we need; bad
        // application keys fail right here.
        self.fetch_token().await?;
        Ok(true)
    }

    async fn fetch_orders(&self, params: &FetchParams) -> Result<Vec<Order>> {
        let token = self.fetch_token().await?;

        let ids = self.changed_order_ids(&token, params).await?;
        if ids.is_empty() {
            log::debug!("[{}] No changed product orders", self.market_name());
            return Ok(Vec::new());
        }
        log::debug!(
            "[{}] {} changed product orders, querying details",
            self.market_name(),
            ids.len()
        );

        let details = self.query_details(&token, &ids).await?;
        let mut orders = Vec::new();
        for detail in &details {
            let order = self.map_detail(detail)?;
            if order.status == params.status {
                orders.push(order);
            }
        }
        log::debug!("[{}] Fetched {} orders", self.market_name(), orders.len());
        Ok(orders)
    }
}
