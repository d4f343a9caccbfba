//! Coupang `MarketAdapter` implementation

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::error::Result;
use crate::traits::{ErrorContext, MarketAdapter, MarketErrorMapper};
use crate::types::{
    FetchParams, FieldType, MarketCredentialField, MarketFeatures, MarketLimits, MarketMetadata,
    MarketType, Order, OrderItem, OrderStatus,
};

use super::{CoupangMarket, CoupangOrdersheet, ordersheets_path};

/// Coupang windows are expressed as KST calendar dates.
fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("KST offset is within bounds")
}

// ============ Status tables ============

/// Canonical -> vendor status for listing requests.
///
/// Shipping queries use `DEPARTURE`; responses may still carry
/// `DELIVERING`, which the reverse table accepts.
fn canonical_to_vendor(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::New => "ACCEPT",
        OrderStatus::Pending => "INSTRUCT",
        OrderStatus::Shipping => "DEPARTURE",
        OrderStatus::Delivered => "FINAL_DELIVERY",
        OrderStatus::Cancelled => "CANCEL",
        OrderStatus::Returned => "RETURN",
    }
}

/// Vendor -> canonical status. Total over every token Coupang emits;
/// `EXCHANGE` enters the same reverse-logistics flow as returns.
fn vendor_to_canonical(status: &str) -> Option<OrderStatus> {
    match status {
        "ACCEPT" => Some(OrderStatus::New),
        "INSTRUCT" => Some(OrderStatus::Pending),
        "DEPARTURE" | "DELIVERING" => Some(OrderStatus::Shipping),
        "FINAL_DELIVERY" => Some(OrderStatus::Delivered),
        "CANCEL" => Some(OrderStatus::Cancelled),
        "RETURN" | "EXCHANGE" => Some(OrderStatus::Returned),
        _ => None,
    }
}

// ============ Date window ============

/// Resolve the KST date window for an ordersheet listing.
///
/// Defaults to KST yesterday through KST tomorrow so a sync that runs
/// around midnight never misses orders placed on either side of the
/// boundary.
fn kst_window(params: &FetchParams, now: DateTime<Utc>) -> (String, String) {
    let tz = kst();
    let from = params
        .since
        .unwrap_or_else(|| now - Duration::days(1))
        .with_timezone(&tz)
        .format("%Y-%m-%d")
        .to_string();
    let to = params
        .until
        .unwrap_or_else(|| now + Duration::days(1))
        .with_timezone(&tz)
        .format("%Y-%m-%d")
        .to_string();
    (from, to)
}

impl CoupangMarket {
    /// Map one ordersheet into a canonical [`Order`].
    fn map_ordersheet(&self, sheet: CoupangOrdersheet) -> Result<Order> {
        let Some(status) = vendor_to_canonical(&sheet.status) else {
            return Err(self.mapping_error(format!("Unknown ordersheet status: {}", sheet.status)));
        };

        let vendor_order_no = sheet.order_id.to_string();
        let ordered_at = sheet
            .ordered_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let items: Vec<OrderItem> = sheet
            .order_items
            .iter()
            .map(|item| OrderItem {
                product_name: item.vendor_item_name.clone(),
                product_id: item
                    .vendor_item_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                option: item.seller_product_item_name.clone(),
                quantity: item.shipping_count,
                unit_price: item.sales_price.unwrap_or(0),
            })
            .collect();
        let total_price = sheet.order_items.iter().map(super::types::CoupangOrderItem::line_total).sum();

        let receiver = sheet.receiver;
        Ok(Order {
            id: Order::compose_id(MarketType::Coupang, &vendor_order_no),
            market: MarketType::Coupang,
            vendor_order_no,
            status,
            orderer_name: sheet
                .orderer
                .and_then(|o| o.name)
                .unwrap_or_default(),
            receiver_name: receiver
                .as_ref()
                .and_then(|r| r.name.clone())
                .unwrap_or_default(),
            receiver_phone: receiver.as_ref().and_then(|r| r.safe_number.clone()),
            receiver_address: receiver.as_ref().map(|r| {
                let addr1 = r.addr1.clone().unwrap_or_default();
                let addr2 = r.addr2.clone().unwrap_or_default();
                format!("{addr1} {addr2}").trim().to_string()
            }),
            items,
            total_price,
            carrier: sheet.delivery_company_name,
            invoice_no: sheet.invoice_number,
            ordered_at,
            fetched_at: Utc::now(),
        })
    }
}

#[async_trait]
impl MarketAdapter for CoupangMarket {
    fn id(&self) -> &'static str {
        "COUPANG"
    }

    fn metadata() -> MarketMetadata {
        MarketMetadata {
            id: MarketType::Coupang,
            name: "Coupang".to_string(),
            description: "Coupang Wing open API (HMAC-signed, egress IP allowlisted)".to_string(),
            required_fields: vec![
                MarketCredentialField {
                    key: "vendorId".to_string(),
                    label: "Vendor ID".to_string(),
                    field_type: FieldType::Text,
                    placeholder: Some("A00123456".to_string()),
                    help_text: Some("Wing > 판매자정보 > 업체코드".to_string()),
                },
                MarketCredentialField {
                    key: "accessKey".to_string(),
                    label: "Access Key".to_string(),
                    field_type: FieldType::Text,
                    placeholder: None,
                    help_text: None,
                },
                MarketCredentialField {
                    key: "secretKey".to_string(),
                    label: "Secret Key".to_string(),
                    field_type: FieldType::Password,
                    placeholder: None,
                    help_text: None,
                },
            ],
            features: MarketFeatures {
                ip_allowlist: true,
                invoice_registration: true,
            },
            limits: MarketLimits {
                max_window_days: 31,
                max_detail_batch: None,
            },
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        // Smallest possible authenticated call: today's new-order window.
        // A signature or allowlist problem surfaces as AuthFailure or
        // AccessDenied before any data comes back.
        let params = FetchParams::default();
        let (from, to) = kst_window(&params, Utc::now());
        let _: Vec<CoupangOrdersheet> = self
            .get(
                &ordersheets_path(&self.vendor_id),
                &[
                    ("createdAtFrom", from),
                    ("createdAtTo", to),
                    ("status", canonical_to_vendor(OrderStatus::New).to_string()),
                ],
                ErrorContext::default(),
            )
            .await?;
        Ok(true)
    }

    async fn fetch_orders(&self, params: &FetchParams) -> Result<Vec<Order>> {
        let (from, to) = kst_window(params, Utc::now());
        let vendor_status = canonical_to_vendor(params.status);
        log::debug!(
            "[{}] Fetching ordersheets {from}..{to} status={vendor_status}",
            self.market_name()
        );

        let sheets: Vec<CoupangOrdersheet> = self
            .get(
                &ordersheets_path(&self.vendor_id),
                &[
                    ("createdAtFrom", from),
                    ("createdAtTo", to),
                    ("status", vendor_status.to_string()),
                ],
                ErrorContext::default(),
            )
            .await?;

        let mut orders = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            orders.push(self.map_ordersheet(sheet)?);
        }
        log::debug!("[{}] Fetched {} orders", self.market_name(), orders.len());
        Ok(orders)
    }
}
