//! Coupang API payload types

use serde::Deserialize;

/// Common Coupang response envelope.
///
/// The gateway echoes the HTTP status in `code` on success (as a number)
/// and uses string codes on some error bodies, so `code` is kept loose and
/// normalized via [`code_str()`](Self::code_str).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoupangResponse<T> {
    pub code: Option<serde_json::Value>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> CoupangResponse<T> {
    /// The envelope code as a string, whatever JSON type the gateway used.
    pub fn code_str(&self) -> Option<String> {
        match &self.code {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        matches!(self.code_str().as_deref(), Some("200") | None)
    }
}

/// One ordersheet (an order placed by a buyer, possibly multi-item).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoupangOrdersheet {
    pub order_id: u64,
    pub status: String,
    #[serde(default)]
    pub ordered_at: Option<String>,
    pub orderer: Option<CoupangOrderer>,
    pub receiver: Option<CoupangReceiver>,
    #[serde(default)]
    pub order_items: Vec<CoupangOrderItem>,
    #[serde(default)]
    pub delivery_company_name: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoupangOrderer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoupangReceiver {
    #[serde(default)]
    pub name: Option<String>,
    /// Coupang masks the real phone number behind a relay ("safe") number.
    #[serde(default)]
    pub safe_number: Option<String>,
    #[serde(default)]
    pub addr1: Option<String>,
    #[serde(default)]
    pub addr2: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoupangOrderItem {
    #[serde(default)]
    pub vendor_item_id: Option<u64>,
    pub vendor_item_name: String,
    #[serde(default)]
    pub seller_product_item_name: Option<String>,
    pub shipping_count: u32,
    #[serde(default)]
    pub sales_price: Option<i64>,
    #[serde(default)]
    pub order_price: Option<i64>,
}

impl CoupangOrderItem {
    /// Paid amount for this line: the vendor's `orderPrice` when present,
    /// otherwise unit price times quantity.
    pub fn line_total(&self) -> i64 {
        self.order_price
            .unwrap_or_else(|| self.sales_price.unwrap_or(0) * i64::from(self.shipping_count))
    }
}
