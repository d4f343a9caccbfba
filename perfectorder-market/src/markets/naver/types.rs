//! Naver commerce API payload types

use serde::Deserialize;

/// OAuth2 token endpoint response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) struct NaverTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `last-changed-statuses` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverLastChangedResponse {
    #[serde(default)]
    pub data: Option<NaverLastChangedData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverLastChangedData {
    #[serde(default)]
    pub last_change_statuses: Vec<NaverLastChangedStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverLastChangedStatus {
    pub product_order_id: String,
    #[serde(default)]
    pub product_order_status: Option<String>,
    #[serde(default)]
    pub last_changed_date: Option<String>,
}

/// Detail `query` response: one entry per product order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverQueryResponse {
    #[serde(default)]
    pub data: Vec<NaverProductOrderDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverProductOrderDetail {
    pub product_order: NaverProductOrder,
    #[serde(default)]
    pub order: Option<NaverOrderInfo>,
    #[serde(default)]
    pub delivery: Option<NaverDeliveryInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverProductOrder {
    pub product_order_id: String,
    pub product_order_status: String,
    pub product_name: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_option: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<i64>,
    #[serde(default)]
    pub total_payment_amount: Option<i64>,
    #[serde(default)]
    pub shipping_address: Option<NaverShippingAddress>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverShippingAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tel1: Option<String>,
    #[serde(default)]
    pub base_address: Option<String>,
    #[serde(default)]
    pub detailed_address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverOrderInfo {
    #[serde(default)]
    pub orderer_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverDeliveryInfo {
    #[serde(default)]
    pub delivery_company: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
}

/// Error body shape shared by commerce API endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NaverErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
