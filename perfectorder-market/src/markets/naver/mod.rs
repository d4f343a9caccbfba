//! Naver Smart Store commerce API adapter

mod auth;
mod error;
mod http;
mod market;
mod types;

use reqwest::Client;

use crate::egress::EgressConfig;
use crate::error::Result;

pub(crate) use types::{
    NaverLastChangedResponse, NaverProductOrderDetail, NaverQueryResponse, NaverTokenResponse,
};

pub(crate) const NAVER_API_HOST: &str = "api.commerce.naver.com";
pub(crate) const TOKEN_PATH: &str = "/v1/oauth2/token";
pub(crate) const LAST_CHANGED_PATH: &str =
    "/v1/pay-order/seller/product-orders/last-changed-statuses";
pub(crate) const QUERY_PATH: &str = "/v1/pay-order/seller/product-orders/query";
/// Maximum product-order ids per detail query.
pub(crate) const MAX_QUERY_BATCH: usize = 50;

/// Naver Smart Store adapter
pub struct NaverMarket {
    pub(crate) client: Client,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

/// Naver adapter builder
pub struct NaverMarketBuilder {
    client_id: String,
    client_secret: String,
    egress: EgressConfig,
}

impl NaverMarketBuilder {
    fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            egress: EgressConfig::default(),
        }
    }

    /// Route this adapter's traffic through the given egress configuration.
    #[must_use]
    pub fn egress(mut self, egress: EgressConfig) -> Self {
        self.egress = egress;
        self
    }

    pub fn build(self) -> Result<NaverMarket> {
        Ok(NaverMarket {
            client: self.egress.build_client("naver")?,
            client_id: self.client_id,
            client_secret: self.client_secret,
        })
    }
}

impl NaverMarket {
    pub fn new(client_id: String, client_secret: String) -> Result<Self> {
        Self::builder(client_id, client_secret).build()
    }

    pub fn builder(client_id: String, client_secret: String) -> NaverMarketBuilder {
        NaverMarketBuilder::new(client_id, client_secret)
    }
}
