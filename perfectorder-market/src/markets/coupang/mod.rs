//! Coupang Wing open API adapter

mod error;
mod http;
mod market;
mod sign;
mod types;

use reqwest::Client;

use crate::egress::EgressConfig;
use crate::error::Result;

pub(crate) use types::{CoupangOrdersheet, CoupangResponse};

pub(crate) const COUPANG_API_HOST: &str = "api-gateway.coupang.com";

/// Ordersheet listing path for a vendor.
pub(crate) fn ordersheets_path(vendor_id: &str) -> String {
    format!("/v2/providers/openapi/apis/api/v4/vendors/{vendor_id}/ordersheets")
}

/// Coupang Wing adapter
pub struct CoupangMarket {
    pub(crate) client: Client,
    pub(crate) vendor_id: String,
    pub(crate) access_key: String,
    pub(crate) secret_key: String,
}

/// Coupang adapter builder
pub struct CoupangMarketBuilder {
    vendor_id: String,
    access_key: String,
    secret_key: String,
    egress: EgressConfig,
}

impl CoupangMarketBuilder {
    fn new(vendor_id: String, access_key: String, secret_key: String) -> Self {
        Self {
            vendor_id,
            access_key,
            secret_key,
            egress: EgressConfig::default(),
        }
    }

    /// Route this adapter's traffic through the given egress configuration.
    ///
    /// Coupang rejects calls from IPs outside the vendor's allowlist, so
    /// production deployments pass a fixed-IP proxy here.
    #[must_use]
    pub fn egress(mut self, egress: EgressConfig) -> Self {
        self.egress = egress;
        self
    }

    pub fn build(self) -> Result<CoupangMarket> {
        Ok(CoupangMarket {
            client: self.egress.build_client("coupang")?,
            vendor_id: self.vendor_id,
            access_key: self.access_key,
            secret_key: self.secret_key,
        })
    }
}

impl CoupangMarket {
    pub fn new(vendor_id: String, access_key: String, secret_key: String) -> Result<Self> {
        Self::builder(vendor_id, access_key, secret_key).build()
    }

    pub fn builder(
        vendor_id: String,
        access_key: String,
        secret_key: String,
    ) -> CoupangMarketBuilder {
        CoupangMarketBuilder::new(vendor_id, access_key, secret_key)
    }
}
