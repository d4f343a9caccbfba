//! Naver error mapping

use crate::error::MarketError;
use crate::traits::{ErrorContext, MarketErrorMapper, RawApiError};

use super::NaverMarket;

/// Naver commerce API error code mapping.
///
/// Gateway codes are prefixed `GW.`, seller-API codes are dotted paths.
impl MarketErrorMapper for NaverMarket {
    fn market_name(&self) -> &'static str {
        "naver"
    }

    fn map_error(&self, raw: RawApiError, _context: ErrorContext) -> MarketError {
        match raw.code.as_deref() {
            // ============ Authentication error ============
            Some(
                "GW.AUTHN" | "GW.AUTHZ" | "invalid_client" | "unauthorized_client"
                | "invalid_grant" | "SELLER.NO_PERMISSION",
            ) => MarketError::AuthFailure {
                market: self.market_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Frequency limit ============
            Some("GW.RATE_LIMIT") => MarketError::RateLimited {
                market: self.market_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ Gateway-side failure ============
            Some("GW.INTERNAL" | "GW.UNAVAILABLE") => MarketError::VendorUnavailable {
                market: self.market_name().to_string(),
                detail: raw.message,
            },

            // ============ Other errors fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
