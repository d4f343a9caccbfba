//! Coupang error mapping

use crate::error::MarketError;
use crate::traits::{ErrorContext, MarketErrorMapper, RawApiError};

use super::CoupangMarket;

/// Coupang error code mapping.
///
/// The gateway mostly signals problems through HTTP status (handled
/// centrally in `HttpUtils`); error bodies echo the status as a code, so
/// this mapper covers the echoed codes plus the generic `"ERROR"` body.
impl MarketErrorMapper for CoupangMarket {
    fn market_name(&self) -> &'static str {
        "coupang"
    }

    fn map_error(&self, raw: RawApiError, _context: ErrorContext) -> MarketError {
        match raw.code.as_deref() {
            // ============ Authentication error ============
            Some("401" | "UNAUTHORIZED" | "INVALID_SIGNATURE") => MarketError::AuthFailure {
                market: self.market_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ IP allowlist / permission ============
            Some("403" | "FORBIDDEN" | "ACCESS_DENIED") => MarketError::AccessDenied {
                market: self.market_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Frequency limit ============
            Some("429" | "TOO_MANY_REQUESTS") => MarketError::RateLimited {
                market: self.market_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ Gateway-side failure ============
            Some("500" | "502" | "503" | "504") => MarketError::VendorUnavailable {
                market: self.market_name().to_string(),
                detail: raw.message,
            },

            // ============ Other errors fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
