use async_trait::async_trait;

use crate::error::{MarketError, Result};
use crate::types::{FetchParams, MarketMetadata, Order};

/// Raw API error (internal).
///
/// What a vendor endpoint actually returned, before classification.
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Vendor error code, format differs per marketplace.
    pub code: Option<String>,
    /// Raw error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Context carried into error mapping (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Vendor order number the failing call was about, if any.
    pub vendor_order_no: Option<String>,
}

/// Error mapping trait (internal).
///
/// Each marketplace module implements this to translate raw vendor error
/// bodies into the unified [`MarketError`] taxonomy.
pub(crate) trait MarketErrorMapper {
    /// Marketplace identifier used in error and log prefixes.
    fn market_name(&self) -> &'static str;

    /// Map a raw vendor error into the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> MarketError;

    /// Shortcut: payload did not have the expected shape.
    fn mapping_error(&self, detail: impl ToString) -> MarketError {
        MarketError::MappingError {
            market: self.market_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unmapped vendor error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> MarketError {
        MarketError::Unknown {
            market: self.market_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// A marketplace order-fetch adapter.
///
/// Adapters are read-only toward storage: they perform outbound vendor
/// calls and return canonical [`Order`] values. Persistence and merging
/// happen above this trait, in the orchestration layer.
#[async_trait]
pub trait MarketAdapter: Send + Sync {
    /// Marketplace identifier (matches the [`MarketType`](crate::MarketType)
    /// display token).
    fn id(&self) -> &'static str;

    /// Static metadata for this marketplace (type level).
    ///
    /// Does not require an instance; callable before any adapter exists.
    fn metadata() -> MarketMetadata
    where
        Self: Sized;

    /// Check that the stored credentials are accepted by the vendor.
    ///
    /// Performs one lightweight authenticated call. `Ok(true)` means the
    /// vendor accepted the credentials; auth rejections surface as
    /// `AuthFailure`/`AccessDenied` rather than `Ok(false)`.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Fetch orders matching the given parameters and return them in
    /// canonical form.
    ///
    /// When `params` carries no dates the adapter applies its own default
    /// window. Every call authenticates fresh; nothing is cached between
    /// calls.
    async fn fetch_orders(&self, params: &FetchParams) -> Result<Vec<Order>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMapper;

    impl MarketErrorMapper for TestMapper {
        fn market_name(&self) -> &'static str {
            "testmarket"
        }

        fn map_error(&self, raw: RawApiError, _context: ErrorContext) -> MarketError {
            self.unknown_error(raw)
        }
    }

    #[test]
    fn mapper_shortcuts_carry_market_name() {
        let m = TestMapper;
        let e = m.mapping_error("bad shape");
        assert_eq!(e.to_string(), "[testmarket] Unexpected vendor payload: bad shape");

        let e = m.unknown_error(RawApiError::with_code("E42", "boom"));
        let MarketError::Unknown {
            market, raw_code, ..
        } = e
        else {
            panic!("expected Unknown");
        };
        assert_eq!(market, "testmarket");
        assert_eq!(raw_code.as_deref(), Some("E42"));
    }

    #[test]
    fn raw_api_error_constructors() {
        let plain = RawApiError::new("msg");
        assert!(plain.code.is_none());
        assert_eq!(plain.message, "msg");

        let coded = RawApiError::with_code("C1", "msg");
        assert_eq!(coded.code.as_deref(), Some("C1"));
    }
}
