//! Adapter factory functions and metadata.

use std::sync::Arc;

use crate::egress::EgressConfig;
use crate::error::{MarketError, Result};
use crate::traits::MarketAdapter;
use crate::types::{CredentialValidationError, MarketCredentials, MarketMetadata};

#[cfg(feature = "coupang")]
use crate::markets::CoupangMarket;
#[cfg(feature = "naver")]
use crate::markets::NaverMarket;

/// Creates a [`MarketAdapter`] instance from the given credentials.
///
/// The concrete adapter type is determined by the [`MarketCredentials`]
/// variant. Credentials are sanitized and field-validated first; an empty
/// field after sanitization is a [`MarketError::MissingCredential`] and no
/// adapter is constructed. The returned adapter is wrapped in
/// `Arc<dyn MarketAdapter>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use perfectorder_market::{create_market, EgressConfig, MarketCredentials};
///
/// let adapter = create_market(
///     MarketCredentials::Naver {
///         client_id: "your-client-id".to_string(),
///         client_secret: "your-client-secret".to_string(),
///     },
///     &EgressConfig::from_env(),
/// ).unwrap();
/// ```
pub fn create_market(
    credentials: MarketCredentials,
    egress: &EgressConfig,
) -> Result<Arc<dyn MarketAdapter>> {
    let credentials = credentials.sanitized();
    if let Err(e) = credentials.validate() {
        let market = credentials.market_type().to_string();
        let field = match e {
            CredentialValidationError::MissingField { field, .. }
            | CredentialValidationError::EmptyField { field, .. }
            | CredentialValidationError::InvalidFormat { field, .. } => field,
        };
        return Err(MarketError::MissingCredential { market, field });
    }

    match credentials {
        #[cfg(feature = "coupang")]
        MarketCredentials::Coupang {
            vendor_id,
            access_key,
            secret_key,
        } => Ok(Arc::new(
            CoupangMarket::builder(vendor_id, access_key, secret_key)
                .egress(egress.clone())
                .build()?,
        )),
        #[cfg(feature = "naver")]
        MarketCredentials::Naver {
            client_id,
            client_secret,
        } => Ok(Arc::new(
            NaverMarket::builder(client_id, client_secret)
                .egress(egress.clone())
                .build()?,
        )),
        other => Err(MarketError::UnsupportedMarket {
            market: other.market_type().to_string(),
        }),
    }
}

/// Returns metadata for all marketplaces enabled via feature flags.
///
/// Useful for building dynamic UIs that enumerate available marketplaces
/// and their required credential fields.
pub fn get_all_market_metadata() -> Vec<MarketMetadata> {
    vec![
        #[cfg(feature = "coupang")]
        CoupangMarket::metadata(),
        #[cfg(feature = "naver")]
        NaverMarket::metadata(),
    ]
}
