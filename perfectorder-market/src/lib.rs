//! # perfectorder-market
//!
//! A unified marketplace adapter library for fetching seller orders across
//! Korean e-commerce platforms.
//!
//! ## Supported Marketplaces
//!
//! | Marketplace | Feature Flag | Auth Method |
//! |-------------|-------------|-------------|
//! | [Coupang](https://wing.coupang.com/) | `coupang` | CEA HMAC-SHA256 signature |
//! | [Naver Smart Store](https://commerce-api.naver.com/) | `naver` | OAuth2 client credentials |
//!
//! Credentials for 11st, Gmarket, and Auction can be stored and validated
//! but have no adapter yet; creating one yields
//! [`MarketError::UnsupportedMarket`].
//!
//! ## Feature Flags
//!
//! ### Marketplace Selection
//!
//! - **`all-markets`** *(default)* — Enable all marketplaces listed above.
//! - **`coupang`** — Enable only the Coupang adapter.
//! - **`naver`** — Enable only the Naver Smart Store adapter.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perfectorder_market::{
//!     create_market, EgressConfig, FetchParams, MarketCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create an adapter from credentials
//!     let credentials = MarketCredentials::Coupang {
//!         vendor_id: "A00123456".to_string(),
//!         access_key: "your-access-key".to_string(),
//!         secret_key: "your-secret-key".to_string(),
//!     };
//!     let adapter = create_market(credentials, &EgressConfig::from_env())?;
//!
//!     // 2. Validate credentials against the remote API
//!     adapter.validate_credentials().await?;
//!
//!     // 3. Fetch new orders (default window)
//!     let orders = adapter.fetch_orders(&FetchParams::default()).await?;
//!     for order in &orders {
//!         println!("{} {:?} {}", order.id, order.status, order.total_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Egress
//!
//! Coupang restricts API calls to allowlisted egress IPs, so deployments
//! without a stable address route vendor traffic through a fixed-IP forward
//! proxy. Configure it once via [`EgressConfig`] (or the
//! `PERFECTORDER_EGRESS_PROXY` environment variable) and every adapter
//! client inherits it.
//!
//! ## Error Handling
//!
//! All adapter operations return [`Result<T, MarketError>`](MarketError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`MarketError::AuthFailure`] — keys rejected by the vendor
//! - [`MarketError::AccessDenied`] — egress IP not on the vendor allowlist
//! - [`MarketError::VendorUnavailable`] — network failure, timeout, or 5xx
//! - [`MarketError::MappingError`] — unexpected vendor payload shape
//!
//! Nothing is retried automatically; a failed fetch is reported and the
//! caller decides when to try again.

mod egress;
mod error;
mod factory;
mod http_client;
mod markets;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{MarketError, Result};

// Re-export egress configuration
pub use egress::{EGRESS_PROXY_ENV, EgressConfig};

// Re-export factory functions
pub use factory::{create_market, get_all_market_metadata};

// Re-export core trait only (internal traits are not exported)
pub use traits::MarketAdapter;

// Re-export types
pub use types::{
    CredentialValidationError, FetchParams, FieldType, MarketCredentialField, MarketCredentials,
    MarketFeatures, MarketLimits, MarketMetadata, MarketType, Order, OrderItem, OrderKey,
    OrderStatus,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete adapters (behind feature flags)
#[cfg(feature = "coupang")]
pub use markets::CoupangMarket;

#[cfg(feature = "naver")]
pub use markets::NaverMarket;
