//! # perfectorder-core
//!
//! Platform-independent business logic for PerfectOrder: credential
//! lifecycle, order sync orchestration, and user-driven order transitions.
//!
//! Storage is reached only through the traits in [`traits`]; outer layers
//! (web server, desktop shell) provide the implementations and wire them
//! into a [`ServiceContext`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use perfectorder_core::{ServiceContext, SyncService};
//! use perfectorder_market::EgressConfig;
//!
//! # async fn run(
//! #     credential_store: Arc<dyn perfectorder_core::CredentialStore>,
//! #     order_repository: Arc<dyn perfectorder_core::OrderRepository>,
//! # ) -> perfectorder_core::CoreResult<()> {
//! let ctx = Arc::new(ServiceContext::new(
//!     credential_store,
//!     order_repository,
//!     Arc::new(perfectorder_core::InMemoryMarketRegistry::new()),
//!     EgressConfig::from_env(),
//! ));
//! let report = SyncService::new(ctx).sync_all("user-1").await?;
//! println!("{} new orders", report.inserted_count);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use error::{CoreError, CoreResult};

// Re-export services
pub use services::{CredentialService, OrderService, ServiceContext, SyncService};

// Re-export traits
pub use traits::{CredentialStore, InMemoryMarketRegistry, MarketRegistry, OrderRepository};

// Re-export types
pub use types::{CreateCredentialRequest, Credential, SyncFailure, SyncReport};

// Re-export the adapter crate so outer layers share one version
pub use perfectorder_market as market;
