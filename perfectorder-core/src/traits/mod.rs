//! Storage and registry abstractions.
//!
//! The core never touches a concrete database or keystore; outer layers
//! provide implementations of these traits.

mod credential_store;
mod market_registry;
mod order_repository;

pub use credential_store::CredentialStore;
pub use market_registry::{InMemoryMarketRegistry, MarketRegistry};
pub use order_repository::OrderRepository;
