//! Marketplace adapter implementations

/// Shared utilities used by adapter implementations.
pub mod common;

#[cfg(feature = "coupang")]
mod coupang;
#[cfg(feature = "naver")]
mod naver;

#[cfg(feature = "coupang")]
pub use coupang::CoupangMarket;
#[cfg(feature = "naver")]
pub use naver::NaverMarket;
