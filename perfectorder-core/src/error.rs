//! Unified error type for the core services.

use perfectorder_market::MarketError;
use serde::Serialize;
use thiserror::Error;

/// Core service error.
///
/// Serializable so outer layers (HTTP handlers, desktop frontends) can hand
/// structured errors to a UI. The `code` tag carries the variant name, the
/// `details` field the variant payload.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No credential with the given id.
    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    /// No order with the given id for this user.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Another credential of the same user and marketplace already uses
    /// this alias.
    #[error("Alias already in use: {0}")]
    AliasInUse(String),

    /// A request field failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The same key material is already registered for this user.
    #[error("Duplicate credential: {0}")]
    DuplicateCredential(String),

    /// The storage backend failed. Always fatal to the current operation.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The requested order status change is not allowed.
    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Current status.
        from: perfectorder_market::OrderStatus,
        /// Requested status.
        to: perfectorder_market::OrderStatus,
    },

    /// A marketplace adapter error, forwarded with its classification intact.
    #[error("{0}")]
    Market(#[from] MarketError),
}

impl CoreError {
    /// Whether the error is expected behavior the user can remediate,
    /// used for log levelling (`warn` vs `error`).
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CredentialNotFound(_)
            | Self::OrderNotFound(_)
            | Self::AliasInUse(_)
            | Self::ValidationError(_)
            | Self::DuplicateCredential(_)
            | Self::InvalidTransition { .. } => true,
            Self::StorageError(_) => false,
            Self::Market(e) => e.is_expected(),
        }
    }
}

/// Convenience type alias for `Result<T, CoreError>`.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
