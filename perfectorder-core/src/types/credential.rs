//! Credential types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use perfectorder_market::{MarketCredentials, MarketType};

/// A stored marketplace credential.
///
/// The key material lives inside [`MarketCredentials`]; everything else is
/// bookkeeping for listing and sync scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Credential id (UUID).
    pub id: String,
    /// Owning user id.
    pub user_id: String,
    /// Marketplace this credential belongs to.
    pub market: MarketType,
    /// User-chosen display alias, unique per (user, marketplace).
    pub alias: String,
    /// Typed key material.
    pub credentials: MarketCredentials,
    /// Whether sync passes include this credential.
    pub active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialRequest {
    /// Owning user id.
    pub user_id: String,
    /// Display alias.
    pub alias: String,
    /// Typed key material. Sanitized and validated on create.
    pub credentials: MarketCredentials,
}
