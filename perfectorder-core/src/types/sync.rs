//! Sync pass result types.

use serde::{Deserialize, Serialize};

use perfectorder_market::MarketError;

/// One credential's failure within a sync pass.
///
/// The [`MarketError`] keeps its classification so the UI can render
/// remediation hints (bad keys vs unlisted IP vs vendor outage).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncFailure {
    /// Id of the credential that failed.
    pub credential_id: String,
    /// Display alias of the credential.
    pub alias: String,
    /// What went wrong.
    pub error: MarketError,
}

/// Result of a sync pass across all of a user's active credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    /// Number of orders newly inserted by this pass.
    pub inserted_count: usize,
    /// Per-credential failures. Empty on a fully clean pass.
    pub errors: Vec<SyncFailure>,
}
