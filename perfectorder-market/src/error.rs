use serde::{Deserialize, Serialize};

/// Unified error type for all marketplace adapter operations.
///
/// Each variant includes a `market` field identifying which marketplace produced
/// the error, plus variant-specific context. All variants are serializable so a
/// sync run can hand structured per-credential failures back to the UI layer.
///
/// Classification matters for operator remediation: [`AuthFailure`](Self::AuthFailure)
/// means "check your keys", [`AccessDenied`](Self::AccessDenied) usually means
/// "register your egress IP with the vendor" (Coupang allowlisting), and
/// [`VendorUnavailable`](Self::VendorUnavailable) means "try again later".
/// None of these are retried automatically; a failed fetch surfaces in the
/// sync report and the caller re-triggers manually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum MarketError {
    /// A required credential field is absent or empty after sanitization.
    ///
    /// Raised before any network I/O is attempted.
    MissingCredential {
        /// Marketplace that the credential belongs to.
        market: String,
        /// Name of the missing field.
        field: String,
    },

    /// The vendor rejected the request's authentication (HTTP 401, invalid
    /// signature, or a failed/empty OAuth token exchange).
    AuthFailure {
        /// Marketplace that produced the error.
        market: String,
        /// Original error message from the vendor API, if available.
        raw_message: Option<String>,
    },

    /// The vendor refused access (HTTP 403).
    ///
    /// For Coupang this almost always means the outbound IP is not on the
    /// vendor's allowlist, which is why it is kept distinct from
    /// [`AuthFailure`](Self::AuthFailure).
    AccessDenied {
        /// Marketplace that produced the error.
        market: String,
        /// Original error message from the vendor API, if available.
        raw_message: Option<String>,
    },

    /// The vendor API rate limit was exceeded (HTTP 429).
    ///
    /// Reported as-is; this library never retries on its own.
    RateLimited {
        /// Marketplace that produced the error.
        market: String,
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Original error message from the vendor API, if available.
        raw_message: Option<String>,
    },

    /// The vendor could not be reached or answered with a server error
    /// (network failure, timeout, or HTTP 5xx).
    VendorUnavailable {
        /// Marketplace that produced the error.
        market: String,
        /// Error details.
        detail: String,
    },

    /// The vendor payload did not have the expected shape during
    /// canonicalization (missing fields, unparseable JSON, unknown status).
    MappingError {
        /// Marketplace that produced the error.
        market: String,
        /// Details about what failed to map.
        detail: String,
    },

    /// The credential belongs to a marketplace with no adapter implementation.
    UnsupportedMarket {
        /// Marketplace identifier.
        market: String,
    },

    /// An unrecognized error from the vendor API.
    ///
    /// Catch-all for vendor error codes not yet mapped to a specific variant.
    Unknown {
        /// Marketplace that produced the error.
        market: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl MarketError {
    /// Whether the error is expected behavior the user can remediate
    /// (bad keys, unlisted IP, missing field), used for log levelling.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. }
                | Self::AuthFailure { .. }
                | Self::AccessDenied { .. }
                | Self::UnsupportedMarket { .. }
        )
    }
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential { market, field } => {
                write!(f, "[{market}] Missing credential field: {field}")
            }
            Self::AuthFailure {
                market,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{market}] Authentication failed: {msg}")
                } else {
                    write!(f, "[{market}] Authentication failed")
                }
            }
            Self::AccessDenied {
                market,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{market}] Access denied (check vendor IP allowlist): {msg}")
                } else {
                    write!(f, "[{market}] Access denied (check vendor IP allowlist)")
                }
            }
            Self::RateLimited {
                market,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{market}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{market}] Rate limited")
                }
            }
            Self::VendorUnavailable { market, detail } => {
                write!(f, "[{market}] Vendor unavailable: {detail}")
            }
            Self::MappingError { market, detail } => {
                write!(f, "[{market}] Unexpected vendor payload: {detail}")
            }
            Self::UnsupportedMarket { market } => {
                write!(f, "[{market}] No adapter implemented for this marketplace")
            }
            Self::Unknown {
                market,
                raw_message,
                ..
            } => {
                write!(f, "[{market}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for MarketError {}

/// Convenience type alias for `Result<T, MarketError>`.
pub type Result<T> = std::result::Result<T, MarketError>;
