//! Generic HTTP client tools
//!
//! Provide reusable HTTP request processing logic to reduce duplicate code
//! for each marketplace adapter. Each adapter retains full signature/auth
//! flexibility and constructs `RequestBuilder` by itself.
//!
//! # design principles
//! - **Does not enforce unified auth logic** - Coupang signs per request,
//!   Naver exchanges an OAuth token; both are adapter concerns
//! - **Unified and universal HTTP processing flow** - sending requests,
//!   logging, and status classification
//! - **Single-shot execution** - requests are never retried here; a failed
//!   fetch surfaces in the sync report and the caller re-triggers manually

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::MarketError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// Unified processing: sending requests, logging, uniform status
    /// classification. Auth-relevant statuses are mapped here so every
    /// adapter reports the same taxonomy:
    ///
    /// * transport error / timeout -> `VendorUnavailable`
    /// * 401 -> `AuthFailure`
    /// * 403 -> `AccessDenied`
    /// * 429 -> `RateLimited` (with `Retry-After` when present)
    /// * 5xx -> `VendorUnavailable`
    ///
    /// Any other status is returned as `Ok((status, body))` for the adapter
    /// to interpret against the vendor's response envelope.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `market_name` - marketplace name (for logging and error prefixes)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_or_action` - URL or action name (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        market_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), MarketError> {
        log::debug!("[{market_name}] {method_name} {url_or_action}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| MarketError::VendorUnavailable {
                market: market_name.to_string(),
                detail: if e.is_timeout() {
                    format!("Request timed out: {e}")
                } else {
                    e.to_string()
                },
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[{market_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        match status_code {
            401 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{market_name}] Authentication rejected (HTTP 401)");
                return Err(MarketError::AuthFailure {
                    market: market_name.to_string(),
                    raw_message: non_empty(body),
                });
            }
            403 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{market_name}] Access denied (HTTP 403)");
                return Err(MarketError::AccessDenied {
                    market: market_name.to_string(),
                    raw_message: non_empty(body),
                });
            }
            429 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{market_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
                return Err(MarketError::RateLimited {
                    market: market_name.to_string(),
                    retry_after,
                    raw_message: non_empty(body),
                });
            }
            500..=599 => {
                let body = response.text().await.unwrap_or_default();
                log::warn!("[{market_name}] Server error (HTTP {status_code})");
                return Err(MarketError::VendorUnavailable {
                    market: market_name.to_string(),
                    detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
                });
            }
            _ => {}
        }

        let response_text =
            response
                .text()
                .await
                .map_err(|e| MarketError::VendorUnavailable {
                    market: market_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                })?;

        log::debug!(
            "[{market_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Arguments
    /// * `response_text` - JSON text
    /// * `market_name` - marketplace name (used for error messages)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(MarketError::MappingError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, market_name: &str) -> Result<T, MarketError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{market_name}] JSON parse failed: {e}");
            log::error!(
                "[{market_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            MarketError::MappingError {
                market: market_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}
