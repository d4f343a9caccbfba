//! Coupang HTTP request methods

use serde::de::DeserializeOwned;

use crate::error::{MarketError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, MarketErrorMapper, RawApiError};

use super::{COUPANG_API_HOST, CoupangMarket, CoupangResponse};

impl CoupangMarket {
    /// Execute a signed GET against the Coupang gateway.
    ///
    /// The query string is encoded first because the CEA signature covers
    /// the exact bytes that go on the wire.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let query_string = encode_query(query);

        // 1. Sign (fresh signed-date per call)
        let authorization = self.sign("GET", path, &query_string);

        // 2. Send request
        let url = if query_string.is_empty() {
            format!("https://{COUPANG_API_HOST}{path}")
        } else {
            format!("https://{COUPANG_API_HOST}{path}?{query_string}")
        };
        let request = self
            .client
            .get(&url)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json;charset=UTF-8")
            .header("X-Requested-By", &self.vendor_id);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.market_name(), "GET", path).await?;

        // 3. Parse envelope
        let envelope: CoupangResponse<T> =
            HttpUtils::parse_json(&response_text, self.market_name())?;

        // 4. Handle vendor-reported errors
        if !(200..300).contains(&status) || !envelope.is_success() {
            return Err(self.envelope_error(status, envelope, ctx));
        }

        // 5. Extract data
        envelope
            .data
            .ok_or_else(|| self.mapping_error("Missing data in response"))
    }

    /// Map a non-success envelope through the vendor error table.
    ///
    /// The code is read before the message is consumed; with no message the
    /// HTTP status stands in.
    fn envelope_error<T>(
        &self,
        status: u16,
        envelope: CoupangResponse<T>,
        ctx: ErrorContext,
    ) -> MarketError {
        let code = envelope.code_str();
        let message = envelope.message.unwrap_or_else(|| format!("HTTP {status}"));
        let raw = match code {
            Some(code) => RawApiError::with_code(code, message),
            None => RawApiError::new(message),
        };
        log::error!(
            "[{}] API error: {:?} - {}",
            self.market_name(),
            raw.code,
            raw.message
        );
        self.map_error(raw, ctx)
    }
}

/// Percent-encode and join query parameters, preserving order.
fn encode_query(query: &[(&str, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_query_joins_pairs() {
        let q = encode_query(&[
            ("createdAtFrom", "2024-01-15".to_string()),
            ("status", "ACCEPT".to_string()),
        ]);
        assert_eq!(q, "createdAtFrom=2024-01-15&status=ACCEPT");
    }

    #[test]
    fn encode_query_escapes_reserved_characters() {
        let q = encode_query(&[("q", "a b&c".to_string())]);
        assert_eq!(q, "q=a%20b%26c");
    }

    #[test]
    fn encode_query_empty() {
        assert_eq!(encode_query(&[]), "");
    }

    fn market() -> CoupangMarket {
        let res = CoupangMarket::new(
            "A00123456".to_string(),
            "ak".to_string(),
            "sk".to_string(),
        );
        let Ok(m) = res else {
            panic!("failed to build test market");
        };
        m
    }

    #[test]
    fn envelope_error_maps_vendor_code() {
        let m = market();
        let res: serde_json::Result<CoupangResponse<()>> =
            serde_json::from_str(r#"{"code":"401","message":"unauthorized"}"#);
        let Ok(envelope) = res else {
            panic!("failed to parse envelope");
        };
        let err = m.envelope_error(401, envelope, ErrorContext::default());
        assert!(
            matches!(err, MarketError::AuthFailure { .. }),
            "expected AuthFailure, got {err:?}"
        );
    }

    #[test]
    fn envelope_error_without_body_uses_http_status() {
        let m = market();
        let res: serde_json::Result<CoupangResponse<()>> =
            serde_json::from_str("{}");
        let Ok(envelope) = res else {
            panic!("failed to parse envelope");
        };
        let err = m.envelope_error(500, envelope, ErrorContext::default());
        assert!(
            matches!(
                &err,
                MarketError::Unknown { raw_message, .. } if raw_message == "HTTP 500"
            ),
            "expected Unknown with HTTP status message, got {err:?}"
        );
    }
}
