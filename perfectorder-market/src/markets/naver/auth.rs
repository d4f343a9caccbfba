//! Naver OAuth2 client-credentials token exchange
//!
//! The commerce API uses short-lived bearer tokens. A fresh token is
//! exchanged per sync pass; nothing is cached, so a revoked application key
//! fails the very next pass instead of lingering until expiry.

use crate::error::{MarketError, Result};
use crate::http_client::HttpUtils;
use crate::traits::MarketErrorMapper;

use super::{NAVER_API_HOST, NaverMarket, NaverTokenResponse, TOKEN_PATH};

impl NaverMarket {
    /// Exchange the application credentials for a bearer token.
    pub(crate) async fn fetch_token(&self) -> Result<String> {
        let url = format!("https://{NAVER_API_HOST}{TOKEN_PATH}");
        let request = self.client.post(&url).form(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("type", "SELF"),
        ]);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.market_name(), "POST", TOKEN_PATH).await?;

        // The token endpoint answers bad application keys with 400 rather
        // than 401, so a non-2xx here is always an auth problem.
        if !(200..300).contains(&status) {
            log::warn!(
                "[{}] Token exchange rejected (HTTP {status})",
                self.market_name()
            );
            return Err(MarketError::AuthFailure {
                market: self.market_name().to_string(),
                raw_message: Some(format!("HTTP {status}: {response_text}")),
            });
        }

        let token: NaverTokenResponse =
            HttpUtils::parse_json(&response_text, self.market_name())?;

        match token.access_token {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(MarketError::AuthFailure {
                market: self.market_name().to_string(),
                raw_message: Some("Token response missing access_token".to_string()),
            }),
        }
    }
}
