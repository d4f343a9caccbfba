//! Naver HTTP request methods

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, MarketErrorMapper, RawApiError};

use super::types::NaverErrorBody;
use super::{NAVER_API_HOST, NaverMarket};

impl NaverMarket {
    /// Bearer-authenticated GET.
    pub(crate) async fn authed_get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("https://{NAVER_API_HOST}{path}");
        let request = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .header("Content-Type", "application/json");

        let (status, response_text) =
            HttpUtils::execute_request(request, self.market_name(), "GET", path).await?;
        self.handle_response(status, &response_text)
    }

    /// Bearer-authenticated POST with a JSON body.
    pub(crate) async fn authed_post<T: DeserializeOwned, B: Serialize>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("https://{NAVER_API_HOST}{path}");
        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .json(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.market_name(), "POST", path).await?;
        self.handle_response(status, &response_text)
    }

    /// Non-2xx statuses that slipped past the uniform classification carry
    /// a `code`/`message` error body; map those through the vendor table.
    fn handle_response<T: DeserializeOwned>(&self, status: u16, response_text: &str) -> Result<T> {
        if !(200..300).contains(&status) {
            let body: NaverErrorBody =
                serde_json::from_str(response_text).unwrap_or(NaverErrorBody {
                    code: None,
                    message: None,
                });
            let message = body
                .message
                .unwrap_or_else(|| format!("HTTP {status}: {response_text}"));
            let raw = match body.code {
                Some(code) => RawApiError::with_code(code, message),
                None => RawApiError::new(message),
            };
            log::error!(
                "[{}] API error: {:?} - {}",
                self.market_name(),
                raw.code,
                raw.message
            );
            return Err(self.map_error(raw, ErrorContext::default()));
        }

        HttpUtils::parse_json(response_text, self.market_name())
    }
}
