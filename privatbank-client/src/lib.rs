//! # PrivatBank Client
//!
//! A typed Rust client for the PrivatBank archive exchange rates API,
//! and the [`RateSource`] adapter the aggregator fetches through.

use rates_types::{DateKey, RateSource, RawRateDocument, SourceError};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Public API root.
pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua/p24api";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => SourceError::Transport(e.to_string()),
            ClientError::Api { status, message } => SourceError::Status { status, message },
            ClientError::Json(e) => SourceError::Decode(e.to_string()),
        }
    }
}

/// PrivatBank API client.
///
/// Holds one connection pool for its whole lifetime; every request made
/// through the same client value shares it.
pub struct PrivatBankClient {
    base_url: String,
    http: Client,
}

impl Default for PrivatBankClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PrivatBankClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets the archived exchange rates for one date.
    pub async fn exchange_rates(&self, date: &DateKey) -> Result<RawRateDocument, ClientError> {
        self.get(&format!("/exchange_rates?json&date={}", date)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}

/// Pulls `error` or `message` out of a JSON error body, else returns the body.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["error", "message"]
                .iter()
                .find_map(|field| v.get(*field).and_then(|e| e.as_str()).map(String::from))
        })
        .unwrap_or(body)
}

#[async_trait::async_trait]
impl RateSource for PrivatBankClient {
    async fn fetch_rates(&self, date: &DateKey) -> Result<RawRateDocument, SourceError> {
        self.exchange_rates(date).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PrivatBankClient::new("http://localhost:3000");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = PrivatBankClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_default_targets_public_api() {
        assert_eq!(PrivatBankClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"error": "date is in the future"}"#.to_string()),
            "date is in the future"
        );
        assert_eq!(
            error_message(r#"{"message": "rate limited"}"#.to_string()),
            "rate limited"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(
            error_message("Bad Gateway".to_string()),
            "Bad Gateway"
        );
        assert_eq!(error_message(r#"{"code": 7}"#.to_string()), r#"{"code": 7}"#);
    }

    #[test]
    fn test_client_error_maps_to_source_error() {
        let api = ClientError::Api {
            status: 503,
            message: "maintenance".into(),
        };
        assert!(matches!(
            SourceError::from(api),
            SourceError::Status { status: 503, .. }
        ));

        let json = serde_json::from_str::<RawRateDocument>("{}").unwrap_err();
        assert!(matches!(
            SourceError::from(ClientError::Json(json)),
            SourceError::Decode(_)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = PrivatBankClient::new("http://127.0.0.1:1");
        let date: DateKey = "10.03.2024".parse().unwrap();

        let result = client.fetch_rates(&date).await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
