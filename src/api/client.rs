//! HTTP client for the Deck board service
//!
//! Thin JSON-over-HTTP plumbing: the service owns creation semantics,
//! persistence and retries are out of scope here.

use crate::config::TuiConfig;
use crate::state::Board;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use super::traits::BoardApi;

/// Default board service address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:7175";

/// Errors returned by the board service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("board service returned {status}: {message}")]
    Server { status: u16, message: String },
}

#[derive(Serialize)]
struct CreateBoardRequest<'a> {
    name: &'a str,
}

/// Client for the Deck board service HTTP API
pub struct ApiClient {
    http: reqwest::Client,
    address: String,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// Address resolution order: `DECK_API_ADDRESS` env var, then the config
    /// file, then the default local address.
    pub fn new(config: &TuiConfig) -> Self {
        let address = std::env::var("DECK_API_ADDRESS")
            .ok()
            .or_else(|| config.api_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Self {
            http: reqwest::Client::new(),
            address,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.address.trim_end_matches('/'), path)
    }

    /// Map a non-2xx response to an [`ApiError`], consuming the body as the
    /// error message.
    async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

#[async_trait]
impl BoardApi for ApiClient {
    async fn check_connection(&self) -> bool {
        match self.http.get(self.endpoint("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn list_boards(&mut self) -> Result<Vec<Board>> {
        let response = self.http.get(self.endpoint("/boards")).send().await?;
        let response = Self::error_for_status(response).await?;
        let boards = response.json::<Vec<Board>>().await?;
        Ok(boards)
    }

    async fn create_board(&mut self, name: &str) -> Result<Board> {
        let response = self
            .http
            .post(self.endpoint("/boards"))
            .json(&CreateBoardRequest { name })
            .send()
            .await?;
        let response = Self::error_for_status(response).await?;
        let board = response.json::<Board>().await?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let client = ApiClient {
            http: reqwest::Client::new(),
            address: "http://localhost:7175".to_string(),
        };
        assert_eq!(client.endpoint("/boards"), "http://localhost:7175/boards");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = ApiClient {
            http: reqwest::Client::new(),
            address: "http://localhost:7175/".to_string(),
        };
        assert_eq!(client.endpoint("/health"), "http://localhost:7175/health");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Server {
            status: 422,
            message: "name must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "board service returned 422: name must not be empty"
        );
    }

    #[test]
    fn test_create_board_request_serializes_name() {
        let json = serde_json::to_string(&CreateBoardRequest { name: "Groceries" }).unwrap();
        assert_eq!(json, r#"{"name":"Groceries"}"#);
    }
}
