//! Feedback-board HTTP client (reqwest-based).

use reqwest::header;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{BoardError, BoardResult};
use crate::models::{BoardUser, NewUser};

/// Path of the board's user collection, used for both listing and creation.
const USERS_PATH: &str = "/api/v1/users";

/// Default request timeout for board calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the feedback board's user API.
///
/// Wraps `reqwest::Client` with bearer-token authentication and the two
/// operations the reconciliation consumes: list users, create user.
#[derive(Debug, Clone)]
pub struct BoardClient {
    /// Base URL of the board.
    base_url: String,
    /// API key sent as a bearer token.
    api_key: String,
    /// Underlying HTTP client.
    http_client: Client,
}

impl BoardClient {
    /// Create a new board client.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> BoardResult<Self> {
        let http_client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent("rostersync/0.1")
            .build()
            .map_err(|e| BoardError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(base_url, api_key, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http_client: Client,
    ) -> Self {
        // Normalize base URL: strip trailing slash.
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
            http_client,
        }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the board's users (GET /api/v1/users).
    ///
    /// A non-success status is a [`BoardError::Api`] carrying the raw body;
    /// a success status with an undecodable body is a [`BoardError::Parse`].
    pub async fn list_users(&self) -> BoardResult<Vec<BoardUser>> {
        let url = format!("{}{}", self.base_url, USERS_PATH);
        debug!(%url, "board user listing");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BoardError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BoardError::Parse(format!("failed to parse user listing: {e}")))
    }

    /// Create one user on the board (POST /api/v1/users).
    ///
    /// Success carries no payload of interest; any non-success status is
    /// fatal to the caller's run.
    pub async fn create_user(&self, user: &NewUser) -> BoardResult<()> {
        let url = format!("{}{}", self.base_url, USERS_PATH);
        debug!(%url, name = %user.name, email = %user.email, "board user creation");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(user)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(BoardError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
