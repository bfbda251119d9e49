//! Directory service HTTP client (reqwest-based).

use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::criteria::CriteriaFilter;
use crate::error::{DirectoryError, DirectoryResult};
use crate::person::{PersonRecord, ATTR_EMAIL, ATTR_NAME};

/// Canonical record set for a run: email (unique key) to display name.
pub type MembershipIndex = HashMap<String, String>;

/// Default request timeout for directory calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Attribute-query request body.
#[derive(Debug, Serialize)]
struct AttributeQuery<'a> {
    attributes: &'a [&'a str],
    criteria: &'a CriteriaFilter,
}

/// HTTP client for the membership directory.
///
/// Wraps `reqwest::Client` with the directory's attribute-query operation
/// and bearer-token authentication.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    /// Base URL of the directory service.
    base_url: String,
    /// API key sent as a bearer token.
    api_key: String,
    /// Underlying HTTP client.
    http_client: Client,
}

impl DirectoryClient {
    /// Create a new directory client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> DirectoryResult<Self> {
        let http_client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent("rostersync/0.1")
            .build()
            .map_err(|e| {
                DirectoryError::InvalidConfig(format!("failed to build HTTP client: {e}"))
            })?;

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

    /// Query the directory for people matching `criteria` and reduce the
    /// result to an email-keyed membership index.
    ///
    /// A "not found" response means no entries matched the criteria; that is
    /// not an error, the index is simply empty. Records that cannot be
    /// normalized (missing counterpart attribute, non-string value) are
    /// skipped with a warning. When two records share an email the later
    /// one wins.
    pub async fn fetch_membership(
        &self,
        criteria: &CriteriaFilter,
    ) -> DirectoryResult<MembershipIndex> {
        let people = match self.query_attributes(&[ATTR_EMAIL, ATTR_NAME], criteria).await {
            Ok(people) => people,
            Err(DirectoryError::QueryFailed { status, .. })
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                debug!("directory found no entries for the given criteria");
                return Ok(MembershipIndex::new());
            }
            Err(e) => return Err(e),
        };

        let mut index = MembershipIndex::new();
        for person in &people {
            match person.member_entry() {
                Ok((email, name)) => {
                    index.insert(email, name);
                }
                Err(e) => warn!(error = %e, "skipping person record"),
            }
        }

        Ok(index)
    }

    /// Issue one attribute query (POST /people/attributes).
    ///
    /// Returns the raw person records; callers decide what a "not found"
    /// status means for them.
    pub async fn query_attributes(
        &self,
        attributes: &[&str],
        criteria: &CriteriaFilter,
    ) -> DirectoryResult<Vec<PersonRecord>> {
        let url = format!("{}/people/attributes", self.base_url);
        debug!(%url, ?attributes, "directory attribute query");

        let body = AttributeQuery {
            attributes,
            criteria,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(DirectoryError::QueryFailed {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            DirectoryError::Parse(format!("failed to parse attribute query response: {e}"))
        })
    }
}
