use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::catalog;
use crate::config::Config;
use crate::error::{ExplorerError, Result};
use crate::types::{LicenseInfo, SearchRequest, SearchResponse};

/// Trait abstracting the search service behind the session.
///
/// Object-safe so the session can hold a boxed backend; tests substitute a
/// scripted implementation.
#[async_trait]
pub trait SearchBackend: Send + Sync + std::fmt::Debug {
    /// Run one repository search request.
    async fn search_repositories(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Fetch the license catalog for filter pickers.
    async fn list_licenses(&self) -> Result<Vec<LicenseInfo>>;
}

/// HTTP client for the GitHub REST search API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_api: String,
}

impl GitHubClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = &config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| ExplorerError::Api(format!("Invalid token header: {e}")))?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("repo-explorer")
            .build()
            .map_err(|e| ExplorerError::Api(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_api: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_api, path)
    }

    /// Send a GET request with query parameters and deserialize the JSON
    /// response.
    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        self.handle_response(resp).await
    }

    /// Handle a response: check status, deserialize JSON.
    async fn handle_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ExplorerError::Auth);
        }
        // The search endpoint reports quota exhaustion with 403 as well
        // as 429.
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(ExplorerError::RateLimited);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            let url = resp.url().to_string();
            return Err(ExplorerError::NotFound(url));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            // Error bodies carry a human-readable `message` field; fall
            // back to the raw body when they don't parse.
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(ExplorerError::Api(format!("HTTP {status}: {detail}")));
        }
        let body = resp.json::<T>().await?;
        Ok(body)
    }
}

#[async_trait]
impl SearchBackend for GitHubClient {
    async fn search_repositories(&self, request: &SearchRequest) -> Result<SearchResponse> {
        tracing::debug!(q = %request.q, page = request.page.page, "issuing repository search");
        let response: SearchResponse = self
            .get_with_query("/search/repositories", &request.to_query())
            .await?;
        tracing::debug!(
            total = response.total_count,
            returned = response.items.len(),
            "search response received"
        );
        Ok(response)
    }

    async fn list_licenses(&self) -> Result<Vec<LicenseInfo>> {
        match self.get_with_query("/licenses", &[]).await {
            Ok(licenses) => Ok(licenses),
            Err(err) => {
                tracing::warn!(error = %err, "license catalog fetch failed, using fallback list");
                Ok(catalog::fallback_licenses())
            }
        }
    }
}
