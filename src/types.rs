use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};

/// Hard upstream cap on items per page.
pub const MAX_PER_PAGE: u32 = 100;

/// Items per page used when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Sort field accepted by the repository search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Stars,
    Forks,
    Updated,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Stars => "stars",
            SortField::Forks => "forks",
            SortField::Updated => "updated",
        }
    }
}

/// Sort direction accepted by the repository search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort field + direction pair. Defaults to most-starred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            field: SortField::Stars,
            order: SortOrder::Desc,
        }
    }
}

/// Validated pagination parameters. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Create a page request, rejecting values the upstream API would not
    /// accept rather than silently clamping them.
    pub fn new(page: u32, per_page: u32) -> Result<Self> {
        if page == 0 {
            return Err(ExplorerError::InvalidArgument(
                "page must be at least 1".to_string(),
            ));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ExplorerError::InvalidArgument(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }
        Ok(PageRequest { page, per_page })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// A fully composed search request: the query string plus sort and paging.
///
/// Every parameter is always emitted so the request is self-describing —
/// the upstream defaults (`sort=stars`, `order=desc`, `page=1`,
/// `per_page=10`) are made explicit instead of relied upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub q: String,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl SearchRequest {
    /// Render as query parameters for the HTTP layer.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("sort", self.sort.field.as_str().to_string()),
            ("order", self.sort.order.as_str().to_string()),
            ("page", self.page.page.to_string()),
            ("per_page", self.page.per_page.to_string()),
        ]
    }
}

/// Repository owner as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: Option<String>,
}

/// License attached to a repository search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoLicense {
    pub name: String,
    pub spdx_id: Option<String>,
}

impl RepoLicense {
    /// Short display label: the SPDX id when present, the full name otherwise.
    pub fn label(&self) -> &str {
        match self.spdx_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }
}

/// A single repository search result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub owner: Option<RepoOwner>,
    pub license: Option<RepoLicense>,
}

/// Response body of `GET /search/repositories`.
///
/// `total_count` reports true matches; the service only paginates through
/// the first 1000 of them regardless.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

/// An entry from the license catalog endpoint, used to populate filter
/// choices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseInfo {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
}
