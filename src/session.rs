//! Search session orchestration.
//!
//! Holds the current search inputs (free text, filters, sort, page),
//! issues requests through a [`SearchBackend`], and exposes the results as
//! an explicit finite state plus derived pagination data. All outputs are
//! plain values a rendering layer can consume directly.

use std::sync::Arc;

use crate::client::SearchBackend;
use crate::error::Result;
use crate::pagination::{self, PageLabel, PaginationWindow, MAX_VISIBLE_PAGES, RESULT_CAP};
use crate::query::{build_query, SearchFilters};
use crate::types::{PageRequest, Repository, SearchRequest, SearchResponse, SortSpec};

/// Lifecycle of one search intent: `Idle → Loading → Success | Error`.
/// Any input change starts a new cycle from `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Success {
        repositories: Vec<Repository>,
        total_count: u64,
    },
    Error {
        message: String,
    },
}

impl SearchState {
    /// Total matches of the last completed search, if any.
    pub fn total_count(&self) -> Option<u64> {
        match self {
            SearchState::Success { total_count, .. } => Some(*total_count),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}

/// Handle for an in-flight request. Completing a pending search whose
/// generation has been superseded is a no-op, so a stale response can
/// never overwrite the state of a newer request.
#[derive(Debug)]
pub struct PendingSearch {
    generation: u64,
    pub request: SearchRequest,
}

/// Orchestrates query composition, request issue, and result state for one
/// search surface.
#[derive(Debug)]
pub struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    free_text: String,
    filters: SearchFilters,
    sort: SortSpec,
    page: PageRequest,
    state: SearchState,
    generation: u64,
    last_request: Option<SearchRequest>,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        SearchSession {
            backend,
            free_text: String::new(),
            filters: SearchFilters::default(),
            sort: SortSpec::default(),
            page: PageRequest::default(),
            state: SearchState::Idle,
            generation: 0,
            last_request: None,
        }
    }

    /// Like [`new`](Self::new) but with a fixed page size other than the
    /// default. The size is validated once here and stays constant for the
    /// session's lifetime.
    pub fn with_page_size(backend: Arc<dyn SearchBackend>, per_page: u32) -> Result<Self> {
        let mut session = SearchSession::new(backend);
        session.page = PageRequest::new(1, per_page)?;
        Ok(session)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn current_page(&self) -> u32 {
        self.page.page
    }

    pub fn set_query(&mut self, free_text: impl Into<String>) {
        self.free_text = free_text.into();
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    /// Drop all filters and jump back to the first page.
    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
        self.page.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Jump to a specific page. Fails on page 0 rather than clamping.
    pub fn set_page(&mut self, page: u32) -> Result<()> {
        self.page = PageRequest::new(page, self.page.per_page)?;
        Ok(())
    }

    /// Handle a page-selector click. Ellipsis entries and the current page
    /// are no-ops; returns whether the page actually changed.
    pub fn select(&mut self, label: PageLabel) -> bool {
        match label {
            PageLabel::Page(page) if page != 0 && page != self.page.page => {
                self.page.page = page;
                true
            }
            _ => false,
        }
    }

    /// Advance one page, bounded by the last page of the current results.
    pub fn next_page(&mut self) -> Result<bool> {
        let window = self.window()?;
        if self.page.page < window.total_pages {
            self.page.page += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Step back one page; a no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page.page > 1 {
            self.page.page -= 1;
            true
        } else {
            false
        }
    }

    /// The request the current inputs compose to.
    pub fn compose_request(&self) -> SearchRequest {
        SearchRequest {
            q: build_query(&self.free_text, &self.filters),
            sort: self.sort,
            page: self.page,
        }
    }

    /// Start a search cycle: flip to `Loading`, bump the generation, and
    /// hand back the request to execute. Starting a newer cycle before the
    /// older one completes supersedes it.
    pub fn begin(&mut self) -> PendingSearch {
        let request = self.compose_request();
        self.begin_with(request)
    }

    fn begin_with(&mut self, request: SearchRequest) -> PendingSearch {
        self.generation += 1;
        self.state = SearchState::Loading;
        self.last_request = Some(request.clone());
        tracing::debug!(generation = self.generation, q = %request.q, "search started");
        PendingSearch {
            generation: self.generation,
            request,
        }
    }

    /// Apply the outcome of a pending search. Stale completions (a newer
    /// cycle has started since) are dropped.
    pub fn complete(&mut self, pending: PendingSearch, outcome: Result<SearchResponse>) {
        if pending.generation != self.generation {
            tracing::debug!(
                stale = pending.generation,
                current = self.generation,
                "dropping superseded search response"
            );
            return;
        }
        self.state = match outcome {
            Ok(response) => {
                tracing::debug!(total = response.total_count, "search succeeded");
                SearchState::Success {
                    repositories: response.items,
                    total_count: response.total_count,
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "search failed");
                SearchState::Error {
                    message: err.to_string(),
                }
            }
        };
    }

    /// Run one full search cycle against the backend.
    pub async fn search(&mut self) -> &SearchState {
        let pending = self.begin();
        let outcome = self.backend.search_repositories(&pending.request).await;
        self.complete(pending, outcome);
        &self.state
    }

    /// Re-issue the previous request unchanged (explicit retry after a
    /// failure). Falls back to a fresh search when nothing was issued yet.
    pub async fn retry_last(&mut self) -> &SearchState {
        let pending = match self.last_request.clone() {
            Some(request) => self.begin_with(request),
            None => self.begin(),
        };
        let outcome = self.backend.search_repositories(&pending.request).await;
        self.complete(pending, outcome);
        &self.state
    }

    /// Pagination window for the current state, recomputed on demand.
    pub fn window(&self) -> Result<PaginationWindow> {
        pagination::compute_window(
            self.state.total_count(),
            self.page.page,
            self.page.per_page,
            RESULT_CAP,
        )
    }

    /// Page-selector labels for the current state.
    pub fn page_labels(&self) -> Result<Vec<PageLabel>> {
        let window = self.window()?;
        Ok(pagination::page_labels(
            self.page.page,
            window.total_pages,
            MAX_VISIBLE_PAGES,
        ))
    }
}
