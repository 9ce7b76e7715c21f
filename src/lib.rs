//! Client-side repository search over the GitHub REST search API.
//!
//! The two load-bearing pieces are pure and stateless: [`query`] composes
//! the qualifier string the endpoint accepts, and [`pagination`] turns a
//! total match count into a display window and an ellipsis-compressed page
//! selector, honoring the service's 1000-result cap. Around them,
//! [`session`] drives requests through a [`client::SearchBackend`] and
//! exposes results as an explicit `idle → loading → success | error` state
//! machine, with stale in-flight responses superseded rather than applied.
//!
//! Everything this crate produces is plain data; rendering, layout, and
//! input widgets belong to the consumer.

pub mod catalog;
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod pagination;
pub mod query;
pub mod render;
pub mod session;
pub mod types;

pub use client::{GitHubClient, SearchBackend};
pub use config::Config;
pub use debounce::{Debouncer, DEBOUNCE_DELAY};
pub use error::{ExplorerError, Result};
pub use pagination::{
    compute_window, page_labels, PageLabel, PaginationWindow, MAX_VISIBLE_PAGES, RESULT_CAP,
};
pub use query::{build_query, SearchFilters, DEFAULT_QUERY, LICENSE_ANY};
pub use session::{PendingSearch, SearchSession, SearchState};
pub use types::{
    LicenseInfo, PageRequest, RepoLicense, RepoOwner, Repository, SearchRequest, SearchResponse,
    SortField, SortOrder, SortSpec, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
