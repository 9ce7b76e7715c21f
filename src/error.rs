/// All error types produced by the repo-explorer library.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Authentication failed — check GITHUB_TOKEN")]
    Auth,

    #[error("Search rate limit exceeded; wait a moment or set GITHUB_TOKEN")]
    RateLimited,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
