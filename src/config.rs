use crate::error::{ExplorerError, Result};

/// Default public API endpoint for repository search.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search API (e.g. `https://api.github.com`).
    pub api_url: String,
    /// API token for authenticated requests. Anonymous requests work but
    /// are rate limited much more aggressively by the search endpoint.
    pub token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `GITHUB_API_URL` — optional base URL override (GitHub Enterprise
    ///   or a proxy); defaults to the public API.
    /// - `GITHUB_TOKEN` — optional bearer token.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // ignore missing .env

        let api_url = match std::env::var("GITHUB_API_URL") {
            Ok(raw) => {
                let trimmed = raw.trim_end_matches('/').to_string();
                url::Url::parse(&trimmed).map_err(|e| {
                    ExplorerError::InvalidArgument(format!(
                        "GITHUB_API_URL is not a valid URL: {e}"
                    ))
                })?;
                trimmed
            }
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Ok(Config { api_url, token })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.token.is_none());
    }
}
