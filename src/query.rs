//! Search query composition.
//!
//! Turns free text plus structured filters into the qualifier syntax the
//! repository search endpoint accepts (`react language:Go stars:>=100`).
//! Values are passed through verbatim — the endpoint's query language does
//! its own tokenization and quoting is the caller's concern.

/// Fallback clause used when the search term is empty. The endpoint
/// rejects an empty `q`, and "any repository with more than one star" is
/// the conventional match-everything query.
pub const DEFAULT_QUERY: &str = "stars:>1";

/// Sentinel license choice meaning "do not filter by license". Filter
/// pickers expose it as a selectable entry; it must never reach the query
/// string.
pub const LICENSE_ANY: &str = "All";

/// Structured filter set applied on top of the free-text term.
///
/// Immutable per request: build one, pass it to [`build_query`], and build
/// a new one when the user edits a filter. An inverted star range
/// (`min > max`) is passed through unchanged; the upstream service decides
/// what an impossible range returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Exact language qualifier, e.g. `Rust`.
    pub language: Option<String>,
    /// Lower bound on stars (inclusive).
    pub stars_min: Option<u64>,
    /// Upper bound on stars (inclusive).
    pub stars_max: Option<u64>,
    /// SPDX license identifier, or [`LICENSE_ANY`] for no restriction.
    pub license: Option<String>,
}

impl SearchFilters {
    /// True when no filter would contribute a qualifier.
    pub fn is_empty(&self) -> bool {
        self.effective_language().is_none()
            && self.stars_min.is_none()
            && self.stars_max.is_none()
            && self.effective_license().is_none()
    }

    fn effective_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    fn effective_license(&self) -> Option<&str> {
        self.license
            .as_deref()
            .filter(|l| !l.is_empty() && *l != LICENSE_ANY)
    }
}

/// Compose the query string for the search endpoint.
///
/// Qualifiers are appended in a fixed order — language, minimum stars,
/// maximum stars, license — so identical inputs always produce an
/// identical string.
pub fn build_query(free_text: &str, filters: &SearchFilters) -> String {
    let term = free_text.trim();
    let mut query = if term.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        term.to_string()
    };

    if let Some(language) = filters.effective_language() {
        query.push_str(&format!(" language:{language}"));
    }
    if let Some(min) = filters.stars_min {
        query.push_str(&format!(" stars:>={min}"));
    }
    if let Some(max) = filters.stars_max {
        query.push_str(&format!(" stars:<={max}"));
    }
    if let Some(license) = filters.effective_license() {
        query.push_str(&format!(" license:{license}"));
    }

    query
}
