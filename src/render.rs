//! Plain-text rendering of search results.
//!
//! Produces display strings any UI layer can consume verbatim — a TUI, a
//! chat surface, a log line. Layout and styling stay with the consumer.

use crate::format::{format_number, format_relative_time, truncate_text};
use crate::pagination::PaginationWindow;
use crate::types::{Repository, SearchResponse};

/// Longest description rendered before truncation.
const DESCRIPTION_LIMIT: usize = 160;

/// At most this many topics are listed per repository.
const TOPIC_LIMIT: usize = 5;

/// Format a single repository as readable key/value lines.
pub fn repo_summary(repo: &Repository) -> String {
    let mut parts = Vec::new();

    parts.push(format!("## {}", repo.full_name));

    if let Some(desc) = &repo.description {
        if !desc.is_empty() {
            parts.push(format!(
                "**Description:** {}",
                truncate_text(desc, DESCRIPTION_LIMIT)
            ));
        }
    }

    if let Some(language) = &repo.language {
        if !language.is_empty() {
            parts.push(format!("**Language:** {language}"));
        }
    }

    parts.push(format!(
        "**Stars:** {} | **Forks:** {}",
        format_number(repo.stargazers_count),
        format_number(repo.forks_count)
    ));

    if let Some(license) = &repo.license {
        parts.push(format!("**License:** {}", license.label()));
    }

    if !repo.topics.is_empty() {
        let shown: Vec<&str> = repo
            .topics
            .iter()
            .take(TOPIC_LIMIT)
            .map(String::as_str)
            .collect();
        let extra = repo.topics.len().saturating_sub(TOPIC_LIMIT);
        let suffix = if extra > 0 {
            format!(" (+{extra} more)")
        } else {
            String::new()
        };
        parts.push(format!("**Topics:** {}{suffix}", shown.join(", ")));
    }

    parts.push(format!(
        "**Updated:** {}",
        format_relative_time(repo.updated_at)
    ));
    parts.push(repo.html_url.clone());

    parts.join("\n")
}

/// `Showing 21-30 of 250`, or empty when there is nothing to paginate.
pub fn window_summary(window: &PaginationWindow) -> String {
    if window.is_empty() {
        return String::new();
    }
    format!(
        "Showing {}-{} of {}",
        window.start_item, window.end_item, window.total_items
    )
}

/// Format a whole result page: window header plus one summary per item.
pub fn results_summary(response: &SearchResponse, window: &PaginationWindow) -> String {
    if response.items.is_empty() {
        return "No repositories found.".to_string();
    }

    let mut sections = Vec::new();
    let header = window_summary(window);
    if !header.is_empty() {
        sections.push(header);
    }
    sections.extend(response.items.iter().map(repo_summary));
    sections.join("\n---\n")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::pagination::{compute_window, PaginationWindow, RESULT_CAP};
    use crate::types::{RepoLicense, RepoOwner, Repository};

    fn sample_repo() -> Repository {
        Repository {
            id: 1,
            name: "ripgrep".to_string(),
            full_name: "BurntSushi/ripgrep".to_string(),
            html_url: "https://github.com/BurntSushi/ripgrep".to_string(),
            description: Some("recursively search directories".to_string()),
            language: Some("Rust".to_string()),
            stargazers_count: 45_200,
            forks_count: 1_900,
            topics: vec!["grep".to_string(), "search".to_string()],
            updated_at: Utc::now(),
            owner: Some(RepoOwner {
                login: "BurntSushi".to_string(),
                avatar_url: None,
            }),
            license: Some(RepoLicense {
                name: "The Unlicense".to_string(),
                spdx_id: Some("Unlicense".to_string()),
            }),
        }
    }

    #[test]
    fn summary_lists_core_fields() {
        let text = repo_summary(&sample_repo());
        assert!(text.starts_with("## BurntSushi/ripgrep"));
        assert!(text.contains("**Language:** Rust"));
        assert!(text.contains("**Stars:** 45.2k | **Forks:** 1.9k"));
        assert!(text.contains("**License:** Unlicense"));
        assert!(text.contains("**Topics:** grep, search"));
        assert!(text.contains("**Updated:**"));
        assert!(text.ends_with("https://github.com/BurntSushi/ripgrep"));
    }

    #[test]
    fn optional_fields_are_omitted_not_blank() {
        let mut repo = sample_repo();
        repo.description = None;
        repo.language = None;
        repo.license = None;
        repo.topics.clear();
        let text = repo_summary(&repo);
        assert!(!text.contains("**Description:**"));
        assert!(!text.contains("**Language:**"));
        assert!(!text.contains("**License:**"));
        assert!(!text.contains("**Topics:**"));
    }

    #[test]
    fn window_header_matches_display_contract() {
        let window = compute_window(Some(250), 3, 10, RESULT_CAP).unwrap();
        assert_eq!(window_summary(&window), "Showing 21-30 of 250");
        assert_eq!(window_summary(&PaginationWindow::empty(1)), "");
    }

    #[test]
    fn empty_result_page_reads_as_no_matches() {
        let response = SearchResponse {
            total_count: 0,
            incomplete_results: false,
            items: Vec::new(),
        };
        let window = compute_window(Some(0), 1, 10, RESULT_CAP).unwrap();
        assert_eq!(results_summary(&response, &window), "No repositories found.");
    }

    #[test]
    fn result_page_joins_header_and_items() {
        let response = SearchResponse {
            total_count: 1,
            incomplete_results: false,
            items: vec![sample_repo()],
        };
        let window = compute_window(Some(1), 1, 10, RESULT_CAP).unwrap();
        let text = results_summary(&response, &window);
        assert!(text.starts_with("Showing 1-1 of 1\n---\n## BurntSushi/ripgrep"));
    }
}
