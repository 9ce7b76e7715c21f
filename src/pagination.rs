//! Pagination planning.
//!
//! Turns a total result count, the requested page, and the page size into
//! the window of item indices to display, and compresses the page selector
//! into an ellipsis-aware label sequence. The upstream service only
//! paginates through its first [`RESULT_CAP`] matches, so page counts are
//! computed against the capped total while the displayed item range is
//! clamped against the raw total — exactly what the service returns near
//! the cap boundary.

use std::fmt;

use crate::error::{ExplorerError, Result};

/// Hard upstream limit on how many matches can be paged through.
pub const RESULT_CAP: u64 = 1000;

/// Widest page selector rendered before ellipsis compression kicks in.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// The visible slice of results for one page.
///
/// `total_pages == 0` signals "nothing to paginate" — either no search has
/// happened yet or it matched nothing — and callers suppress pagination
/// controls entirely. `start_item`/`end_item` are 1-based display indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub start_item: u64,
    pub end_item: u64,
    pub total_items: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationWindow {
    /// Window for "no results yet" — everything zero except the page.
    pub fn empty(current_page: u32) -> Self {
        PaginationWindow {
            start_item: 0,
            end_item: 0,
            total_items: 0,
            current_page,
            total_pages: 0,
        }
    }

    /// True when there is nothing to paginate.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// One entry in the page selector: a navigable page number or a
/// non-navigable gap marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

impl PageLabel {
    /// Selecting an ellipsis must not trigger navigation.
    pub fn is_navigable(&self) -> bool {
        matches!(self, PageLabel::Page(_))
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{n}"),
            PageLabel::Ellipsis => write!(f, "…"),
        }
    }
}

/// Compute the display window for a page of results.
///
/// `total_count` is `None` before the first response arrives — distinct
/// from `Some(0)`, which means the search ran and matched nothing. Both
/// yield `total_pages == 0`. A zero `page` or `per_page` is a caller
/// contract violation and fails explicitly rather than being clamped.
pub fn compute_window(
    total_count: Option<u64>,
    page: u32,
    per_page: u32,
    result_cap: u64,
) -> Result<PaginationWindow> {
    if page == 0 {
        return Err(ExplorerError::InvalidArgument(
            "page must be at least 1".to_string(),
        ));
    }
    if per_page == 0 {
        return Err(ExplorerError::InvalidArgument(
            "per_page must be at least 1".to_string(),
        ));
    }

    let Some(total) = total_count else {
        return Ok(PaginationWindow::empty(page));
    };

    let effective_total = total.min(result_cap);
    let total_pages = effective_total.div_ceil(per_page as u64) as u32;

    let start_item = (page as u64 - 1) * per_page as u64 + 1;
    // Clamped against the raw total, not the capped one: the service
    // reports true match counts even past the paging cap.
    let end_item = (page as u64 * per_page as u64).min(total);

    Ok(PaginationWindow {
        start_item,
        end_item,
        total_items: total,
        current_page: page,
        total_pages,
    })
}

/// Compress `1..=total_pages` into at most a handful of labels centered on
/// the current page.
///
/// The first and last pages are always shown; an ellipsis stands in for
/// each elided run. Near either end the interior window is re-clamped to
/// stay full width instead of shrinking. Total over all inputs — an
/// out-of-range `current_page` just produces a window pinned to the
/// nearest edge.
pub fn page_labels(current_page: u32, total_pages: u32, max_visible: u32) -> Vec<PageLabel> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let mut labels = vec![PageLabel::Page(1)];

    let current = current_page as i64;
    let total = total_pages as i64;
    let visible = max_visible as i64;

    let mut window_start = (current - (visible - 2).div_euclid(2)).max(2);
    let window_end = (window_start + visible - 3).min(total - 1);
    if window_end >= total - 1 {
        window_start = (total - visible + 2).max(2);
    }

    if window_start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    for page in window_start..=window_end {
        labels.push(PageLabel::Page(page as u32));
    }
    if window_end < total - 1 {
        labels.push(PageLabel::Ellipsis);
    }

    if total_pages > 1 {
        labels.push(PageLabel::Page(total_pages));
    }

    labels
}
