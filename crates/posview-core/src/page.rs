//! Pagination: page slicing and the numbered-button window.

use posview_model::{PageState, Row};

/// Maximum numbered page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// One page slice plus its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedRows {
    pub page_rows: Vec<Row>,
    pub total_pages: usize,
    /// 1-based index of the first row on this page, 0 when the page is empty.
    pub first_index: usize,
    /// 1-based index of the last row on this page, 0 when the page is empty.
    pub last_index: usize,
}

/// Slice `rows` to the current page.
///
/// `total_pages` is `max(1, ceil(len / page_size))`, so an empty collection
/// still has exactly one (empty) page. A `current_page` beyond the end
/// yields an empty slice rather than a panic; keeping the state in range is
/// [`PageState::request_page`]'s job.
pub fn paginate(rows: &[Row], state: &PageState) -> PagedRows {
    let total_pages = state.total_pages(rows.len());
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(state.page_size);
    let end = start.saturating_add(state.page_size).min(rows.len());
    if start >= rows.len() {
        return PagedRows {
            page_rows: Vec::new(),
            total_pages,
            first_index: 0,
            last_index: 0,
        };
    }
    PagedRows {
        page_rows: rows[start..end].to_vec(),
        total_pages,
        first_index: start + 1,
        last_index: end,
    }
}

/// The numbered buttons to render for a pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    /// True when pages exist beyond the window's end that the trailing
    /// button does not reach, i.e. the gap is wider than one page.
    pub has_ellipsis: bool,
}

/// Compute the sliding 5-button window.
///
/// All pages are shown when there are at most [`PAGE_WINDOW`]; otherwise a
/// window of exactly [`PAGE_WINDOW`] pages is centered on `current_page`
/// and clamped to `[1, total_pages]`.
pub fn page_window(current_page: usize, total_pages: usize) -> PageWindow {
    let total_pages = total_pages.max(1);
    if total_pages <= PAGE_WINDOW {
        return PageWindow {
            pages: (1..=total_pages).collect(),
            has_ellipsis: false,
        };
    }
    let start = current_page
        .saturating_sub(PAGE_WINDOW / 2)
        .clamp(1, total_pages - (PAGE_WINDOW - 1));
    let end = start + PAGE_WINDOW - 1;
    PageWindow {
        pages: (start..=end).collect(),
        has_ellipsis: total_pages - end > 1,
    }
}
