//! Pipeline composition and the per-view-instance controller.

use chrono::NaiveDate;
use tracing::debug;

use posview_model::{FilterSpec, PageState, Row, SortSpec};

use crate::filter::{filter_rows, row_matches};
use crate::page::{PageWindow, page_window, paginate};
use crate::provider::{DatasetProvider, ProviderError};
use crate::sort::sort_rows;

/// The full query a view instance holds: filters, sort, page state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<FilterSpec>,
    pub sort: Option<SortSpec>,
    pub page: PageState,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: Vec::new(),
            sort: None,
            page: PageState::new(page_size),
        }
    }
}

/// Output of one pipeline run: the visible slice plus pager metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub rows: Vec<Row>,
    /// Rows surviving the filters (across all pages).
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based bounds of the slice within the filtered set; 0 when empty.
    pub first_index: usize,
    pub last_index: usize,
    /// Numbered buttons for the pager.
    pub window_pages: Vec<usize>,
    pub has_ellipsis: bool,
}

impl ListPage {
    /// An empty result is a valid, renderable state, not an error.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Run filter → sort → paginate over `rows`.
///
/// Pure in all inputs; `today` anchors the calendar-bucket filters. The
/// query is recomputed from scratch on every call — with per-view row
/// counts this is cheap, and memoization is an optimization callers may
/// layer on, never a correctness requirement.
pub fn run_query(rows: &[Row], query: &ListQuery, today: NaiveDate) -> ListPage {
    let filtered = filter_rows(rows, &query.filters, today);
    let ordered = match &query.sort {
        Some(spec) => sort_rows(&filtered, spec),
        None => filtered,
    };
    let total_count = ordered.len();
    let paged = paginate(&ordered, &query.page);
    let PageWindow {
        pages,
        has_ellipsis,
    } = page_window(query.page.current_page, paged.total_pages);
    ListPage {
        rows: paged.page_rows,
        total_count,
        current_page: query.page.current_page,
        total_pages: paged.total_pages,
        first_index: paged.first_index,
        last_index: paged.last_index,
        window_pages: pages,
        has_ellipsis,
    }
}

/// Owns one view instance's rows and query, enforcing the page-reset
/// invariant: any filter, sort, or page-size mutation returns to page 1.
///
/// The controller is the only mutable state in the crate; the pipeline
/// functions never touch the specs.
#[derive(Debug, Clone)]
pub struct ListController {
    rows: Vec<Row>,
    query: ListQuery,
    today: NaiveDate,
}

impl ListController {
    pub fn new(rows: Vec<Row>, page_size: usize, today: NaiveDate) -> Self {
        Self {
            rows,
            query: ListQuery::new(page_size),
            today,
        }
    }

    /// Fetch rows from a provider and wrap them in a controller.
    pub fn from_provider(
        provider: &dyn DatasetProvider,
        page_size: usize,
        today: NaiveDate,
    ) -> Result<Self, ProviderError> {
        Ok(Self::new(provider.fetch_rows()?, page_size, today))
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Replace the active filters; resets to page 1.
    pub fn set_filters(&mut self, filters: Vec<FilterSpec>) {
        self.query.filters = filters;
        self.query.page.reset();
    }

    /// Drop every filter (the "clear filters" affordance shown with empty
    /// results); resets to page 1.
    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.query.page.reset();
    }

    /// Replace the sort; resets to page 1.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.query.sort = sort;
        self.query.page.reset();
    }

    /// Change the page size; resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page.set_page_size(page_size);
    }

    /// Request a page. Out-of-range requests leave the state unchanged.
    pub fn request_page(&mut self, page: usize) {
        let total_pages = self.query.page.total_pages(self.filtered_count());
        if !self.query.page.request_page(page, total_pages) {
            debug!(page, total_pages, "ignoring out-of-range page request");
        }
    }

    /// Run the pipeline for the current query.
    pub fn page(&self) -> ListPage {
        run_query(&self.rows, &self.query, self.today)
    }

    /// The filtered and sorted set across all pages (exports).
    pub fn filtered_sorted(&self) -> Vec<Row> {
        let filtered = filter_rows(&self.rows, &self.query.filters, self.today);
        match &self.query.sort {
            Some(spec) => sort_rows(&filtered, spec),
            None => filtered,
        }
    }

    fn filtered_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row_matches(row, &self.query.filters, self.today))
            .count()
    }
}
