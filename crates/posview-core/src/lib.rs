//! The posview list pipeline: search → filter → sort → paginate → project.
//!
//! Every stage is a pure function of its inputs; the only state in the
//! crate is [`ListController`], which owns one view instance's query specs
//! and enforces the reset-to-page-1 invariant on mutation. No stage may
//! panic or error for empty datasets, empty search terms, or filters that
//! match nothing.

pub mod filter;
pub mod page;
pub mod pipeline;
pub mod project;
pub mod provider;
pub mod sort;

pub use filter::{filter_rows, parse_bound, range_from_bounds, row_matches};
pub use page::{PAGE_WINDOW, PageWindow, PagedRows, page_window, paginate};
pub use pipeline::{ListController, ListPage, ListQuery, run_query};
pub use project::{
    ProjectedCell, ProjectedRow, format_currency, format_date, format_grouped, project_row,
    project_rows,
};
pub use provider::{CsvProvider, DatasetProvider, ProviderError, SeedProvider};
pub use sort::sort_rows;
