//! Footer and pager strings, pinned with snapshots.

use chrono::NaiveDate;
use posview_cli::render::{format_footer, format_pager};
use posview_core::{ListPage, ListQuery, run_query};
use posview_model::{FieldValue, Row};

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new(format!("r{i:03}")).with_field("total", FieldValue::Number(f64::from(i as u32)))
        })
        .collect()
}

fn page_for(count: usize, page_size: usize, page: usize) -> ListPage {
    let today = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    let rows = rows(count);
    let mut query = ListQuery::new(page_size);
    query.page.request_page(page, query.page.total_pages(count));
    run_query(&rows, &query, today)
}

#[test]
fn footer_on_a_partial_last_page() {
    let page = page_for(12, 10, 2);
    insta::assert_snapshot!(format_footer(&page), @"Showing 11-12 of 12 rows · page 2/2");
}

#[test]
fn footer_on_an_empty_result() {
    let page = page_for(0, 10, 1);
    insta::assert_snapshot!(format_footer(&page), @"Showing 0 of 0 rows · page 1/1");
}

#[test]
fn pager_marks_current_page_mid_window() {
    let page = page_for(95, 10, 6);
    insta::assert_snapshot!(format_pager(&page), @"Pages: 4 5 [6] 7 8 ...");
}

#[test]
fn pager_clamps_at_the_end_without_ellipsis() {
    let page = page_for(95, 10, 9);
    insta::assert_snapshot!(format_pager(&page), @"Pages: 6 7 8 [9] 10");
}

#[test]
fn pager_shows_all_pages_when_few() {
    let page = page_for(12, 10, 1);
    insta::assert_snapshot!(format_pager(&page), @"Pages: [1] 2");
}
