//! Integration tests for the full list pipeline.

use chrono::NaiveDate;

use posview_core::{ListController, ListQuery, run_query};
use posview_model::{EnumChoice, FieldValue, FilterSpec, Row, SortSpec};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
}

fn customer(id: &str, name: &str, status: &str, spent: f64) -> Row {
    Row::new(id)
        .with_field("name", FieldValue::Text(name.to_string()))
        .with_field("status", FieldValue::Enum(status.to_string()))
        .with_field("spent", FieldValue::Currency(spent))
}

fn customers(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            let status = if i % 3 == 0 { "Inactive" } else { "Active" };
            customer(
                &format!("c{i:02}"),
                &format!("Customer {i:02}"),
                status,
                100.0 * i as f64,
            )
        })
        .collect()
}

#[test]
fn concatenating_all_pages_reproduces_the_filtered_set() {
    let rows = customers(23);
    let mut query = ListQuery::new(10);
    query.filters = vec![FilterSpec::equals(
        "status",
        EnumChoice::Value("Active".into()),
    )];
    query.sort = Some(SortSpec::descending("spent"));

    let first = run_query(&rows, &query, today());
    let mut collected: Vec<String> = Vec::new();
    for page in 1..=first.total_pages {
        query.page.current_page = page;
        let result = run_query(&rows, &query, today());
        collected.extend(result.rows.iter().map(|r| r.id.to_string()));
    }
    assert_eq!(collected.len(), first.total_count);
    let mut unique = collected.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), collected.len(), "no row may repeat across pages");
}

#[test]
fn search_and_status_combine_before_paging() {
    let mut rows = customers(15);
    rows.push(customer("vip", "Nike Store Account", "Active", 9_999.0));
    let mut query = ListQuery::new(10);
    query.filters = vec![
        FilterSpec::search("NIKE", vec!["name".into()]),
        FilterSpec::equals("status", EnumChoice::Value("Active".into())),
    ];
    let result = run_query(&rows, &query, today());
    assert_eq!(result.total_count, 1);
    assert_eq!(result.rows[0].id.as_str(), "vip");
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.window_pages, vec![1]);
    assert!(!result.has_ellipsis);
}

#[test]
fn no_match_is_a_renderable_empty_page() {
    let rows = customers(8);
    let mut query = ListQuery::new(10);
    query.filters = vec![FilterSpec::search("zzz-no-such", vec!["name".into()])];
    let result = run_query(&rows, &query, today());
    assert!(result.is_empty());
    assert!(result.rows.is_empty());
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.window_pages, vec![1]);
    assert_eq!((result.first_index, result.last_index), (0, 0));
}

#[test]
fn window_metadata_follows_the_current_page() {
    let rows = customers(95);
    let mut controller = ListController::new(rows, 10, today());
    controller.request_page(6);
    let page = controller.page();
    assert_eq!(page.total_pages, 10);
    assert_eq!(page.window_pages, vec![4, 5, 6, 7, 8]);
    assert!(page.has_ellipsis);
    assert_eq!((page.first_index, page.last_index), (51, 60));
}

#[test]
fn unsorted_query_preserves_provider_order() {
    let rows = customers(12);
    let query = ListQuery::new(10);
    let result = run_query(&rows, &query, today());
    let ids: Vec<&str> = result.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids[0], "c00");
    assert_eq!(ids[9], "c09");
}

#[test]
fn sort_applies_to_the_whole_filtered_set_not_the_page() {
    let rows = customers(12);
    let mut query = ListQuery::new(10);
    query.sort = Some(SortSpec::descending("spent"));
    query.page.current_page = 2;
    let result = run_query(&rows, &query, today());
    // Page 2 holds the two smallest spenders.
    let ids: Vec<&str> = result.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c01", "c00"]);
}
