//! Property tests over the pipeline stages.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use posview_core::{filter_rows, page_window, paginate, sort_rows};
use posview_model::{
    EnumChoice, FieldValue, FilterSpec, PageState, Row, SortDirection, SortSpec,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
}

prop_compose! {
    fn arb_row()(
        id in "[a-z]{1,6}[0-9]{1,3}",
        name in "[A-Za-z ]{0,12}",
        status in prop::sample::select(vec!["Active", "Inactive", "Pending"]),
        balance in prop::option::of(-1_000_000.0..1_000_000.0f64),
    ) -> Row {
        let mut row = Row::new(id)
            .with_field("name", FieldValue::Text(name))
            .with_field("status", FieldValue::Enum(status.to_string()));
        if let Some(balance) = balance {
            row = row.with_field("balance", FieldValue::Currency(balance));
        }
        row
    }
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(arb_row(), 0..40)
}

fn arb_filters() -> impl Strategy<Value = Vec<FilterSpec>> {
    let search = "[a-z]{0,3}".prop_map(|term| FilterSpec::search(term, vec!["name".into()]));
    let status = prop::sample::select(vec!["All", "Active", "Inactive"])
        .prop_map(|s| FilterSpec::equals("status", EnumChoice::from_input(s)));
    let range = (-500_000.0..500_000.0f64)
        .prop_map(|min| FilterSpec::range("balance", min, f64::INFINITY));
    prop::collection::vec(prop_oneof![search, status, range], 0..3)
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    (
        prop::sample::select(vec!["name", "status", "balance", "ghost"]),
        prop::bool::ANY,
    )
        .prop_map(|(key, desc)| SortSpec {
            key: key.into(),
            direction: if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        })
}

fn id_multiset(rows: &[Row]) -> Vec<&str> {
    let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn filter_returns_a_subset(rows in arb_rows(), filters in arb_filters()) {
        let filtered = filter_rows(&rows, &filters, today());
        prop_assert!(filtered.len() <= rows.len());
        let all: BTreeSet<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        for row in &filtered {
            prop_assert!(all.contains(row.id.as_str()), "filter invented a row");
        }
    }

    #[test]
    fn filter_is_idempotent(rows in arb_rows(), filters in arb_filters()) {
        let once = filter_rows(&rows, &filters, today());
        let twice = filter_rows(&once, &filters, today());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_a_permutation(rows in arb_rows(), sort in arb_sort()) {
        let sorted = sort_rows(&rows, &sort);
        prop_assert_eq!(id_multiset(&rows), id_multiset(&sorted));
    }

    #[test]
    fn sort_is_idempotent(rows in arb_rows(), sort in arb_sort()) {
        let once = sort_rows(&rows, &sort);
        let twice = sort_rows(&once, &sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pages_partition_the_row_set(rows in arb_rows(), page_size in 1..15usize) {
        let mut state = PageState::new(page_size);
        let total_pages = state.total_pages(rows.len());
        let mut seen: Vec<&str> = Vec::new();
        for page in 1..=total_pages {
            state.current_page = page;
            let paged = paginate(&rows, &state);
            for row in &paged.page_rows {
                // Borrow from `rows` via id lookup to keep lifetimes simple.
                let original = rows.iter().find(|r| r.id == row.id).unwrap();
                seen.push(original.id.as_str());
            }
        }
        prop_assert_eq!(seen.len(), rows.len(), "pages must cover every row exactly once");
        let in_order: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(seen, in_order, "pages must preserve order");
    }

    #[test]
    fn window_is_always_well_formed(current in 1..200usize, total in 1..200usize) {
        let window = page_window(current.min(total), total);
        prop_assert!(!window.pages.is_empty());
        prop_assert!(window.pages.len() <= 5);
        prop_assert!(*window.pages.first().unwrap() >= 1);
        prop_assert!(*window.pages.last().unwrap() <= total);
        // Contiguous ascending run.
        for pair in window.pages.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
        if window.has_ellipsis {
            prop_assert!(total - window.pages.last().unwrap() > 1);
        }
    }
}
