//! Per-view configuration for the nine back-office list views.
//!
//! Each module defines one view: its schema (fields, search fields, filter
//! fields, badge maps, tier thresholds, page size) and its seed dataset.
//! The seeds stand in for a remote data source; injecting a different
//! `DatasetProvider` implementation swaps them out without touching any
//! view definition.
//!
//! Everything here is configuration expressed as data. A view that needs
//! different behavior from another view is a sign something belongs in the
//! pipeline instead.

pub mod accounts;
pub mod balance_sheet;
pub mod brands;
pub mod categories;
pub mod customers;
pub mod money_transfer;
pub mod registry;
pub mod sales;
pub mod suppliers;
pub mod users;

pub use registry::{ViewDef, all_views, find_view};

use chrono::NaiveDate;
use posview_model::{FieldValue, Row};

pub(crate) fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

pub(crate) fn status(value: &str) -> FieldValue {
    FieldValue::Enum(value.to_string())
}

pub(crate) fn money(value: f64) -> FieldValue {
    FieldValue::Currency(value)
}

pub(crate) fn count(value: f64) -> FieldValue {
    FieldValue::Number(value)
}

pub(crate) fn day(y: i32, m: u32, d: u32) -> FieldValue {
    // Seed dates are compile-time constants; a bad one is a programmer error.
    FieldValue::Date(NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date"))
}

pub(crate) fn row(id: &str) -> Row {
    Row::new(id)
}
