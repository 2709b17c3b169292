//! Typed field values and the row record they compose.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{FieldName, RowId};
use crate::schema::FieldType;

/// One typed cell of a row.
///
/// Currency amounts are plain numbers; the currency symbol and locale are
/// presentation configuration on the view schema, not per-cell data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Currency(f64),
    Date(NaiveDate),
    Enum(String),
    Missing,
}

impl FieldValue {
    /// The declared semantic type this value belongs to, if any.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            FieldValue::Text(_) => Some(FieldType::Text),
            FieldValue::Number(_) => Some(FieldType::Number),
            FieldValue::Currency(_) => Some(FieldType::Currency),
            FieldValue::Date(_) => Some(FieldType::Date),
            FieldValue::Enum(_) => Some(FieldType::Enum),
            FieldValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Numeric view of the value (numbers and currency amounts).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) | FieldValue::Currency(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual view of the value (text and enum fields) as used by search.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Natural ordering per the value's semantic type: lexicographic for
    /// text/enum, numeric for number/currency, chronological for dates.
    /// Missing values order after every present value; values of different
    /// types order by a fixed type rank so the comparison stays total.
    pub fn natural_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
            (FieldValue::Missing, _) => Ordering::Greater,
            (_, FieldValue::Missing) => Ordering::Less,
            (FieldValue::Text(a), FieldValue::Text(b))
            | (FieldValue::Enum(a), FieldValue::Enum(b))
            | (FieldValue::Text(a), FieldValue::Enum(b))
            | (FieldValue::Enum(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b))
            | (FieldValue::Currency(a), FieldValue::Currency(b))
            | (FieldValue::Number(a), FieldValue::Currency(b))
            | (FieldValue::Currency(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (a, b) => type_rank(a).cmp(&type_rank(b)),
        }
    }
}

fn type_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Number(_) | FieldValue::Currency(_) => 0,
        FieldValue::Date(_) => 1,
        FieldValue::Text(_) | FieldValue::Enum(_) => 2,
        FieldValue::Missing => 3,
    }
}

/// One record of business data displayed in a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub fields: BTreeMap<FieldName, FieldValue>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion, used heavily by seed datasets.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<FieldName>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Field lookup; absent fields read as [`FieldValue::Missing`].
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&FieldValue::Missing)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).as_text()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).as_number()
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).as_date()
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absent_field_reads_as_missing() {
        let row = Row::new("r1").with_field("name", FieldValue::Text("Nike".into()));
        assert_eq!(row.text("name"), Some("Nike"));
        assert!(row.get("balance").is_missing());
        assert_eq!(row.number("balance"), None);
    }

    #[test]
    fn missing_orders_after_everything() {
        let missing = FieldValue::Missing;
        for present in [
            FieldValue::Text("z".into()),
            FieldValue::Number(f64::MAX),
            FieldValue::Date(date(9999, 12, 31)),
        ] {
            assert_eq!(missing.natural_cmp(&present), Ordering::Greater);
            assert_eq!(present.natural_cmp(&missing), Ordering::Less);
        }
        assert_eq!(missing.natural_cmp(&FieldValue::Missing), Ordering::Equal);
    }

    #[test]
    fn number_and_currency_compare_numerically() {
        let a = FieldValue::Currency(5_000.0);
        let b = FieldValue::Number(125_000.0);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn dates_compare_chronologically() {
        let a = FieldValue::Date(date(2024, 1, 15));
        let b = FieldValue::Date(date(2024, 3, 1));
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn value_serializes_tagged() {
        let json = serde_json::to_string(&FieldValue::Currency(12.5)).unwrap();
        assert_eq!(json, r#"{"kind":"Currency","value":12.5}"#);
    }
}
