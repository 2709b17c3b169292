//! Filter predicate evaluation.
//!
//! Specs are AND-combined; a multi-field search is an OR across its
//! configured fields. Inert specs (empty search term, `All` choices,
//! fully unbounded ranges) short-circuit to "match everything" instead of
//! being treated as literal values.

use chrono::NaiveDate;
use tracing::warn;

use posview_model::{BucketChoice, EnumChoice, FieldName, FilterSpec, Row};

/// Returns the rows matching every spec, in their input order.
pub fn filter_rows(rows: &[Row], specs: &[FilterSpec], today: NaiveDate) -> Vec<Row> {
    rows.iter()
        .filter(|row| row_matches(row, specs, today))
        .cloned()
        .collect()
}

/// Whether a single row passes every spec.
pub fn row_matches(row: &Row, specs: &[FilterSpec], today: NaiveDate) -> bool {
    specs.iter().all(|spec| matches_spec(row, spec, today))
}

fn matches_spec(row: &Row, spec: &FilterSpec, today: NaiveDate) -> bool {
    if !spec.is_restrictive() {
        return true;
    }
    match spec {
        FilterSpec::Search { term, fields } => {
            let needle = term.trim().to_lowercase();
            fields.iter().any(|field| {
                row.text(field.as_str())
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        }
        FilterSpec::Equals { field, choice } => match choice {
            EnumChoice::All => true,
            EnumChoice::Value(value) => row.text(field.as_str()) == Some(value.as_str()),
        },
        // Rows lacking the field (or holding a non-numeric value) are
        // excluded once the range actually restricts.
        FilterSpec::Range { field, min, max } => row
            .number(field.as_str())
            .is_some_and(|n| n >= *min && n <= *max),
        FilterSpec::Bucket { field, choice } => match choice {
            BucketChoice::All => true,
            BucketChoice::Period(period) => row
                .date(field.as_str())
                .is_some_and(|date| period.contains(date, today)),
        },
    }
}

/// Parse one user-supplied range bound.
///
/// Accepts optional currency symbol and grouping commas (`$1,500`). An
/// empty string means "no bound"; an unparsable string degrades to "no
/// bound" with a warning instead of propagating an error.
pub fn parse_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(bound = %input, "ignoring unparsable range bound");
            None
        }
    }
}

/// Build a range spec from raw bound strings, degrading unparsable or
/// absent bounds to the corresponding infinity.
pub fn range_from_bounds(
    field: impl Into<FieldName>,
    min_input: Option<&str>,
    max_input: Option<&str>,
) -> FilterSpec {
    let min = min_input
        .and_then(parse_bound)
        .unwrap_or(f64::NEG_INFINITY);
    let max = max_input.and_then(parse_bound).unwrap_or(f64::INFINITY);
    FilterSpec::range(field, min, max)
}
