//! Stable single-key sorting.

use std::cmp::Ordering;

use posview_model::{Row, SortDirection, SortSpec};

/// Returns a new ordering of `rows` by the spec's key; the input is not
/// mutated.
///
/// The sort is stable: rows with equal keys keep their relative input
/// order, in both directions. Rows missing the key order after all rows
/// that have it, again in both directions, so toggling the direction never
/// shuffles keyless rows into the middle of the view.
pub fn sort_rows(rows: &[Row], spec: &SortSpec) -> Vec<Row> {
    let key = spec.key.as_str();
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let va = a.get(key);
        let vb = b.get(key);
        match (va.is_missing(), vb.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = va.natural_cmp(vb);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use posview_model::FieldValue;

    fn row(id: &str, name: &str, total: f64) -> Row {
        Row::new(id)
            .with_field("name", FieldValue::Text(name.to_string()))
            .with_field("total", FieldValue::Currency(total))
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn sorts_text_lexicographically() {
        let rows = vec![row("r1", "Puma", 10.0), row("r2", "Adidas", 20.0), row("r3", "Nike", 30.0)];
        let sorted = sort_rows(&rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&sorted), vec!["r2", "r3", "r1"]);
        // Input untouched.
        assert_eq!(ids(&rows), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn descending_mirrors_ascending() {
        let rows = vec![row("r1", "a", 10.0), row("r2", "b", 30.0), row("r3", "c", 20.0)];
        let asc = sort_rows(&rows, &SortSpec::ascending("total"));
        let desc = sort_rows(&rows, &SortSpec::descending("total"));
        let mut mirrored = ids(&asc);
        mirrored.reverse();
        assert_eq!(ids(&desc), mirrored);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let rows = vec![row("r1", "same", 1.0), row("r2", "same", 2.0), row("r3", "same", 3.0)];
        let sorted = sort_rows(&rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&sorted), vec!["r1", "r2", "r3"]);
        let sorted = sort_rows(&rows, &SortSpec::descending("name"));
        assert_eq!(ids(&sorted), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn missing_keys_sort_last_in_both_directions() {
        let rows = vec![Row::new("bare"), row("r1", "b", 2.0), row("r2", "a", 1.0)];
        let asc = sort_rows(&rows, &SortSpec::ascending("name"));
        assert_eq!(ids(&asc), vec!["r2", "r1", "bare"]);
        let desc = sort_rows(&rows, &SortSpec::descending("name"));
        assert_eq!(ids(&desc), vec!["r1", "r2", "bare"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let rows = vec![row("r1", "c", 3.0), row("r2", "a", 1.0), row("r3", "b", 2.0)];
        let spec = SortSpec::descending("total");
        let once = sort_rows(&rows, &spec);
        let twice = sort_rows(&once, &spec);
        assert_eq!(once, twice);
    }
}
