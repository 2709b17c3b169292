//! Query specs: filters, sort, and page state.
//!
//! These are the per-view-instance inputs the pipeline is a pure function
//! of. The specs themselves carry no behavior beyond local predicates
//! (calendar-bucket membership lives here because it is pure date math);
//! evaluation over row sets happens in `posview-core`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::FieldName;

/// Choice for an enum (status) filter; `All` means no restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumChoice {
    All,
    Value(String),
}

impl EnumChoice {
    /// Interpret a user-supplied dropdown value. The literal `All`
    /// (case-insensitive) is the no-restriction sentinel, never a value
    /// to match against.
    pub fn from_input(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("all") {
            EnumChoice::All
        } else {
            EnumChoice::Value(input.trim().to_string())
        }
    }
}

/// Named calendar bucket relative to an injected "today".
///
/// Weeks start on Sunday; month/quarter/year compare calendar components,
/// not rolling windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePeriod {
    Today,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
    ThisYear,
}

impl DatePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePeriod::Today => "today",
            DatePeriod::ThisWeek => "week",
            DatePeriod::ThisMonth => "month",
            DatePeriod::ThisQuarter => "quarter",
            DatePeriod::ThisYear => "year",
        }
    }

    /// Whether `date` falls inside this bucket relative to `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DatePeriod::Today => date == today,
            DatePeriod::ThisWeek => {
                let offset = u64::from(today.weekday().num_days_from_sunday());
                let start = today - Days::new(offset);
                let end = start + Days::new(6);
                date >= start && date <= end
            }
            DatePeriod::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            DatePeriod::ThisQuarter => {
                date.year() == today.year() && date.month0() / 3 == today.month0() / 3
            }
            DatePeriod::ThisYear => date.year() == today.year(),
        }
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(DatePeriod::Today),
            "week" | "this-week" => Ok(DatePeriod::ThisWeek),
            "month" | "this-month" => Ok(DatePeriod::ThisMonth),
            "quarter" | "this-quarter" => Ok(DatePeriod::ThisQuarter),
            "year" | "this-year" => Ok(DatePeriod::ThisYear),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Choice for a date-bucket filter; `All` means no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketChoice {
    All,
    Period(DatePeriod),
}

/// A declarative predicate narrowing the visible row set.
///
/// Active specs are AND-combined by the pipeline; `Search` is itself an OR
/// across its configured fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterSpec {
    /// Case-insensitive substring match against the named text/enum fields.
    Search { term: String, fields: Vec<FieldName> },
    /// Exact match on one enum field.
    Equals { field: FieldName, choice: EnumChoice },
    /// Inclusive numeric interval on one number/currency field. Unbounded
    /// ends are the infinities, never sentinel magnitudes.
    Range { field: FieldName, min: f64, max: f64 },
    /// Calendar-bucket membership on one date field.
    Bucket {
        field: FieldName,
        choice: BucketChoice,
    },
}

impl FilterSpec {
    pub fn search(term: impl Into<String>, fields: Vec<FieldName>) -> Self {
        FilterSpec::Search {
            term: term.into(),
            fields,
        }
    }

    pub fn equals(field: impl Into<FieldName>, choice: EnumChoice) -> Self {
        FilterSpec::Equals {
            field: field.into(),
            choice,
        }
    }

    pub fn range(field: impl Into<FieldName>, min: f64, max: f64) -> Self {
        FilterSpec::Range {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn at_least(field: impl Into<FieldName>, min: f64) -> Self {
        Self::range(field, min, f64::INFINITY)
    }

    pub fn bucket(field: impl Into<FieldName>, choice: BucketChoice) -> Self {
        FilterSpec::Bucket {
            field: field.into(),
            choice,
        }
    }

    /// Whether the spec can exclude any row at all. Empty search terms and
    /// `All` choices are inert and short-circuit during evaluation.
    pub fn is_restrictive(&self) -> bool {
        match self {
            FilterSpec::Search { term, fields } => !term.trim().is_empty() && !fields.is_empty(),
            FilterSpec::Equals { choice, .. } => !matches!(choice, EnumChoice::All),
            FilterSpec::Range { min, max, .. } => {
                *min != f64::NEG_INFINITY || *max != f64::INFINITY
            }
            FilterSpec::Bucket { choice, .. } => !matches!(choice, BucketChoice::All),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The active sort key and direction. At most one is active per view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: FieldName,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<FieldName>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<FieldName>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Current page number (1-based) and fixed page size of a view.
///
/// Invariant: `1 <= current_page <= max(1, ceil(filtered_count / page_size))`.
/// Mutating any filter, search term, sort, or the page size resets
/// `current_page` to 1; out-of-range page requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Total pages for a collection of `count` rows; never zero, so an
    /// empty result still renders as one empty page.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Accept an in-range page request; out-of-range requests leave the
    /// state unchanged and report `false`.
    pub fn request_page(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Changing the page size also resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }
}
