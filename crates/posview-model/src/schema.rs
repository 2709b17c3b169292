//! Per-view schemas: field definitions plus the presentation tables
//! (badge maps, tier thresholds) the projection stage reads as data.
//!
//! The schemas exist so that nine views can share one pipeline; everything
//! a view does differently from another view must be expressible here.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::FieldName;

/// Declared semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Free text, searched and sorted lexicographically.
    Text,
    /// Plain number (counts, quantities).
    Number,
    /// Monetary amount; rendered with the view's currency symbol.
    Currency,
    /// Calendar date, no time-of-day.
    Date,
    /// Value drawn from a finite set (statuses, roles, types).
    Enum,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Date => "date",
            FieldType::Enum => "enum",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "currency" => Ok(FieldType::Currency),
            "date" => Ok(FieldType::Date),
            "enum" => Ok(FieldType::Enum),
            other => Err(format!("unknown field type: {other}")),
        }
    }
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "primary",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Error => "error",
            BadgeTone::Neutral => "neutral",
        }
    }
}

/// Enum value to badge tone mapping for one field.
///
/// Unknown values fall back to [`BadgeTone::Neutral`] rather than erroring,
/// so a new status arriving from a data source degrades gracefully.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeMap {
    tones: BTreeMap<String, BadgeTone>,
}

impl BadgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, value: impl Into<String>, tone: BadgeTone) -> Self {
        self.tones.insert(value.into(), tone);
        self
    }

    pub fn tone_for(&self, value: &str) -> BadgeTone {
        self.tones.get(value).copied().unwrap_or_default()
    }
}

/// Intensity tier for a derived numeric indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

/// Per-view thresholds bucketing a numeric field into three tiers.
///
/// The cutoffs differ per view (product counts, balances, totals) and are
/// configuration, not universal constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Values >= `high` are [`Tier::High`].
    pub high: f64,
    /// Values >= `medium` (and below `high`) are [`Tier::Medium`].
    pub medium: f64,
}

impl TierThresholds {
    pub fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    pub fn tier_for(&self, value: f64) -> Tier {
        if value >= self.high {
            Tier::High
        } else if value >= self.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

/// Definition of one field in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: FieldName,
    /// Column heading shown to the user.
    pub label: String,
    pub field_type: FieldType,
    /// Badge map for enum fields rendered as status badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<BadgeMap>,
    /// Tier thresholds for numeric fields rendered as intensity indicators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<TierThresholds>,
}

impl FieldDef {
    pub fn new(name: impl Into<FieldName>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            badges: None,
            tiers: None,
        }
    }

    #[must_use]
    pub fn with_badges(mut self, badges: BadgeMap) -> Self {
        self.badges = Some(badges);
        self
    }

    #[must_use]
    pub fn with_tiers(mut self, tiers: TierThresholds) -> Self {
        self.tiers = Some(tiers);
        self
    }
}

/// Complete configuration of one list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSchema {
    /// Registry key, e.g. `customers`.
    pub name: String,
    /// Human title, e.g. `Customers`.
    pub title: String,
    /// Ordered column definitions.
    pub fields: Vec<FieldDef>,
    /// Fields the free-text search runs over (text/enum fields only).
    pub search_fields: Vec<FieldName>,
    /// Enum field driven by the status dropdown, when the view has one.
    pub status_field: Option<FieldName>,
    /// Numeric/currency field driven by the min/max range filter.
    pub range_field: Option<FieldName>,
    /// Date field driven by the period (bucket) filter.
    pub date_field: Option<FieldName>,
    /// Fixed rows-per-page for the view.
    pub page_size: usize,
    /// Currency symbol used when projecting currency fields.
    pub currency_symbol: String,
}

impl ViewSchema {
    pub fn new(name: impl Into<String>, title: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            fields,
            search_fields: Vec::new(),
            status_field: None,
            range_field: None,
            date_field: None,
            page_size: 10,
            currency_symbol: "$".to_string(),
        }
    }

    #[must_use]
    pub fn with_search_fields(mut self, fields: Vec<FieldName>) -> Self {
        self.search_fields = fields;
        self
    }

    #[must_use]
    pub fn with_status_field(mut self, field: impl Into<FieldName>) -> Self {
        self.status_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_range_field(mut self, field: impl Into<FieldName>) -> Self {
        self.range_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_date_field(mut self, field: impl Into<FieldName>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name.as_str() == name)
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.field(name).map(|f| f.field_type)
    }
}
