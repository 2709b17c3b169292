//! View projection: pure per-row mapping from typed values to
//! presentation fields.
//!
//! No business decisions happen here, only derivation: currency and
//! number grouping, `Mon D, YYYY` dates, badge tones for enum values,
//! intensity tiers for numeric indicators.

use chrono::{Datelike, NaiveDate};

use posview_model::{
    BadgeTone, FieldDef, FieldName, FieldType, FieldValue, Row, RowId, Tier, ViewSchema,
};

/// Placeholder rendered for missing values.
const MISSING_TEXT: &str = "-";

/// One rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCell {
    pub field: FieldName,
    pub text: String,
    /// Badge tone for enum fields carrying a badge map.
    pub badge: Option<BadgeTone>,
    /// Intensity tier for numeric fields carrying thresholds.
    pub tier: Option<Tier>,
    /// Right-align numeric and currency columns.
    pub numeric: bool,
}

/// One rendered row, cells in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub id: RowId,
    pub cells: Vec<ProjectedCell>,
}

/// Project a row through the view schema.
pub fn project_row(row: &Row, schema: &ViewSchema) -> ProjectedRow {
    let cells = schema
        .fields
        .iter()
        .map(|def| project_cell(row.get(def.name.as_str()), def, &schema.currency_symbol))
        .collect();
    ProjectedRow {
        id: row.id.clone(),
        cells,
    }
}

pub fn project_rows(rows: &[Row], schema: &ViewSchema) -> Vec<ProjectedRow> {
    rows.iter().map(|row| project_row(row, schema)).collect()
}

fn project_cell(value: &FieldValue, def: &FieldDef, currency_symbol: &str) -> ProjectedCell {
    let text = match value {
        FieldValue::Missing => MISSING_TEXT.to_string(),
        FieldValue::Text(s) | FieldValue::Enum(s) => s.clone(),
        FieldValue::Number(n) => format_grouped(*n, 0),
        FieldValue::Currency(n) => format_currency(*n, currency_symbol),
        FieldValue::Date(d) => format_date(*d),
    };
    let badge = match value {
        FieldValue::Enum(s) => def.badges.as_ref().map(|map| map.tone_for(s)),
        _ => None,
    };
    let tier = value
        .as_number()
        .and_then(|n| def.tiers.map(|t| t.tier_for(n)));
    ProjectedCell {
        field: def.name.clone(),
        text,
        badge,
        tier,
        numeric: matches!(def.field_type, FieldType::Number | FieldType::Currency),
    }
}

/// Format a number with comma grouping and a fixed number of decimals,
/// en-US style: `1234567.89` → `1,234,567.89`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let negative = int_part.starts_with('-');
    let digits = if negative { &int_part[1..] } else { int_part };

    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.extend(grouped.into_iter().rev());
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a monetary amount: `$1,234.56`, negatives as `-$1,234.56`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{symbol}{}", format_grouped(-value, 2))
    } else {
        format!("{symbol}{}", format_grouped(value, 2))
    }
}

/// Format a date as `Mon D, YYYY` (en-US short month), e.g. `Mar 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%b"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use posview_model::{BadgeMap, TierThresholds};

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(format_grouped(1_234.0, 0), "1,234");
        assert_eq!(format_grouped(1_234_567.89, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(-1_234.5, 2), "-1,234.50");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(125_000.0, "$"), "$125,000.00");
        assert_eq!(format_currency(-12_500.0, "$"), "-$12,500.00");
        assert_eq!(format_currency(5.5, "€"), "€5.50");
    }

    #[test]
    fn date_renders_short_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date(date), "Dec 31, 2023");
    }

    #[test]
    fn unknown_enum_value_gets_neutral_badge() {
        let def = FieldDef::new("status", "Status", FieldType::Enum)
            .with_badges(BadgeMap::new().with("Active", BadgeTone::Success));
        let cell = project_cell(&FieldValue::Enum("Archived".into()), &def, "$");
        assert_eq!(cell.badge, Some(BadgeTone::Neutral));
        let cell = project_cell(&FieldValue::Enum("Active".into()), &def, "$");
        assert_eq!(cell.badge, Some(BadgeTone::Success));
    }

    #[test]
    fn tiers_follow_per_view_thresholds() {
        let def = FieldDef::new("products", "Products", FieldType::Number)
            .with_tiers(TierThresholds::new(100.0, 40.0));
        let cell = project_cell(&FieldValue::Number(120.0), &def, "$");
        assert_eq!(cell.tier, Some(Tier::High));
        assert_eq!(cell.text, "120");
        let cell = project_cell(&FieldValue::Number(12.0), &def, "$");
        assert_eq!(cell.tier, Some(Tier::Low));
    }

    #[test]
    fn missing_renders_placeholder_without_badge_or_tier() {
        let def = FieldDef::new("status", "Status", FieldType::Enum)
            .with_badges(BadgeMap::new().with("Active", BadgeTone::Success));
        let cell = project_cell(&FieldValue::Missing, &def, "$");
        assert_eq!(cell.text, "-");
        assert_eq!(cell.badge, None);
        assert_eq!(cell.tier, None);
    }

    #[test]
    fn projection_keeps_schema_field_order() {
        let schema = ViewSchema::new(
            "brands",
            "Brands",
            vec![
                FieldDef::new("name", "Brand", FieldType::Text),
                FieldDef::new("products", "Products", FieldType::Number),
            ],
        );
        let row = Row::new("b1")
            .with_field("products", FieldValue::Number(12.0))
            .with_field("name", FieldValue::Text("Nike".into()));
        let projected = project_row(&row, &schema);
        assert_eq!(projected.cells[0].text, "Nike");
        assert_eq!(projected.cells[1].text, "12");
        assert!(projected.cells[1].numeric);
    }
}
