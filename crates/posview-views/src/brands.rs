//! Product brands view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, TierThresholds, ViewSchema};

use crate::{count, day, row, status, text};

pub fn schema() -> ViewSchema {
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("Inactive", BadgeTone::Error);
    ViewSchema::new(
        "brands",
        "Brands",
        vec![
            FieldDef::new("name", "Brand", FieldType::Text),
            // Product-count intensity cutoffs are this view's own; other
            // views with counts carry different tables.
            FieldDef::new("products", "Products", FieldType::Number)
                .with_tiers(TierThresholds::new(100.0, 40.0)),
            FieldDef::new("created", "Created", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into()])
    .with_status_field("status")
    .with_range_field("products")
    .with_date_field("created")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("BRD-001")
            .with_field("name", text("Nike"))
            .with_field("products", count(152.0))
            .with_field("created", day(2022, 4, 12))
            .with_field("status", status("Active")),
        row("BRD-002")
            .with_field("name", text("Adidas"))
            .with_field("products", count(118.0))
            .with_field("created", day(2022, 4, 12))
            .with_field("status", status("Active")),
        row("BRD-003")
            .with_field("name", text("Puma"))
            .with_field("products", count(64.0))
            .with_field("created", day(2022, 7, 3))
            .with_field("status", status("Active")),
        row("BRD-004")
            .with_field("name", text("New Balance"))
            .with_field("products", count(47.0))
            .with_field("created", day(2023, 1, 18))
            .with_field("status", status("Active")),
        row("BRD-005")
            .with_field("name", text("Reebok"))
            .with_field("products", count(35.0))
            .with_field("created", day(2023, 2, 25))
            .with_field("status", status("Inactive")),
        row("BRD-006")
            .with_field("name", text("Asics"))
            .with_field("products", count(29.0))
            .with_field("created", day(2023, 5, 9))
            .with_field("status", status("Active")),
        row("BRD-007")
            .with_field("name", text("Under Armour"))
            .with_field("products", count(22.0))
            .with_field("created", day(2023, 9, 14))
            .with_field("status", status("Active")),
        row("BRD-008")
            .with_field("name", text("Fila"))
            .with_field("products", count(8.0))
            .with_field("created", day(2024, 1, 30))
            .with_field("status", status("Inactive")),
    ]
}
