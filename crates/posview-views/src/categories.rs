//! Product categories view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, TierThresholds, ViewSchema};

use crate::{count, row, status, text};

pub fn schema() -> ViewSchema {
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("Hidden", BadgeTone::Warning)
        .with("Inactive", BadgeTone::Error);
    ViewSchema::new(
        "categories",
        "Categories",
        vec![
            FieldDef::new("name", "Category", FieldType::Text),
            FieldDef::new("parent", "Parent", FieldType::Text),
            // Lower cutoffs than brands: categories are narrower groupings.
            FieldDef::new("products", "Products", FieldType::Number)
                .with_tiers(TierThresholds::new(50.0, 20.0)),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into(), "parent".into()])
    .with_status_field("status")
    .with_range_field("products")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("CAT-001")
            .with_field("name", text("Running Shoes"))
            .with_field("parent", text("Footwear"))
            .with_field("products", count(86.0))
            .with_field("status", status("Active")),
        row("CAT-002")
            .with_field("name", text("Trail Shoes"))
            .with_field("parent", text("Footwear"))
            .with_field("products", count(34.0))
            .with_field("status", status("Active")),
        row("CAT-003")
            .with_field("name", text("Sandals"))
            .with_field("parent", text("Footwear"))
            .with_field("products", count(12.0))
            .with_field("status", status("Hidden")),
        row("CAT-004")
            .with_field("name", text("Jackets"))
            .with_field("parent", text("Apparel"))
            .with_field("products", count(58.0))
            .with_field("status", status("Active")),
        row("CAT-005")
            .with_field("name", text("Shorts"))
            .with_field("parent", text("Apparel"))
            .with_field("products", count(41.0))
            .with_field("status", status("Active")),
        row("CAT-006")
            .with_field("name", text("Socks"))
            .with_field("parent", text("Apparel"))
            .with_field("products", count(27.0))
            .with_field("status", status("Active")),
        row("CAT-007")
            .with_field("name", text("Water Bottles"))
            .with_field("parent", text("Accessories"))
            .with_field("products", count(15.0))
            .with_field("status", status("Active")),
        row("CAT-008")
            .with_field("name", text("Discontinued Gear"))
            .with_field("parent", text("Accessories"))
            .with_field("products", count(3.0))
            .with_field("status", status("Inactive")),
    ]
}
