//! Suppliers view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("On Hold", BadgeTone::Warning)
        .with("Terminated", BadgeTone::Error);
    ViewSchema::new(
        "suppliers",
        "Suppliers",
        vec![
            FieldDef::new("name", "Supplier", FieldType::Text),
            FieldDef::new("contact", "Contact", FieldType::Text),
            FieldDef::new("email", "Email", FieldType::Text),
            FieldDef::new("outstanding", "Outstanding", FieldType::Currency),
            FieldDef::new("since", "Since", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into(), "contact".into(), "email".into()])
    .with_status_field("status")
    .with_range_field("outstanding")
    .with_date_field("since")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("SUP-001")
            .with_field("name", text("Apex Footwear Ltd"))
            .with_field("contact", text("Dana Kim"))
            .with_field("email", text("dana@apexfootwear.example"))
            .with_field("outstanding", money(22_400.00))
            .with_field("since", day(2022, 3, 1))
            .with_field("status", status("Active")),
        row("SUP-002")
            .with_field("name", text("Summit Apparel Co"))
            .with_field("contact", text("Jorge Silva"))
            .with_field("email", text("jorge@summitapparel.example"))
            .with_field("outstanding", money(8_130.45))
            .with_field("since", day(2022, 5, 23))
            .with_field("status", status("Active")),
        row("SUP-003")
            .with_field("name", text("Harbor Packaging"))
            .with_field("contact", text("Mei Lin"))
            .with_field("email", text("mei@harborpack.example"))
            .with_field("outstanding", money(0.0))
            .with_field("since", day(2022, 10, 11))
            .with_field("status", status("Active")),
        row("SUP-004")
            .with_field("name", text("Northline Logistics"))
            .with_field("contact", text("Pavel Horak"))
            .with_field("email", text("pavel@northline.example"))
            .with_field("outstanding", money(3_675.20))
            .with_field("since", day(2023, 2, 6))
            .with_field("status", status("On Hold")),
        row("SUP-005")
            .with_field("name", text("Coastal Accessories"))
            .with_field("contact", text("Ruth Okafor"))
            .with_field("email", text("ruth@coastalacc.example"))
            .with_field("outstanding", money(14_980.00))
            .with_field("since", day(2023, 6, 29))
            .with_field("status", status("Active")),
        row("SUP-006")
            .with_field("name", text("Delta Sportswear"))
            .with_field("contact", text("Tomas Berg"))
            .with_field("email", text("tomas@deltasports.example"))
            .with_field("outstanding", money(540.90))
            .with_field("since", day(2021, 12, 2))
            .with_field("status", status("Terminated")),
    ]
}
