//! Customers view. Email and phone are the PII fields the CLI redacts
//! from logs unless `--log-data` is passed.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("Inactive", BadgeTone::Neutral)
        .with("Blocked", BadgeTone::Error);
    ViewSchema::new(
        "customers",
        "Customers",
        vec![
            FieldDef::new("name", "Customer", FieldType::Text),
            FieldDef::new("email", "Email", FieldType::Text),
            FieldDef::new("phone", "Phone", FieldType::Text),
            FieldDef::new("spent", "Total Spent", FieldType::Currency),
            FieldDef::new("joined", "Joined", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into(), "email".into(), "phone".into()])
    .with_status_field("status")
    .with_range_field("spent")
    .with_date_field("joined")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("CUS-001")
            .with_field("name", text("Ava Brooks"))
            .with_field("email", text("ava.brooks@example.com"))
            .with_field("phone", text("555-0101"))
            .with_field("spent", money(4_820.40))
            .with_field("joined", day(2022, 6, 14))
            .with_field("status", status("Active")),
        row("CUS-002")
            .with_field("name", text("Liam Ortiz"))
            .with_field("email", text("liam.ortiz@example.com"))
            .with_field("phone", text("555-0102"))
            .with_field("spent", money(1_240.00))
            .with_field("joined", day(2022, 9, 2))
            .with_field("status", status("Active")),
        row("CUS-003")
            .with_field("name", text("Maya Chen"))
            .with_field("email", text("maya.chen@example.com"))
            .with_field("phone", text("555-0103"))
            .with_field("spent", money(9_310.25))
            .with_field("joined", day(2023, 1, 21))
            .with_field("status", status("Active")),
        row("CUS-004")
            .with_field("name", text("Noah Patel"))
            .with_field("email", text("noah.patel@example.com"))
            .with_field("phone", text("555-0104"))
            .with_field("spent", money(310.75))
            .with_field("joined", day(2023, 3, 8))
            .with_field("status", status("Inactive")),
        row("CUS-005")
            .with_field("name", text("Sofia Rossi"))
            .with_field("email", text("sofia.rossi@example.com"))
            .with_field("phone", text("555-0105"))
            .with_field("spent", money(2_150.90))
            .with_field("joined", day(2023, 7, 19))
            .with_field("status", status("Active")),
        row("CUS-006")
            .with_field("name", text("Ethan Walker"))
            .with_field("email", text("ethan.walker@example.com"))
            .with_field("phone", text("555-0106"))
            .with_field("spent", money(75.00))
            .with_field("joined", day(2023, 11, 30))
            .with_field("status", status("Blocked")),
        row("CUS-007")
            .with_field("name", text("Zara Ahmed"))
            .with_field("email", text("zara.ahmed@example.com"))
            .with_field("phone", text("555-0107"))
            .with_field("spent", money(6_480.10))
            .with_field("joined", day(2024, 1, 5))
            .with_field("status", status("Active")),
        row("CUS-008")
            .with_field("name", text("Oliver Novak"))
            .with_field("email", text("oliver.novak@example.com"))
            .with_field("phone", text("555-0108"))
            .with_field("spent", money(980.65))
            .with_field("joined", day(2024, 2, 17))
            .with_field("status", status("Active")),
        row("CUS-009")
            .with_field("name", text("Isla Murphy"))
            .with_field("email", text("isla.murphy@example.com"))
            .with_field("phone", text("555-0109"))
            .with_field("spent", money(15_020.00))
            .with_field("joined", day(2024, 3, 11))
            .with_field("status", status("Active")),
    ]
}
