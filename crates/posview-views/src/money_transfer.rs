//! Money transfers between accounts.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let status_badges = BadgeMap::new()
        .with("Completed", BadgeTone::Success)
        .with("Pending", BadgeTone::Warning)
        .with("Failed", BadgeTone::Error);
    ViewSchema::new(
        "money-transfer",
        "Money Transfer",
        vec![
            FieldDef::new("reference", "Reference", FieldType::Text),
            FieldDef::new("from", "From Account", FieldType::Text),
            FieldDef::new("to", "To Account", FieldType::Text),
            FieldDef::new("amount", "Amount", FieldType::Currency),
            FieldDef::new("date", "Date", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["reference".into(), "from".into(), "to".into()])
    .with_status_field("status")
    .with_range_field("amount")
    .with_date_field("date")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("TRF-001")
            .with_field("reference", text("TRX-24-0101"))
            .with_field("from", text("Operating Cash"))
            .with_field("to", text("Petty Cash"))
            .with_field("amount", money(500.00))
            .with_field("date", day(2024, 3, 12))
            .with_field("status", status("Completed")),
        row("TRF-002")
            .with_field("reference", text("TRX-24-0102"))
            .with_field("from", text("Operating Cash"))
            .with_field("to", text("Payroll"))
            .with_field("amount", money(18_200.00))
            .with_field("date", day(2024, 3, 10))
            .with_field("status", status("Completed")),
        row("TRF-003")
            .with_field("reference", text("TRX-24-0103"))
            .with_field("from", text("Savings"))
            .with_field("to", text("Operating Cash"))
            .with_field("amount", money(25_000.00))
            .with_field("date", day(2024, 3, 13))
            .with_field("status", status("Pending")),
        row("TRF-004")
            .with_field("reference", text("TRX-24-0088"))
            .with_field("from", text("Operating Cash"))
            .with_field("to", text("Supplier Escrow"))
            .with_field("amount", money(7_450.50))
            .with_field("date", day(2024, 2, 28))
            .with_field("status", status("Completed")),
        row("TRF-005")
            .with_field("reference", text("TRX-24-0075"))
            .with_field("from", text("Petty Cash"))
            .with_field("to", text("Operating Cash"))
            .with_field("amount", money(120.00))
            .with_field("date", day(2024, 2, 14))
            .with_field("status", status("Failed")),
        row("TRF-006")
            .with_field("reference", text("TRX-23-0412"))
            .with_field("from", text("Operating Cash"))
            .with_field("to", text("Tax Reserve"))
            .with_field("amount", money(9_800.00))
            .with_field("date", day(2023, 12, 29))
            .with_field("status", status("Completed")),
        row("TRF-007")
            .with_field("reference", text("TRX-23-0398"))
            .with_field("from", text("Savings"))
            .with_field("to", text("Store Fit-Out"))
            .with_field("amount", money(42_000.00))
            .with_field("date", day(2023, 11, 6))
            .with_field("status", status("Completed")),
        row("TRF-008")
            .with_field("reference", text("TRX-24-0104"))
            .with_field("from", text("Operating Cash"))
            .with_field("to", text("Savings"))
            .with_field("amount", money(10_000.00))
            .with_field("date", day(2024, 3, 13))
            .with_field("status", status("Pending")),
    ]
}
