//! Chart-of-accounts view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let type_badges = BadgeMap::new()
        .with("Asset", BadgeTone::Primary)
        .with("Liability", BadgeTone::Warning)
        .with("Equity", BadgeTone::Neutral)
        .with("Revenue", BadgeTone::Success)
        .with("Expense", BadgeTone::Error);
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("Inactive", BadgeTone::Error);
    ViewSchema::new(
        "accounts",
        "Accounts",
        vec![
            FieldDef::new("name", "Account", FieldType::Text),
            FieldDef::new("type", "Type", FieldType::Enum).with_badges(type_badges),
            FieldDef::new("balance", "Balance", FieldType::Currency),
            FieldDef::new("opened", "Opened", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into(), "type".into()])
    .with_status_field("status")
    .with_range_field("balance")
    .with_date_field("opened")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("ACC-001")
            .with_field("name", text("Operating Cash"))
            .with_field("type", status("Asset"))
            .with_field("balance", money(125_000.00))
            .with_field("opened", day(2022, 1, 10))
            .with_field("status", status("Active")),
        row("ACC-002")
            .with_field("name", text("Petty Cash"))
            .with_field("type", status("Asset"))
            .with_field("balance", money(5_000.00))
            .with_field("opened", day(2022, 1, 10))
            .with_field("status", status("Active")),
        row("ACC-003")
            .with_field("name", text("Accounts Receivable"))
            .with_field("type", status("Asset"))
            .with_field("balance", money(43_250.80))
            .with_field("opened", day(2022, 2, 1))
            .with_field("status", status("Active")),
        row("ACC-004")
            .with_field("name", text("Accounts Payable"))
            .with_field("type", status("Liability"))
            .with_field("balance", money(-12_500.00))
            .with_field("opened", day(2022, 2, 1))
            .with_field("status", status("Active")),
        row("ACC-005")
            .with_field("name", text("Sales Tax Payable"))
            .with_field("type", status("Liability"))
            .with_field("balance", money(-8_730.45))
            .with_field("opened", day(2022, 3, 15))
            .with_field("status", status("Active")),
        row("ACC-006")
            .with_field("name", text("Owner Equity"))
            .with_field("type", status("Equity"))
            .with_field("balance", money(90_000.00))
            .with_field("opened", day(2022, 1, 10))
            .with_field("status", status("Active")),
        row("ACC-007")
            .with_field("name", text("Product Sales"))
            .with_field("type", status("Revenue"))
            .with_field("balance", money(310_420.33))
            .with_field("opened", day(2022, 1, 10))
            .with_field("status", status("Active")),
        row("ACC-008")
            .with_field("name", text("Shipping Income"))
            .with_field("type", status("Revenue"))
            .with_field("balance", money(12_044.90))
            .with_field("opened", day(2023, 6, 20))
            .with_field("status", status("Inactive")),
        row("ACC-009")
            .with_field("name", text("Rent Expense"))
            .with_field("type", status("Expense"))
            .with_field("balance", money(-48_000.00))
            .with_field("opened", day(2022, 1, 10))
            .with_field("status", status("Active")),
        row("ACC-010")
            .with_field("name", text("Legacy Savings"))
            .with_field("type", status("Asset"))
            .with_field("balance", money(1_500.00))
            .with_field("opened", day(2021, 8, 5))
            .with_field("status", status("Inactive")),
    ]
}
