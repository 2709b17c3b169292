//! Balance-sheet line items view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let category_badges = BadgeMap::new()
        .with("Assets", BadgeTone::Primary)
        .with("Liabilities", BadgeTone::Warning)
        .with("Equity", BadgeTone::Neutral);
    ViewSchema::new(
        "balance-sheet",
        "Balance Sheet",
        vec![
            FieldDef::new("item", "Line Item", FieldType::Text),
            FieldDef::new("category", "Category", FieldType::Enum).with_badges(category_badges),
            FieldDef::new("amount", "Amount", FieldType::Currency),
            FieldDef::new("as_of", "As Of", FieldType::Date),
        ],
    )
    .with_search_fields(vec!["item".into(), "category".into()])
    .with_status_field("category")
    .with_range_field("amount")
    .with_date_field("as_of")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("BS-001")
            .with_field("item", text("Cash and Equivalents"))
            .with_field("category", status("Assets"))
            .with_field("amount", money(130_000.00))
            .with_field("as_of", day(2024, 3, 31)),
        row("BS-002")
            .with_field("item", text("Inventory"))
            .with_field("category", status("Assets"))
            .with_field("amount", money(78_400.50))
            .with_field("as_of", day(2024, 3, 31)),
        row("BS-003")
            .with_field("item", text("Store Equipment"))
            .with_field("category", status("Assets"))
            .with_field("amount", money(24_150.00))
            .with_field("as_of", day(2024, 3, 31)),
        row("BS-004")
            .with_field("item", text("Accounts Payable"))
            .with_field("category", status("Liabilities"))
            .with_field("amount", money(31_200.75))
            .with_field("as_of", day(2024, 3, 31)),
        row("BS-005")
            .with_field("item", text("Short-Term Loan"))
            .with_field("category", status("Liabilities"))
            .with_field("amount", money(20_000.00))
            .with_field("as_of", day(2024, 2, 29)),
        row("BS-006")
            .with_field("item", text("Accrued Payroll"))
            .with_field("category", status("Liabilities"))
            .with_field("amount", money(9_875.10))
            .with_field("as_of", day(2024, 3, 31)),
        row("BS-007")
            .with_field("item", text("Owner Capital"))
            .with_field("category", status("Equity"))
            .with_field("amount", money(120_000.00))
            .with_field("as_of", day(2023, 12, 31)),
        row("BS-008")
            .with_field("item", text("Retained Earnings"))
            .with_field("category", status("Equity"))
            .with_field("amount", money(51_474.65))
            .with_field("as_of", day(2023, 12, 31)),
    ]
}
