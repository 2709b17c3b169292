//! Sales invoices view.
//!
//! Twelve seed rows against the fixed page size of ten, so the second
//! page is reachable out of the box.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, money, row, status, text};

pub fn schema() -> ViewSchema {
    let payment_badges = BadgeMap::new()
        .with("Paid", BadgeTone::Success)
        .with("Pending", BadgeTone::Warning)
        .with("Overdue", BadgeTone::Error);
    ViewSchema::new(
        "sales",
        "Sales",
        vec![
            FieldDef::new("invoice", "Invoice", FieldType::Text),
            FieldDef::new("customer", "Customer", FieldType::Text),
            FieldDef::new("total", "Total", FieldType::Currency),
            FieldDef::new("date", "Date", FieldType::Date),
            FieldDef::new("payment", "Payment", FieldType::Enum).with_badges(payment_badges),
        ],
    )
    .with_search_fields(vec!["invoice".into(), "customer".into()])
    .with_status_field("payment")
    .with_range_field("total")
    .with_date_field("date")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        sale("INV-2401", "Ava Brooks", 342.50, (2024, 3, 13), "Paid"),
        sale("INV-2402", "Liam Ortiz", 89.99, (2024, 3, 13), "Paid"),
        sale("INV-2403", "Maya Chen", 1_204.00, (2024, 3, 12), "Pending"),
        sale("INV-2404", "Noah Patel", 56.25, (2024, 3, 11), "Paid"),
        sale("INV-2405", "Sofia Rossi", 415.80, (2024, 3, 10), "Paid"),
        sale("INV-2406", "Zara Ahmed", 2_310.00, (2024, 3, 8), "Pending"),
        sale("INV-2407", "Oliver Novak", 178.40, (2024, 3, 4), "Paid"),
        sale("INV-2408", "Isla Murphy", 820.15, (2024, 2, 27), "Overdue"),
        sale("INV-2409", "Ava Brooks", 99.00, (2024, 2, 20), "Paid"),
        sale("INV-2410", "Ethan Walker", 47.60, (2024, 2, 11), "Overdue"),
        sale("INV-2411", "Maya Chen", 640.30, (2024, 1, 29), "Paid"),
        sale("INV-2412", "Sofia Rossi", 1_150.75, (2024, 1, 15), "Paid"),
    ]
}

fn sale(invoice: &str, customer: &str, total: f64, date: (i32, u32, u32), payment: &str) -> Row {
    row(invoice)
        .with_field("invoice", text(invoice))
        .with_field("customer", text(customer))
        .with_field("total", money(total))
        .with_field("date", day(date.0, date.1, date.2))
        .with_field("payment", status(payment))
}
