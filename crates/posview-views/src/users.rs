//! Back-office users view.

use posview_model::{BadgeMap, BadgeTone, FieldDef, FieldType, Row, ViewSchema};

use crate::{day, row, status, text};

pub fn schema() -> ViewSchema {
    let role_badges = BadgeMap::new()
        .with("Admin", BadgeTone::Primary)
        .with("Manager", BadgeTone::Success)
        .with("Cashier", BadgeTone::Neutral);
    let status_badges = BadgeMap::new()
        .with("Active", BadgeTone::Success)
        .with("Suspended", BadgeTone::Error);
    ViewSchema::new(
        "users",
        "Users",
        vec![
            FieldDef::new("name", "Name", FieldType::Text),
            FieldDef::new("email", "Email", FieldType::Text),
            FieldDef::new("role", "Role", FieldType::Enum).with_badges(role_badges),
            FieldDef::new("last_login", "Last Login", FieldType::Date),
            FieldDef::new("status", "Status", FieldType::Enum).with_badges(status_badges),
        ],
    )
    .with_search_fields(vec!["name".into(), "email".into(), "role".into()])
    .with_status_field("status")
    .with_date_field("last_login")
}

pub fn seed_rows() -> Vec<Row> {
    vec![
        row("USR-001")
            .with_field("name", text("Priya Nair"))
            .with_field("email", text("priya@store.example"))
            .with_field("role", status("Admin"))
            .with_field("last_login", day(2024, 3, 13))
            .with_field("status", status("Active")),
        row("USR-002")
            .with_field("name", text("Marcus Webb"))
            .with_field("email", text("marcus@store.example"))
            .with_field("role", status("Manager"))
            .with_field("last_login", day(2024, 3, 12))
            .with_field("status", status("Active")),
        row("USR-003")
            .with_field("name", text("Elena Petrova"))
            .with_field("email", text("elena@store.example"))
            .with_field("role", status("Cashier"))
            .with_field("last_login", day(2024, 3, 13))
            .with_field("status", status("Active")),
        row("USR-004")
            .with_field("name", text("Sam Donohue"))
            .with_field("email", text("sam@store.example"))
            .with_field("role", status("Cashier"))
            .with_field("last_login", day(2024, 3, 9))
            .with_field("status", status("Active")),
        row("USR-005")
            .with_field("name", text("Tariq Hassan"))
            .with_field("email", text("tariq@store.example"))
            .with_field("role", status("Cashier"))
            .with_field("last_login", day(2024, 1, 22))
            .with_field("status", status("Suspended")),
        row("USR-006")
            .with_field("name", text("Grace Liu"))
            .with_field("email", text("grace@store.example"))
            .with_field("role", status("Manager"))
            .with_field("last_login", day(2024, 2, 28))
            .with_field("status", status("Active")),
    ]
}
