//! Integration tests for the CSV dataset provider.

use std::io::Write;

use posview_core::{CsvProvider, DatasetProvider, ProviderError};
use posview_model::{FieldDef, FieldType, FieldValue, ViewSchema};

fn schema() -> ViewSchema {
    ViewSchema::new(
        "customers",
        "Customers",
        vec![
            FieldDef::new("name", "Name", FieldType::Text),
            FieldDef::new("status", "Status", FieldType::Enum),
            FieldDef::new("spent", "Total Spent", FieldType::Currency),
            FieldDef::new("joined", "Joined", FieldType::Date),
        ],
    )
}

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_typed_rows() {
    let file = write_csv(
        "id,name,status,spent,joined\n\
         c01,Ava Brooks,Active,1250.75,2024-01-15\n\
         c02,Liam Ortiz,Inactive,80,2023-11-02\n",
    );
    let provider = CsvProvider::new(file.path(), schema());
    let rows = provider.fetch_rows().expect("fetch rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id.as_str(), "c01");
    assert_eq!(rows[0].text("name"), Some("Ava Brooks"));
    assert_eq!(rows[0].number("spent"), Some(1250.75));
    assert_eq!(
        rows[1].get("status"),
        &FieldValue::Enum("Inactive".to_string())
    );
    assert_eq!(
        rows[1].date("joined").map(|d| d.to_string()),
        Some("2023-11-02".to_string())
    );
}

#[test]
fn blank_cells_become_missing() {
    let file = write_csv(
        "id,name,status,spent,joined\n\
         c01,Ava Brooks,,,\n",
    );
    let provider = CsvProvider::new(file.path(), schema());
    let rows = provider.fetch_rows().expect("fetch rows");
    assert!(rows[0].get("status").is_missing());
    assert!(rows[0].get("spent").is_missing());
    assert!(rows[0].get("joined").is_missing());
}

#[test]
fn unknown_columns_are_skipped_not_fatal() {
    let file = write_csv(
        "id,name,shoe_size\n\
         c01,Ava Brooks,42\n",
    );
    let provider = CsvProvider::new(file.path(), schema());
    let rows = provider.fetch_rows().expect("fetch rows");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("shoe_size").is_missing());
}

#[test]
fn untypable_cell_names_file_line_and_field() {
    let file = write_csv(
        "id,name,spent\n\
         c01,Ava Brooks,12.50\n\
         c02,Liam Ortiz,lots\n",
    );
    let provider = CsvProvider::new(file.path(), schema());
    let err = provider.fetch_rows().expect_err("must fail");
    match err {
        ProviderError::Cell { line, field, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(field, "spent");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_id_column_is_an_error() {
    let file = write_csv("name,spent\nAva,10\n");
    let provider = CsvProvider::new(file.path(), schema());
    assert!(matches!(
        provider.fetch_rows(),
        Err(ProviderError::MissingIdColumn { .. })
    ));
}
