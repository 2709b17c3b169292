//! Dataset providers: where a view's rows come from.
//!
//! The pipeline never fetches data itself; a provider is injected per view
//! instance. The built-in implementations cover the seeded sample data and
//! CSV files; a remote-backed provider would implement the same trait.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use posview_model::{FieldType, FieldValue, Row, ViewSchema};

/// Supplies the ordered row collection for one view.
pub trait DatasetProvider {
    fn fetch_rows(&self) -> Result<Vec<Row>, ProviderError>;
}

/// In-memory provider over a fixed row set (seed data, tests).
#[derive(Debug, Clone, Default)]
pub struct SeedProvider {
    rows: Vec<Row>,
}

impl SeedProvider {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl DatasetProvider for SeedProvider {
    fn fetch_rows(&self) -> Result<Vec<Row>, ProviderError> {
        Ok(self.rows.clone())
    }
}

/// Loads rows from a CSV file, typing each cell per the view schema.
///
/// The file must carry a header row including an `id` column; remaining
/// headers are matched against schema fields, and headers the schema does
/// not know are skipped with a warning. Blank cells become
/// [`FieldValue::Missing`]; a non-blank cell that cannot be parsed under
/// the field's declared type is an error naming file, line, and field.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    path: PathBuf,
    schema: ViewSchema,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>, schema: ViewSchema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }
}

impl DatasetProvider for CsvProvider {
    fn fetch_rows(&self) -> Result<Vec<Row>, ProviderError> {
        read_csv_rows(&self.path, &self.schema)
    }
}

fn read_csv_rows(path: &Path, schema: &ViewSchema) -> Result<Vec<Row>, ProviderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ProviderError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader
        .headers()
        .map_err(|e| ProviderError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let id_index = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("id"))
        .ok_or_else(|| ProviderError::MissingIdColumn {
            path: path.to_path_buf(),
        })?;

    // Resolve each header against the schema once, not per record.
    let columns: Vec<Option<(usize, String, FieldType)>> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != id_index)
        .map(|(i, header)| match schema.field_type(header) {
            Some(field_type) => Some((i, header.to_string(), field_type)),
            None => {
                warn!(view = %schema.name, column = header, "skipping column not in view schema");
                None
            }
        })
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ProviderError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let id = record.get(id_index).unwrap_or_default();
        if id.is_empty() {
            return Err(ProviderError::MissingId {
                path: path.to_path_buf(),
                line,
            });
        }
        let mut row = Row::new(id);
        for column in columns.iter().flatten() {
            let (index, name, field_type) = column;
            let raw = record.get(*index).unwrap_or_default();
            let value = parse_cell(raw, *field_type).ok_or_else(|| ProviderError::Cell {
                path: path.to_path_buf(),
                line,
                field: name.clone(),
                value: raw.to_string(),
            })?;
            row = row.with_field(name.as_str(), value);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn parse_cell(raw: &str, field_type: FieldType) -> Option<FieldValue> {
    if raw.is_empty() {
        return Some(FieldValue::Missing);
    }
    match field_type {
        FieldType::Text => Some(FieldValue::Text(raw.to_string())),
        FieldType::Enum => Some(FieldValue::Enum(raw.to_string())),
        FieldType::Number => raw.parse::<f64>().ok().map(FieldValue::Number),
        FieldType::Currency => raw.parse::<f64>().ok().map(FieldValue::Currency),
        FieldType::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(FieldValue::Date),
    }
}

/// Errors raised while fetching rows from a provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Failed to read or parse the CSV file.
    #[error("failed to read dataset {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no `id` header.
    #[error("dataset {path} has no 'id' column")]
    MissingIdColumn { path: PathBuf },

    /// A record has an empty id.
    #[error("dataset {path} line {line}: empty row id")]
    MissingId { path: PathBuf, line: u64 },

    /// A cell could not be typed under the schema.
    #[error("dataset {path} line {line}: invalid {field} value '{value}'")]
    Cell {
        path: PathBuf,
        line: u64,
        field: String,
        value: String,
    },
}
