//! Command implementations for the `posview` binary.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{info, trace};

use posview_core::{
    CsvProvider, DatasetProvider, ListController, project_rows, range_from_bounds,
};
use posview_model::{
    BucketChoice, EnumChoice, FieldValue, FilterSpec, ModelError, Row, SortSpec, ViewSchema,
};
use posview_views::{ViewDef, all_views, find_view};

use posview_cli::logging::redact_value;
use posview_cli::render;

use crate::cli::{ExportArgs, FilterArgs, ListArgs};

/// `posview views` — print the registry.
pub fn run_views() -> Result<()> {
    let views = all_views();
    render::print_views(&views);
    Ok(())
}

/// `posview list` — run the pipeline for one view and render a page.
pub fn run_list(args: &ListArgs, today: NaiveDate) -> Result<()> {
    let view = find_view(&args.view)?;
    let schema = view.schema().clone();
    let rows = fetch_rows(&view, &args.filters)?;
    let page_size = args.page_size.unwrap_or(schema.page_size);

    let mut controller = ListController::new(rows, page_size, today);
    controller.set_filters(build_filters(&schema, &args.filters)?);
    controller.set_sort(build_sort(&schema, &args.filters)?);
    controller.request_page(args.page);

    let page = controller.page();
    for row in &page.rows {
        trace!(
            id = %row.id,
            fields = redact_value(&row_summary(row)),
            "rendering row"
        );
    }
    info!(
        view = %schema.name,
        matched = page.total_count,
        page = page.current_page,
        total_pages = page.total_pages,
        "list rendered"
    );

    let projected = project_rows(&page.rows, &schema);
    render::print_list(&schema, &page, &projected);
    Ok(())
}

/// `posview export` — write the filtered, sorted set (all pages) to CSV.
///
/// Values are written raw (ISO dates, undecorated numbers, empty cells for
/// missing), so the output loads back through the CSV provider unchanged.
pub fn run_export(args: &ExportArgs, today: NaiveDate) -> Result<()> {
    let view = find_view(&args.view)?;
    let schema = view.schema().clone();
    let rows = fetch_rows(&view, &args.filters)?;

    let mut controller = ListController::new(rows, schema.page_size, today);
    controller.set_filters(build_filters(&schema, &args.filters)?);
    controller.set_sort(build_sort(&schema, &args.filters)?);
    let exported = controller.filtered_sorted();

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut header = vec!["id".to_string()];
    header.extend(schema.fields.iter().map(|f| f.name.to_string()));
    writer.write_record(&header)?;
    for row in &exported {
        let mut record = vec![row.id.to_string()];
        record.extend(
            schema
                .fields
                .iter()
                .map(|f| raw_cell(row.get(f.name.as_str()))),
        );
        writer.write_record(&record)?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(view = %schema.name, rows = exported.len(), out = %args.out.display(), "export written");
    println!(
        "Exported {} rows from '{}' to {}",
        exported.len(),
        schema.name,
        args.out.display()
    );
    Ok(())
}

/// Resolve the dataset: an explicit CSV file, or the view's seed rows.
fn fetch_rows(view: &ViewDef, filters: &FilterArgs) -> Result<Vec<Row>> {
    match &filters.data {
        Some(path) => {
            let provider = CsvProvider::new(path, view.schema().clone());
            let rows = provider
                .fetch_rows()
                .with_context(|| format!("loading rows for view '{}'", view.name()))?;
            info!(view = view.name(), rows = rows.len(), "loaded dataset");
            Ok(rows)
        }
        None => Ok(view.seed_rows()),
    }
}

/// Map the filter flags onto specs, validating them against the schema.
fn build_filters(schema: &ViewSchema, args: &FilterArgs) -> Result<Vec<FilterSpec>> {
    let mut specs = Vec::new();
    if let Some(term) = &args.search {
        specs.push(FilterSpec::search(
            term.clone(),
            schema.search_fields.clone(),
        ));
    }
    if let Some(status) = &args.status {
        let Some(field) = &schema.status_field else {
            bail!("view '{}' has no status filter", schema.name);
        };
        specs.push(FilterSpec::equals(
            field.clone(),
            EnumChoice::from_input(status),
        ));
    }
    if args.min.is_some() || args.max.is_some() {
        let Some(field) = &schema.range_field else {
            bail!("view '{}' has no range filter", schema.name);
        };
        specs.push(range_from_bounds(
            field.clone(),
            args.min.as_deref(),
            args.max.as_deref(),
        ));
    }
    if let Some(period) = args.period {
        let Some(field) = &schema.date_field else {
            bail!("view '{}' has no period filter", schema.name);
        };
        specs.push(FilterSpec::bucket(
            field.clone(),
            BucketChoice::Period(period.to_period()),
        ));
    }
    Ok(specs)
}

fn build_sort(schema: &ViewSchema, args: &FilterArgs) -> Result<Option<SortSpec>> {
    let Some(key) = &args.sort else {
        return Ok(None);
    };
    if schema.field(key).is_none() {
        return Err(ModelError::UnknownField {
            view: schema.name.clone(),
            field: key.clone(),
        }
        .into());
    }
    let spec = if args.desc {
        SortSpec::descending(key.as_str())
    } else {
        SortSpec::ascending(key.as_str())
    };
    Ok(Some(spec))
}

/// One-line field dump for trace logging.
fn row_summary(row: &Row) -> String {
    row.fields
        .iter()
        .map(|(name, value)| format!("{name}={}", raw_cell(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The untyped rendition written to CSV exports; round-trips through the
/// CSV provider's cell parser.
fn raw_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Missing => String::new(),
        FieldValue::Text(s) | FieldValue::Enum(s) => s.clone(),
        FieldValue::Number(n) | FieldValue::Currency(n) => n.to_string(),
        FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
    }
}
