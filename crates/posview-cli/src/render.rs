//! Terminal rendering: comfy-table output plus the pagination footer.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use posview_core::{ListPage, ProjectedRow};
use posview_model::{BadgeTone, Tier, ViewSchema};
use posview_views::ViewDef;

/// Render one page of projected rows as a table.
pub fn print_list(schema: &ViewSchema, page: &ListPage, projected: &[ProjectedRow]) {
    println!("{}", schema.title);
    if page.is_empty() {
        println!(
            "No rows match the active filters. Loosen --search/--status/--min/--max/--period, \
             or omit them to clear all filters."
        );
        return;
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("ID")];
    header.extend(schema.fields.iter().map(|f| header_cell(&f.label)));
    table.set_header(header);
    apply_table_style(&mut table);
    for (index, def) in schema.fields.iter().enumerate() {
        let numeric = matches!(
            def.field_type,
            posview_model::FieldType::Number | posview_model::FieldType::Currency
        );
        if numeric {
            align_column(&mut table, index + 1, CellAlignment::Right);
        }
    }

    for row in projected {
        let mut cells = vec![Cell::new(row.id.as_str())];
        cells.extend(row.cells.iter().map(value_cell));
        table.add_row(cells);
    }
    println!("{table}");
    println!("{}", format_footer(page));
    println!("{}", format_pager(page));
}

/// Render the view registry.
pub fn print_views(views: &[ViewDef]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("View"),
        header_cell("Title"),
        header_cell("Rows"),
        header_cell("Page Size"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for view in views {
        table.add_row(vec![
            Cell::new(view.name()),
            Cell::new(view.title()),
            Cell::new(view.seed_rows().len()),
            Cell::new(view.schema().page_size),
        ]);
    }
    println!("{table}");
}

/// `Showing 11-12 of 12 rows · page 2/2`
pub fn format_footer(page: &ListPage) -> String {
    if page.is_empty() {
        return format!("Showing 0 of 0 rows · page 1/{}", page.total_pages);
    }
    format!(
        "Showing {}-{} of {} rows · page {}/{}",
        page.first_index, page.last_index, page.total_count, page.current_page, page.total_pages
    )
}

/// `Pages: 4 5 [6] 7 8 ...` — brackets mark the current page, the
/// trailing marker appears only when pages beyond the window are more
/// than one step away.
pub fn format_pager(page: &ListPage) -> String {
    let mut out = String::from("Pages:");
    for number in &page.window_pages {
        if *number == page.current_page {
            out.push_str(&format!(" [{number}]"));
        } else {
            out.push_str(&format!(" {number}"));
        }
    }
    if page.has_ellipsis {
        out.push_str(" ...");
    }
    out
}

fn value_cell(cell: &posview_core::ProjectedCell) -> Cell {
    let mut rendered = Cell::new(&cell.text);
    if let Some(badge) = cell.badge {
        if let Some(color) = badge_color(badge) {
            rendered = rendered.fg(color);
        }
    }
    match cell.tier {
        Some(Tier::High) => rendered = rendered.add_attribute(Attribute::Bold),
        Some(Tier::Low) => rendered = rendered.add_attribute(Attribute::Dim),
        _ => {}
    }
    rendered
}

fn badge_color(tone: BadgeTone) -> Option<Color> {
    match tone {
        BadgeTone::Primary => Some(Color::Cyan),
        BadgeTone::Success => Some(Color::Green),
        BadgeTone::Warning => Some(Color::Yellow),
        BadgeTone::Error => Some(Color::Red),
        BadgeTone::Neutral => None,
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
