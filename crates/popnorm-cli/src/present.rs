//! Presentation helpers: ordering, filtering and terminal tables.
//!
//! The normalizer emits records in source order. Ordering and region
//! filtering are display concerns and live here.

use std::collections::HashMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use popnorm_model::{CanonicalTable, Detection, KeywordSets, NormalizeReport, RawTable};

/// Keeps the requested regions (all when `regions` is empty) and orders
/// records by region first-seen order, then age ascending.
pub fn display_order(table: &CanonicalTable, regions: &[String]) -> CanonicalTable {
    let rank: HashMap<&str, usize> = table
        .regions()
        .into_iter()
        .enumerate()
        .map(|(idx, region)| (region, idx))
        .collect();
    let mut records: Vec<_> = table
        .iter()
        .filter(|record| regions.is_empty() || regions.iter().any(|r| r.trim() == record.region))
        .cloned()
        .collect();
    records.sort_by_key(|record| {
        (
            rank.get(record.region.as_str()).copied().unwrap_or(usize::MAX),
            record.age,
        )
    });
    CanonicalTable::new(records)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn records_table(records: &CanonicalTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Age"),
        header_cell("Population"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.region),
            Cell::new(record.age),
            Cell::new(record.population),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn column_label(raw: &RawTable, index: Option<usize>) -> Cell {
    match index.and_then(|idx| raw.column(idx).map(|column| (idx, column))) {
        Some((idx, column)) => Cell::new(format!("{} (#{idx})", column.name)),
        None => dim_cell("-"),
    }
}

pub fn detection_table(raw: &RawTable, detection: &Detection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    let region_note = if detection.roles.region_matched {
        "region"
    } else {
        "region (first column)"
    };
    table.add_row(vec![
        Cell::new(region_note),
        column_label(raw, Some(detection.roles.region)),
    ]);
    table.add_row(vec![
        Cell::new("age"),
        column_label(raw, detection.roles.age),
    ]);
    table.add_row(vec![
        Cell::new("population"),
        column_label(raw, detection.roles.population),
    ]);
    table.add_row(vec![
        Cell::new("shape").add_attribute(Attribute::Bold),
        Cell::new(detection.shape).add_attribute(Attribute::Bold),
    ]);
    for column in &detection.age_columns {
        table.add_row(vec![
            dim_cell(format!("age {}", column.age)),
            Cell::new(format!("{} (#{})", column.name, column.column)),
        ]);
    }
    table
}

/// Diagnostics table, or `None` when nothing was degraded or ignored.
pub fn report_table(report: &NormalizeReport) -> Option<Table> {
    if report.is_clean() && report.ignored_columns.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Issue"),
    ]);
    apply_table_style(&mut table);
    for skipped in &report.skipped_rows {
        table.add_row(vec![
            Cell::new(skipped.row),
            dim_cell("-"),
            Cell::new(format!("dropped: {}", skipped.reason)).fg(Color::Yellow),
        ]);
    }
    for coerced in &report.coerced_cells {
        table.add_row(vec![
            Cell::new(coerced.row),
            Cell::new(&coerced.column),
            Cell::new(format!("set to 0: {}", coerced.reason)).fg(Color::Yellow),
        ]);
    }
    for ignored in &report.ignored_columns {
        table.add_row(vec![
            dim_cell("-"),
            Cell::new(&ignored.name),
            dim_cell("ignored: no age in column name"),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    Some(table)
}

pub fn keywords_table(keywords: &KeywordSets) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Keywords (priority order)")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("region"), Cell::new(keywords.region.join(", "))]);
    table.add_row(vec![Cell::new("age"), Cell::new(keywords.age.join(", "))]);
    table.add_row(vec![
        Cell::new("population"),
        Cell::new(keywords.population.join(", ")),
    ]);
    table
}
