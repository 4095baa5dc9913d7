//! Long and wide reshaping into canonical records.

use popnorm_model::{
    CanonicalRecord, CanonicalTable, CoercedCell, NormalizeOptions, NormalizeReport, RawTable,
    SkipReason, SkippedRow, WideAgeColumn,
};
use tracing::trace;

use crate::coerce::{Coerced, coerce_population};
use crate::digits::extract_age;

fn region_value(table: &RawTable, row: usize, column: usize) -> String {
    table
        .cell(row, column)
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn population_value(
    table: &RawTable,
    row: usize,
    column: usize,
    options: NormalizeOptions,
    report: &mut NormalizeReport,
) -> u64 {
    let Some(cell) = table.cell(row, column) else {
        return 0;
    };
    match coerce_population(cell, options) {
        Coerced::Value(value) => value,
        Coerced::Zeroed(reason) => {
            trace!(row, column, %reason, "population coerced to zero");
            let name = table
                .column(column)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            report.coerced_cells.push(CoercedCell {
                row,
                column: name,
                reason,
            });
            0
        }
    }
}

/// One record per row; rows whose age cell has no digits are dropped.
pub fn reshape_long(
    table: &RawTable,
    region: usize,
    age: usize,
    population: usize,
    options: NormalizeOptions,
    report: &mut NormalizeReport,
) -> CanonicalTable {
    let mut out = CanonicalTable::default();
    for row in 0..table.row_count() {
        let age_text = table
            .cell(row, age)
            .map(ToString::to_string)
            .unwrap_or_default();
        let Some(age_value) = extract_age(&age_text) else {
            trace!(row, "row skipped: no age digits");
            report.skipped_rows.push(SkippedRow {
                row,
                reason: SkipReason::NoAgeDigits { value: age_text },
            });
            continue;
        };
        let population = population_value(table, row, population, options, report);
        out.push(CanonicalRecord {
            region: region_value(table, row, region),
            age: age_value,
            population,
        });
    }
    out
}

/// One record per (row, age column), rows first.
pub fn reshape_wide(
    table: &RawTable,
    region: usize,
    age_columns: &[WideAgeColumn],
    options: NormalizeOptions,
    report: &mut NormalizeReport,
) -> CanonicalTable {
    let mut out = CanonicalTable::new(Vec::with_capacity(table.row_count() * age_columns.len()));
    for row in 0..table.row_count() {
        let region_name = region_value(table, row, region);
        for column in age_columns {
            let population = population_value(table, row, column.column, options, report);
            out.push(CanonicalRecord {
                region: region_name.clone(),
                age: column.age,
                population,
            });
        }
    }
    out
}
