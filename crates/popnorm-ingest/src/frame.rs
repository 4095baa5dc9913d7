//! Polars `DataFrame` conversions.
//!
//! Loaders that already hold a `DataFrame` (Excel or parquet readers, for
//! instance) hand it over through [`raw_table_from_frame`]; presentation
//! code that prefers Polars takes the result back via
//! [`canonical_to_frame`].

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use popnorm_model::{CanonicalTable, CellValue, RawColumn, RawTable};

use crate::error::{IngestError, Result};

/// Converts a Polars `AnyValue` to a model cell.
///
/// Integers and floats keep their numeric form, strings stay text, nulls
/// become [`CellValue::Null`] and anything else is stringified.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Int32(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Int(v),
        AnyValue::UInt32(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(CellValue::Float(v as f64), CellValue::Int),
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        other => {
            let dtype = other.dtype();
            if dtype.is_integer() {
                other.extract::<i64>().map_or(CellValue::Null, CellValue::Int)
            } else if dtype.is_float() {
                other.extract::<f64>().map_or(CellValue::Null, CellValue::Float)
            } else {
                CellValue::Text(other.to_string())
            }
        }
    }
}

pub fn raw_table_from_frame(df: &DataFrame) -> Result<RawTable> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let mut values = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            let value = column.get(idx).map_err(|e| IngestError::DataFrame {
                message: e.to_string(),
            })?;
            values.push(any_to_cell(value));
        }
        columns.push(RawColumn::new(column.name().to_string(), values));
    }
    Ok(RawTable::new(columns)?)
}

/// Builds a `region` / `age` / `population` frame in record order.
pub fn canonical_to_frame(table: &CanonicalTable) -> Result<DataFrame> {
    let regions: Vec<String> = table.iter().map(|record| record.region.clone()).collect();
    let ages: Vec<u32> = table.iter().map(|record| record.age).collect();
    let populations: Vec<u64> = table.iter().map(|record| record.population).collect();
    let columns: Vec<Column> = vec![
        Series::new("region".into(), regions).into_column(),
        Series::new("age".into(), ages).into_column(),
        Series::new("population".into(), populations).into_column(),
    ];
    DataFrame::new(columns).map_err(|e| IngestError::DataFrame {
        message: e.to_string(),
    })
}
