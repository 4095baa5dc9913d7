//! Raw tabular input as handed over by a loader.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single cell of a raw table.
///
/// Loaders decide the variant; the normalizer only relies on the
/// stringified form (for digit extraction) and on numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(v) => write!(f, "{v}"),
            // f64 Display never uses exponent notation and drops a zero fraction.
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered, column-major table with untyped column names.
///
/// Every column holds the same number of values; this is checked on
/// construction so downstream code can index rows without bounds juggling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    columns: Vec<RawColumn>,
    row_count: usize,
}

impl RawTable {
    pub fn new(columns: Vec<RawColumn>) -> Result<Self> {
        let row_count = columns.first().map_or(0, |column| column.values.len());
        for column in &columns {
            if column.values.len() != row_count {
                return Err(ModelError::RaggedColumns {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.values.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Builds a table from row-major data, padding short rows with nulls
    /// and dropping cells beyond the header width.
    pub fn from_rows<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut columns: Vec<RawColumn> = headers
            .into_iter()
            .map(|name| RawColumn::new(name, Vec::new()))
            .collect();
        let mut row_count = 0usize;
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.values.push(cells.next().unwrap_or(CellValue::Null));
            }
            row_count += 1;
        }
        if columns.is_empty() {
            row_count = 0;
        }
        Self { columns, row_count }
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&RawColumn> {
        self.columns.get(index)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Cell at (row, column), or `None` when either index is out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.columns.get(column)?.values.get(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_columns() {
        let err = RawTable::new(vec![
            RawColumn::new("a", vec![CellValue::Int(1), CellValue::Int(2)]),
            RawColumn::new("b", vec![CellValue::Int(1)]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::RaggedColumns {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn from_rows_pads_and_truncates() {
        let table = RawTable::from_rows(
            ["a", "b"],
            vec![
                vec![CellValue::from("x")],
                vec![CellValue::from("y"), CellValue::Int(2), CellValue::Int(3)],
            ],
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), Some(&CellValue::Null));
        assert_eq!(table.cell(1, 1), Some(&CellValue::Int(2)));
        assert_eq!(table.cell(1, 2), None);
    }

    #[test]
    fn display_matches_stringified_cells() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Float(23.0).to_string(), "23");
        assert_eq!(CellValue::Float(230.0).to_string(), "230");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::text("23세").to_string(), "23세");
    }
}
