//! Shape detection results and normalization diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout of a raw population table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    /// One row per (region, age) with explicit age and population columns.
    Long,
    /// One row per region with one population column per age.
    Wide,
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("long"),
            Self::Wide => f.write_str("wide"),
        }
    }
}

/// Column indices resolved for each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub region: usize,
    /// True when `region` came from a keyword match rather than the
    /// first-column fallback.
    pub region_matched: bool,
    pub age: Option<usize>,
    pub population: Option<usize>,
}

/// A wide-shape column whose name carries an age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideAgeColumn {
    pub column: usize,
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub roles: ColumnRoles,
    pub shape: TableShape,
    /// Qualifying age columns; empty for long-shape tables.
    pub age_columns: Vec<WideAgeColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The age cell contains no digit run.
    NoAgeDigits { value: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgeDigits { value } => write!(f, "no age digits in '{value}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoercionReason {
    Missing,
    Unparseable { value: String },
    Negative { value: String },
    NonFinite,
}

impl fmt::Display for CoercionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing value"),
            Self::Unparseable { value } => write!(f, "not a number: '{value}'"),
            Self::Negative { value } => write!(f, "negative value: {value}"),
            Self::NonFinite => f.write_str("non-finite number"),
        }
    }
}

/// A population cell that was replaced by zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercedCell {
    pub row: usize,
    pub column: String,
    pub reason: CoercionReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredColumn {
    pub column: usize,
    pub name: String,
}

/// Everything the normalizer degraded silently during one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub detection: Detection,
    pub skipped_rows: Vec<SkippedRow>,
    pub coerced_cells: Vec<CoercedCell>,
    /// Wide shape only: columns without an extractable age.
    pub ignored_columns: Vec<IgnoredColumn>,
}

impl NormalizeReport {
    pub fn new(detection: Detection) -> Self {
        Self {
            detection,
            skipped_rows: Vec::new(),
            coerced_cells: Vec::new(),
            ignored_columns: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped_rows.is_empty() && self.coerced_cells.is_empty()
    }
}
