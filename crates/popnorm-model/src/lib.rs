pub mod canonical;
pub mod error;
pub mod keywords;
pub mod options;
pub mod report;
pub mod table;

pub use canonical::{CanonicalRecord, CanonicalTable};
pub use error::{ModelError, Result};
pub use keywords::{ColumnRole, KeywordSets};
pub use options::NormalizeOptions;
pub use report::{
    CoercedCell, ColumnRoles, CoercionReason, Detection, IgnoredColumn, NormalizeReport,
    SkipReason, SkippedRow, TableShape, WideAgeColumn,
};
pub use table::{CellValue, RawColumn, RawTable};
