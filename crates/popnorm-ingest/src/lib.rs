//! Loading raw population tables and exporting canonical ones.
//!
//! - [`csv_table`]: UTF-8 CSV files into [`RawTable`](popnorm_model::RawTable),
//!   canonical tables back out as CSV.
//! - [`frame`]: conversions between Polars `DataFrame`s and the model types.

pub mod csv_table;
pub mod error;
pub mod frame;

pub use csv_table::{
    infer_cell, read_csv_str, read_csv_table, write_canonical_csv, write_canonical_csv_file,
};
pub use error::{IngestError, Result};
pub use frame::{any_to_cell, canonical_to_frame, raw_table_from_frame};
