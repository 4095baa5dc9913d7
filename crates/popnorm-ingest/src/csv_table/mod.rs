//! CSV reading and writing.

mod cell;
mod reader;
mod writer;

pub use cell::{infer_cell, normalize_header};
pub use reader::{read_csv_reader, read_csv_str, read_csv_table};
pub use writer::{write_canonical_csv, write_canonical_csv_file};
