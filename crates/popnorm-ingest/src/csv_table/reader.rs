//! CSV files into raw tables.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use popnorm_model::{CellValue, RawTable};
use tracing::debug;

use super::cell::{infer_cell, normalize_header};
use crate::error::{IngestError, Result};

/// Reads a UTF-8 CSV file. The first non-empty record is the header.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_csv_reader(file, path)
}

/// Reads CSV text held in memory.
pub fn read_csv_str(text: &str) -> Result<RawTable> {
    read_csv_reader(text.as_bytes(), Path::new("<input>"))
}

/// Reads CSV from any reader; `origin` is only used in error messages.
pub fn read_csv_reader<R: Read>(reader: R, origin: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| parse_error(err, origin))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(record.iter().map(normalize_header).collect());
        } else {
            rows.push(record.iter().map(infer_cell).collect());
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::NoHeaderDetected {
            path: origin.to_path_buf(),
        });
    };
    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(RawTable::from_rows(headers, rows))
}

fn parse_error(err: csv::Error, origin: &Path) -> IngestError {
    let path: PathBuf = origin.to_path_buf();
    match err.kind() {
        csv::ErrorKind::Utf8 { .. } => IngestError::Encoding { path },
        _ => IngestError::CsvParse {
            path,
            message: err.to_string(),
        },
    }
}
