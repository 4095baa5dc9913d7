//! Canonical tables out as CSV.

use std::io::Write;
use std::path::Path;

use csv::Writer;
use popnorm_model::CanonicalTable;

use crate::error::{IngestError, Result};

/// Writes `region,age,population` rows with a header line.
pub fn write_canonical_csv<W: Write>(writer: W, table: &CanonicalTable) -> Result<()> {
    let mut out = Writer::from_writer(writer);
    if table.is_empty() {
        out.write_record(["region", "age", "population"])?;
    }
    for record in table {
        out.serialize(record)?;
    }
    out.flush().map_err(|source| IngestError::CsvWrite(source.into()))?;
    Ok(())
}

pub fn write_canonical_csv_file(path: &Path, table: &CanonicalTable) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_canonical_csv(file, table)
}
