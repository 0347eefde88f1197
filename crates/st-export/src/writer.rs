//! CSV serialization of flattened rows.

use crate::ExportResult;
use crate::flatten::CsvRow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn write_rows<W: Write>(rows: &[CsvRow], writer: &mut csv::Writer<W>) -> ExportResult<()> {
    for row in rows {
        writer.write_record([row.key.as_str(), row.value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[CsvRow]) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(rows, &mut writer)
}

pub fn to_csv_string(rows: &[CsvRow]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(rows, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Appends `.csv` when the chosen path has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("csv")
    }
}
