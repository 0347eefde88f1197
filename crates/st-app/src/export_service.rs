//! CSV export of a single record.

use st_db::AlloyEntry;
use st_export::{flatten, with_default_extension, write_csv};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Final path, with the default extension applied.
    pub path: PathBuf,
    /// Data rows written, header excluded.
    pub row_count: usize,
}

pub fn export_record(entry: &AlloyEntry, path: &Path) -> AppResult<ExportSummary> {
    let path = with_default_extension(path);
    let rows = flatten(&entry.fields);

    write_csv(&path, &rows).map_err(|e| AppError::Export {
        path: path.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(
        alloy = %entry.alloy(),
        path = %path.display(),
        rows = rows.len() - 1,
        "Exported record to CSV"
    );

    Ok(ExportSummary {
        path,
        row_count: rows.len() - 1,
    })
}
