//! Database loading and introspection.

use st_db::{DbError, RecordSet};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of a loaded database for status lines and listings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSummary {
    pub record_count: usize,
    pub category_count: usize,
    pub observation_count: usize,
}

/// Load a database from a JSON file.
pub fn load_database(path: &Path) -> AppResult<RecordSet> {
    let set = st_db::load_json(path).map_err(|e| match e {
        DbError::Io(source) => AppError::DatabaseRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;
    tracing::info!(
        path = %path.display(),
        records = set.len(),
        "Loaded alloy database"
    );
    Ok(set)
}

pub fn summarize(set: &RecordSet) -> DatabaseSummary {
    DatabaseSummary {
        record_count: set.len(),
        category_count: set.categories().len(),
        observation_count: set.iter().map(|e| e.record.sample_count()).sum(),
    }
}
