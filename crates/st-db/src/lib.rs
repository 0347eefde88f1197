//! st-db: alloy surface-tension database format, loading and queries.

pub mod fields;
pub mod record_set;
pub mod schema;
pub mod validate;

pub use fields::{FieldValue, RecordField, ScalarValue};
pub use record_set::{AlloyEntry, RecordSet};
pub use schema::*;
pub use validate::{ValidationError, validate_record_set};

pub type DbResult<T> = Result<T, DbError>;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Expected a JSON object for {what}")]
    NotAnObject { what: String },

    #[error("Record '{id}': {message}")]
    Record { id: String, message: String },

    #[error("Alloy not found: {alloy}")]
    NotFound { alloy: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DbError {
    /// True for every failure that rejects a database document.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, DbError::NotFound { .. })
    }
}

pub fn load_json(path: &std::path::Path) -> DbResult<RecordSet> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parse a whole database document. Either every record loads or none does.
pub fn parse_str(content: &str) -> DbResult<RecordSet> {
    let document: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Object(entries) = document else {
        return Err(DbError::NotAnObject {
            what: "database document".to_string(),
        });
    };

    let mut records = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        records.push(AlloyEntry::from_json(id, value)?);
    }

    let set = RecordSet::new(records);
    validate_record_set(&set)?;
    Ok(set)
}
