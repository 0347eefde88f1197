//! In-memory record set and the lookups the selectors are built from.

use crate::fields::{RecordField, capture_fields};
use crate::schema::AlloyRecord;
use crate::{DbError, DbResult};
use serde_json::Value;
use std::collections::BTreeSet;

/// One database entry: opaque id, typed record and raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AlloyEntry {
    pub id: String,
    pub record: AlloyRecord,
    pub fields: Vec<RecordField>,
}

impl AlloyEntry {
    pub fn from_json(id: String, value: Value) -> DbResult<Self> {
        let fields = match &value {
            Value::Object(object) => capture_fields(object),
            _ => {
                return Err(DbError::NotAnObject {
                    what: format!("record '{id}'"),
                });
            }
        };

        let record: AlloyRecord = serde_json::from_value(value).map_err(|e| DbError::Record {
            id: id.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { id, record, fields })
    }

    pub fn alloy(&self) -> &str {
        &self.record.alloy
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }
}

/// Read-only set of records, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    entries: Vec<AlloyEntry>,
}

impl RecordSet {
    pub fn new(entries: Vec<AlloyEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlloyEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&AlloyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Distinct categories, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.category().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every alloy name in document order.
    pub fn alloy_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.alloy().to_string()).collect()
    }

    /// Alloy names whose category matches exactly, in document order.
    pub fn alloy_names_in_category(&self, category: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .map(|e| e.alloy().to_string())
            .collect()
    }

    pub fn find_by_alloy_name(&self, name: &str) -> DbResult<&AlloyEntry> {
        self.entries
            .iter()
            .find(|e| e.alloy() == name)
            .ok_or_else(|| DbError::NotFound {
                alloy: name.to_string(),
            })
    }
}
