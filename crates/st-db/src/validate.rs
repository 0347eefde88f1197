//! Record set validation logic.

use crate::record_set::RecordSet;
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error(
        "Series length mismatch in record '{id}': T_superheat={t_len}, sigma={sigma_len}, sigma_stddev={stddev_len}"
    )]
    SeriesLengthMismatch {
        id: String,
        t_len: usize,
        sigma_len: usize,
        stddev_len: usize,
    },

    #[error("Duplicate alloy name '{alloy}' in records '{first_id}' and '{second_id}'")]
    DuplicateAlloy {
        alloy: String,
        first_id: String,
        second_id: String,
    },
}

pub fn validate_record_set(set: &RecordSet) -> Result<(), ValidationError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for entry in set.iter() {
        let record = &entry.record;
        let t_len = record.t_superheat.len();
        if record.sigma.len() != t_len || record.sigma_stddev.len() != t_len {
            return Err(ValidationError::SeriesLengthMismatch {
                id: entry.id.clone(),
                t_len,
                sigma_len: record.sigma.len(),
                stddev_len: record.sigma_stddev.len(),
            });
        }

        if let Some(first_id) = seen.insert(entry.alloy(), &entry.id) {
            return Err(ValidationError::DuplicateAlloy {
                alloy: entry.alloy().to_string(),
                first_id: first_id.to_string(),
                second_id: entry.id.clone(),
            });
        }
    }

    Ok(())
}
