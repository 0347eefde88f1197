//! Frontend configuration shared by the CLI and the GUI.

use crate::fit::DEFAULT_FIT_SAMPLES;
use std::path::PathBuf;

pub const DATABASE_ENV: &str = "ST_DATABASE";
pub const FIT_SAMPLES_ENV: &str = "ST_FIT_SAMPLES";
pub const DEFAULT_DATABASE_FILE: &str = "database.json";

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Database opened at startup when it exists.
    pub database_path: PathBuf,
    /// Points along the model fit line.
    pub fit_samples: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            fit_samples: DEFAULT_FIT_SAMPLES,
        }
    }
}

impl BrowserConfig {
    /// Defaults overridden by `ST_DATABASE` / `ST_FIT_SAMPLES`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(DATABASE_ENV).ok(),
            std::env::var(FIT_SAMPLES_ENV).ok(),
        )
    }

    pub fn with_overrides(mut self, database: Option<String>, fit_samples: Option<String>) -> Self {
        if let Some(path) = database.filter(|p| !p.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(raw) = fit_samples {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.fit_samples = n,
                _ => tracing::warn!(
                    "Ignoring {}={:?}: expected a positive integer",
                    FIT_SAMPLES_ENV,
                    raw
                ),
            }
        }
        self
    }
}
