//! Browser session: the active record set and the category/alloy selection.
//!
//! The record set is only ever swapped as a whole. A failed load leaves the
//! previous set and selection exactly as they were.

use st_db::{AlloyEntry, RecordSet};
use std::path::{Path, PathBuf};

use crate::database_service::{DatabaseSummary, load_database, summarize};
use crate::error::{AppError, AppResult};
use crate::export_service::{ExportSummary, export_record};
use crate::plot::{PlotSpec, compose_with_samples};

#[derive(Debug, Default)]
pub struct Session {
    records: Option<RecordSet>,
    source: Option<PathBuf>,
    selected_category: Option<String>,
    selected_alloy: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_path(&mut self, path: &Path) -> AppResult<DatabaseSummary> {
        match load_database(path) {
            Ok(set) => {
                let summary = summarize(&set);
                self.replace_records(set, Some(path.to_path_buf()));
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Rejected database; keeping previous records"
                );
                Err(e)
            }
        }
    }

    /// Install a new record set and clear the selection.
    pub fn replace_records(&mut self, set: RecordSet, source: Option<PathBuf>) {
        self.records = Some(set);
        self.source = source;
        self.selected_category = None;
        self.selected_alloy = None;
    }

    pub fn records(&self) -> Option<&RecordSet> {
        self.records.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    pub fn categories(&self) -> Vec<String> {
        self.records
            .as_ref()
            .map(RecordSet::categories)
            .unwrap_or_default()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Change the category filter (`None` shows every alloy). Any change
    /// clears the alloy selection. Returns the new alloy choices.
    pub fn select_category(&mut self, category: Option<String>) -> Vec<String> {
        if self.selected_category != category {
            tracing::debug!(?category, "Category filter changed");
            self.selected_category = category;
            self.selected_alloy = None;
        }
        self.alloy_choices()
    }

    /// Alloy names offered by the selector for the current filter.
    pub fn alloy_choices(&self) -> Vec<String> {
        let Some(set) = self.records.as_ref() else {
            return Vec::new();
        };
        match self.selected_category.as_deref() {
            Some(category) => set.alloy_names_in_category(category),
            None => set.alloy_names(),
        }
    }

    pub fn selected_alloy(&self) -> Option<&str> {
        self.selected_alloy.as_deref()
    }

    /// Select an alloy by name. Names outside the active category filter do
    /// not resolve. The previous selection is kept on failure.
    pub fn select_alloy(&mut self, name: &str) -> AppResult<&AlloyEntry> {
        {
            let set = self.records.as_ref().ok_or(AppError::NoDatabase)?;
            let entry = set.find_by_alloy_name(name)?;
            if let Some(category) = self.selected_category.as_deref()
                && entry.category() != category
            {
                return Err(AppError::NotFound(name.to_string()));
            }
        }

        tracing::debug!(alloy = name, "Alloy selected");
        self.selected_alloy = Some(name.to_string());
        self.current_record()
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    pub fn current_record(&self) -> Option<&AlloyEntry> {
        let set = self.records.as_ref()?;
        let name = self.selected_alloy.as_deref()?;
        set.find_by_alloy_name(name).ok()
    }

    pub fn current_plot(&self, fit_samples: usize) -> AppResult<PlotSpec> {
        let entry = self.current_record().ok_or(AppError::NoSelection)?;
        compose_with_samples(&entry.record, fit_samples)
    }

    pub fn export_current(&self, path: &Path) -> AppResult<ExportSummary> {
        let entry = self.current_record().ok_or(AppError::NoSelection)?;
        export_record(entry, path)
    }
}
