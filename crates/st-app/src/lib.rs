//! Shared application service layer for the surface-tension browser.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing database loading, alloy selection, model evaluation, plot
//! composition and CSV export.

pub mod config;
pub mod database_service;
pub mod error;
pub mod export_service;
pub mod fit;
pub mod plot;
pub mod session;

// Re-export key types for convenience
pub use config::BrowserConfig;
pub use database_service::{DatabaseSummary, load_database, summarize};
pub use error::{AppError, AppResult};
pub use export_service::{ExportSummary, export_record};
pub use fit::{DEFAULT_FIT_SAMPLES, FitCurve, evaluate_model, fit_curve};
pub use plot::{
    FitSeries, MetadataLine, ObservedPoint, PlotSpec, SeriesStyle, compose, compose_with_samples,
};
pub use session::Session;
