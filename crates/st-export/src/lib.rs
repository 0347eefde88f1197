//! st-export: key/value CSV export of a single database record.

pub mod flatten;
pub mod writer;

pub use flatten::{CsvRow, HEADER_KEY, HEADER_VALUE, flatten};
pub use writer::{to_csv_string, with_default_extension, write_csv, write_rows};

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
