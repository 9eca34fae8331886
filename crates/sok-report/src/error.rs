//! Errors raised while reading the systematization data or writing artifacts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A data file is absent or unreadable.
    #[error("Cannot read data source {}: {source}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV (bad quoting, invalid UTF-8, ...).
    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the report depends on is not in the header row.
    #[error("Missing column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    /// An artifact or the output directory could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
