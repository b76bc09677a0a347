/// Error taxonomy for a conversion run
///
/// Recoverable conditions (unknown priority ranks, unclassified result codes,
/// short hierarchy paths, empty documents) never reach this type; they are
/// substituted or logged in place. Everything here aborts the invocation.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid suite document {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Destination {0} is the source document itself")]
    DestinationIsSource(PathBuf),

    #[error("Spreadsheet rendering failed: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to print the statistics summary: {0}")]
    Summary(io::Error),

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
