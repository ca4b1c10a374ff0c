use nh_core::NhError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for import/export operations
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Errors from the import/export pipelines
#[derive(Error, Debug)]
pub enum SyncError {
    /// CSV header differs from the fixed column order
    #[error("header is not correct, must be id,group,name,cidr,description,domain_id,location,country_code (found {found})")]
    HeaderMismatch {
        /// Header as read from the file
        found: String,
    },

    /// A row cannot be imported; the whole import stops
    #[error("row {line}: {message}")]
    Row {
        /// 1-based line number in the file
        line: u64,
        /// What was wrong with it
        message: String,
    },

    /// File parsed cleanly but held no rows
    #[error("no rows to import in {0}")]
    EmptyBatch(PathBuf),

    /// Input file cannot be opened
    #[error("cannot open {path}: {source}")]
    Open {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Backup was required and failed; nothing was sent
    #[error("backup failed, import aborted for safety: {0}")]
    SafetyAbort(String),

    /// The staged write came back empty
    #[error("staged write returned no data, the hierarchy was not imported")]
    Rejected,

    /// Transport or API error
    #[error(transparent)]
    Remote(#[from] NhError),
}
