//! CSV import/export engine for the QRadar network hierarchy.
//!
//! - [`export()`] writes the deployed hierarchy to a CSV file
//! - [`import()`] validates a CSV file, backs up the current hierarchy and
//!   replaces the staged hierarchy in one write
//! - [`inspect`] holds the read-only domain and version queries
//!
//! Everything talks to the API through [`HierarchySource`], implemented for
//! [`nh_client::QRadarClient`].

#![doc(html_root_url = "https://docs.rs/nh-sync/1.0.0")]

mod error;
mod source;

pub mod backup;
pub mod export;
pub mod import;
pub mod inspect;

#[cfg(test)]
mod fake;

pub use error::{SyncError, SyncResult};
pub use export::{export, export_strict, DEFAULT_EXPORT_FILE};
pub use import::{import, read_batch, stage_batch, ImportOptions, ImportReport, ParsedBatch};
pub use source::HierarchySource;
