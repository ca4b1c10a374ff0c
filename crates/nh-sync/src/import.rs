//! CSV file → staged remote hierarchy.
//!
//! The file is read and validated in full before anything touches the API:
//!
//! 1. header must equal the fixed column order
//! 2. every row must carry integer `id` / `domain_id`, otherwise the import
//!    stops with the offending line number
//! 3. invalid `name`, `cidr`, `group`, `location` or `country_code` values
//!    are dropped from their row and reported
//! 4. with the safety switch on, the deployed hierarchy is backed up; a
//!    failed backup stops the import
//! 5. the batch replaces the staged hierarchy in one PUT
//!
//! Steps 1-3 are [`read_batch`], steps 4-5 are [`stage_batch`].

use crate::backup::backup_current_hierarchy;
use crate::{HierarchySource, SyncError, SyncResult};
use nh_client::ClientConfig;
use nh_core::transcode::{self, FieldIssue};
use nh_core::{StagedNetwork, TabularRow};
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Knobs taken from the operating configuration
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Back up the deployed hierarchy before writing
    pub safety: bool,
    /// Directory for backups
    pub backup_dir: PathBuf,
}

impl ImportOptions {
    /// Options from the operating configuration
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            safety: config.safety,
            backup_dir: config.backup_dir.clone(),
        }
    }
}

/// A CSV file that parsed cleanly, ready to be staged
#[derive(Debug, Clone)]
pub struct ParsedBatch {
    /// File the rows came from
    pub path: PathBuf,
    /// One record per data row, in file order
    pub networks: Vec<StagedNetwork>,
    /// Fields dropped along the way
    pub issues: Vec<FieldIssue>,
}

/// Outcome of a successful import
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Rows sent in the staged write
    pub imported: usize,
    /// Fields dropped along the way
    pub issues: Vec<FieldIssue>,
    /// Backup file, when the safety switch was on
    pub backup: Option<PathBuf>,
}

/// Import `csv_path` into the staged hierarchy of `source`.
///
/// Same as [`read_batch`] followed by [`stage_batch`].
pub async fn import<S: HierarchySource + ?Sized>(
    source: &S,
    csv_path: &Path,
    options: &ImportOptions,
) -> SyncResult<ImportReport> {
    let batch = read_batch(csv_path)?;
    stage_batch(source, &batch, options).await
}

/// Back up the deployed hierarchy (safety on) and replace the staged
/// hierarchy with `batch` in one PUT.
///
/// A batch without rows is refused before anything touches the API.
pub async fn stage_batch<S: HierarchySource + ?Sized>(
    source: &S,
    batch: &ParsedBatch,
    options: &ImportOptions,
) -> SyncResult<ImportReport> {
    if batch.networks.is_empty() {
        return Err(SyncError::EmptyBatch(batch.path.clone()));
    }

    let backup = if options.safety {
        Some(backup_current_hierarchy(source, &options.backup_dir).await?)
    } else {
        warn!("safety switch is off, importing without a backup of the current hierarchy");
        None
    };

    info!(rows = batch.networks.len(), "replacing staged network hierarchy");
    let response = source.stage_networks(&batch.networks).await?;
    if !is_truthy(&response) {
        warn!(file = %batch.path.display(), "staged write returned no data");
        return Err(SyncError::Rejected);
    }

    Ok(ImportReport {
        imported: batch.networks.len(),
        issues: batch.issues.clone(),
        backup,
    })
}

/// Parse and validate every row of `path`.
///
/// Dropped fields are returned in [`ParsedBatch::issues`] for the caller to
/// report; they are only logged at debug level here.
pub fn read_batch(path: &Path) -> SyncResult<ParsedBatch> {
    let file = File::open(path).map_err(|source| SyncError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let columns: Vec<&str> = headers.iter().collect();
    if !TabularRow::header_matches(columns.as_slice()) {
        return Err(SyncError::HeaderMismatch {
            found: columns.join(","),
        });
    }

    let mut networks = Vec::new();
    let mut issues = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // header is line 1
        let fallback_line = index as u64 + 2;
        let record = record.map_err(|e| SyncError::Row {
            line: e.position().map_or(fallback_line, csv::Position::line),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(fallback_line, csv::Position::line);

        let row: TabularRow = record
            .deserialize(Some(&headers))
            .map_err(|e| SyncError::Row {
                line,
                message: e.to_string(),
            })?;
        let out = transcode::from_tabular_row(&row).map_err(|e| SyncError::Row {
            line,
            message: e.to_string(),
        })?;

        for issue in &out.issues {
            debug!(line, %issue, "dropping invalid field");
        }
        issues.extend(out.issues);
        networks.push(out.network);
    }

    Ok(ParsedBatch {
        path: path.to_path_buf(),
        networks,
        issues,
    })
}

/// Empty, null, false and zero responses count as failure.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
