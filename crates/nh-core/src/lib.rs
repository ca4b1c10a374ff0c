//! Core types for the network hierarchy suite.
//!
//! This crate provides the foundational pieces shared by the client, the
//! sync engine and the CLI:
//!
//! - **Types**: the remote (`RemoteNetwork`), staged (`StagedNetwork`) and
//!   tabular (`TabularRow`) shapes of a network segment, plus domains and
//!   system metadata
//! - **Validators**: total format predicates in [`validate`]
//! - **Transcoder**: row/record mapping in [`transcode`]
//! - **Errors**: [`NhError`] and the [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use nh_core::{transcode, TabularRow};
//!
//! let row: TabularRow = /* read from CSV */;
//! let out = transcode::from_tabular_row(&row)?;
//! for issue in &out.issues {
//!     eprintln!("{issue}");
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/nh-core/1.0.0")]

mod error;
pub mod transcode;
pub mod types;
pub mod validate;

pub use error::{NhError, Result};
pub use types::*;
