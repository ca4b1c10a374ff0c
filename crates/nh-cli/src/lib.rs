//! # nh-cli
//!
//! Command-line front end for the network hierarchy suite.
//!
//! ## Actions
//!
//! - `--export-file [FILENAME]`: write the deployed hierarchy to CSV
//! - `--import-file FILENAME`: back up, validate and stage a CSV hierarchy
//! - `--check-domain`: list domains
//! - `--check-version`: show console release information

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
