//! HTTP client for the QRadar configuration API.
//!
//! This crate provides [`QRadarClient`] for the network hierarchy, domain
//! management and system endpoints, and [`ClientConfig`], the operating
//! configuration read once at startup.

#![doc(html_root_url = "https://docs.rs/nh-client/1.0.0")]

mod client;
mod config;
pub mod api;

pub use client::{QRadarClient, QRadarClientBuilder};
pub use config::*;
pub use nh_core::{NhError, Result};
