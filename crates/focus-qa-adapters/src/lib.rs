//! Focus QA Adapters - External adapters for focus-qa.
//!
//! This crate provides adapters for:
//! - Text and JSON verdict reports
//! - TOML configuration

pub mod config;
pub mod report;

pub use config::{AppConfig, FocusConfig};
pub use report::{JsonReport, TextReport};
