//! Web Evidence - browser automation evidence tooling.
//!
//! This crate provides:
//! - An extraction collector that assembles raw per-item field lookups into
//!   fixed-schema records and exports them as CSV
//! - A test-run reporter that renders scenario outcomes into a single
//!   self-contained HTML document with embedded evidence screenshots
//! - Environment-based configuration for report locations and branding
//!
//! Browser driving itself is out of scope: the collaborators that query pages
//! and execute login scenarios hand their raw records to this crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use web_evidence::collector::{collect, export_csv, RawItem};
//!
//! let raw = vec![RawItem {
//!     name: Some("Air Jordan 1".to_string()),
//!     price: Some("$180".to_string()),
//!     ..Default::default()
//! }];
//! let items = collect(&raw);
//! export_csv(&items, Path::new("products.csv")).unwrap();
//! ```

pub mod collector;
pub mod config;
pub mod report;

// Re-export collector types
pub use collector::{
    CollectorError, CollectorResult, ExtractedItem, FieldLookup, ItemField, NOT_AVAILABLE,
    RawItem, collect, export_csv, items_to_csv, raw_items_from_json,
};

// Re-export reporter types
pub use report::{
    ReportError, ReportResult, ReportSummary, ScenarioResult, TestOutcome, TestStatus,
    generate_timestamp, outcomes_from_json, persist, render, render_with, report_filename,
};
