//! Export formatters
//!
//! Structured (JSON) and report (HTML) renderings of an analysis session.
//! The file-writing entry points never propagate errors: they log and
//! return `false`.

pub mod domain;
pub mod infrastructure;

pub use domain::{ExportBundle, ReportData};
pub use infrastructure::{export_html, export_json, render_html, render_json};
