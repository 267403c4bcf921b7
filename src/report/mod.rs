pub mod persist;
pub mod render;
pub mod types;

pub use persist::{generate_timestamp, persist, report_filename};
pub use render::{render, render_with};
pub use types::{
    ReportError, ReportResult, ReportSummary, ScenarioResult, TestOutcome, TestStatus,
    outcomes_from_json,
};
