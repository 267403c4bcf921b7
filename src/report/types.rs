use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome status of a single test scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// All assertions of the scenario succeeded
    #[serde(rename = "PASS")]
    Pass,

    /// An expected UI state was not reached
    #[serde(rename = "FAIL")]
    Fail,
}

impl TestStatus {
    /// Whether this status counts toward the passed total
    pub fn is_pass(self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

/// Tagged result of one scenario execution, as produced by the runner.
///
/// The reporter is agnostic to how the tag was produced; assertion failures
/// on the runner side arrive here as `Failure` rather than as errors.
#[derive(Debug, Clone)]
pub enum ScenarioResult {
    /// The scenario reached its expected state
    Success {
        /// What was actually observed
        detail: String,
        /// Screenshot captured at the success state, if any
        evidence: Option<PathBuf>,
    },

    /// The scenario did not reach its expected state
    Failure {
        /// Description of the failure
        reason: String,
        /// Screenshot captured at the failure state, if any
        evidence: Option<PathBuf>,
    },
}

/// One test-outcome record per scenario attempt.
///
/// Created by the scenario-runner collaborator for both the success and
/// failure path; the run list is fully materialized before rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Human-readable test name
    pub name: String,

    /// Derived strictly from whether the scenario's assertions succeeded
    pub status: TestStatus,

    /// Short scenario label (e.g., "Valid login")
    pub scenario: String,

    /// What the scenario does
    pub description: String,

    /// Expected result text
    pub expected: String,

    /// Observed result text (failure description when status is FAIL)
    pub actual: String,

    /// Wall-clock span of the scenario's execution, computed even on failure
    pub duration_seconds: f64,

    /// Path to the evidence screenshot, if one was captured
    pub screenshot_path: Option<PathBuf>,
}

impl TestOutcome {
    /// Build an outcome from a tagged scenario result.
    ///
    /// Derives `status` and `actual` from the tag; everything else is carried
    /// through verbatim.
    pub fn from_scenario(
        name: impl Into<String>,
        scenario: impl Into<String>,
        description: impl Into<String>,
        expected: impl Into<String>,
        result: ScenarioResult,
        duration_seconds: f64,
    ) -> Self {
        let (status, actual, screenshot_path) = match result {
            ScenarioResult::Success { detail, evidence } => (TestStatus::Pass, detail, evidence),
            ScenarioResult::Failure { reason, evidence } => (TestStatus::Fail, reason, evidence),
        };
        Self {
            name: name.into(),
            status,
            scenario: scenario.into(),
            description: description.into(),
            expected: expected.into(),
            actual,
            duration_seconds,
            screenshot_path,
        }
    }
}

/// Aggregate counters for a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of outcomes in the run
    pub total: usize,

    /// Outcomes with status PASS
    pub passed: usize,

    /// Outcomes with status FAIL
    pub failed: usize,
}

impl ReportSummary {
    /// Count a run's outcomes. Always satisfies `passed + failed == total`.
    pub fn of(outcomes: &[TestOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.status.is_pass()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

/// Decode a JSON array of outcomes, as handed over by the scenario-runner
/// collaborator across a process boundary.
pub fn outcomes_from_json(json: &str) -> ReportResult<Vec<TestOutcome>> {
    Ok(serde_json::from_str(json)?)
}

/// Result type for reporter operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Error types for reporter operations
#[derive(Debug)]
pub enum ReportError {
    /// I/O error creating the report directory or writing the document
    Io(std::io::Error),

    /// Serialization error decoding outcome input
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "I/O error: {}", err),
            ReportError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err)
    }
}
