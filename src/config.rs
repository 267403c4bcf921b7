//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for Web Evidence, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults that match the original hardcoded values
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WEB_EVIDENCE_REPORT_DIR` | Directory for generated HTML reports | `reports` |
//! | `WEB_EVIDENCE_SCREENSHOT_DIR` | Directory where the runner stores screenshots | `screenshots` |
//! | `WEB_EVIDENCE_REPORT_TITLE` | Title shown in the report header | `Login Test Report` |
//! | `WEB_EVIDENCE_REPORT_SUBTITLE` | Subtitle shown in the report header | `Automated browser test evidence` |
//!
//! # Example
//!
//! ```bash
//! # Write reports somewhere other than ./reports
//! export WEB_EVIDENCE_REPORT_DIR="/var/tmp/qa-reports"
//! export WEB_EVIDENCE_REPORT_TITLE="Checkout Regression Suite"
//! ```

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values (matching original hardcoded values)
// ============================================================================

/// Default directory for generated reports
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Default directory for runner-captured screenshots
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Default report title
pub const DEFAULT_REPORT_TITLE: &str = "Login Test Report";

/// Default report subtitle
pub const DEFAULT_REPORT_SUBTITLE: &str = "Automated browser test evidence";

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the report output directory
pub const ENV_REPORT_DIR: &str = "WEB_EVIDENCE_REPORT_DIR";

/// Environment variable for the screenshot directory
pub const ENV_SCREENSHOT_DIR: &str = "WEB_EVIDENCE_SCREENSHOT_DIR";

/// Environment variable for the report title
pub const ENV_REPORT_TITLE: &str = "WEB_EVIDENCE_REPORT_TITLE";

/// Environment variable for the report subtitle
pub const ENV_REPORT_SUBTITLE: &str = "WEB_EVIDENCE_REPORT_SUBTITLE";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for Web Evidence
#[derive(Debug, Clone)]
pub struct Config {
    /// Report rendering and persistence settings
    pub report: ReportSettings,
    /// Screenshot lookup settings
    pub screenshots: ScreenshotSettings,
}

/// Report-related settings
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Directory where reports are written
    pub output_dir: String,
    /// Title shown in the report header block
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
}

/// Screenshot-related settings
#[derive(Debug, Clone)]
pub struct ScreenshotSettings {
    /// Directory where the scenario runner stores evidence images
    pub base_dir: String,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            report: ReportSettings::from_env(),
            screenshots: ScreenshotSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            report: ReportSettings::defaults(),
            screenshots: ScreenshotSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ReportSettings {
    /// Create report settings from environment variables
    pub fn from_env() -> Self {
        Self {
            output_dir: env::var(ENV_REPORT_DIR)
                .unwrap_or_else(|_| DEFAULT_REPORT_DIR.to_string()),
            title: env::var(ENV_REPORT_TITLE)
                .unwrap_or_else(|_| DEFAULT_REPORT_TITLE.to_string()),
            subtitle: env::var(ENV_REPORT_SUBTITLE)
                .unwrap_or_else(|_| DEFAULT_REPORT_SUBTITLE.to_string()),
        }
    }

    /// Create report settings with defaults
    pub fn defaults() -> Self {
        Self {
            output_dir: DEFAULT_REPORT_DIR.to_string(),
            title: DEFAULT_REPORT_TITLE.to_string(),
            subtitle: DEFAULT_REPORT_SUBTITLE.to_string(),
        }
    }
}

impl ScreenshotSettings {
    /// Create screenshot settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_dir: env::var(ENV_SCREENSHOT_DIR)
                .unwrap_or_else(|_| DEFAULT_SCREENSHOT_DIR.to_string()),
        }
    }

    /// Create screenshot settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_dir: DEFAULT_SCREENSHOT_DIR.to_string(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Get the report output directory (convenience function)
pub fn report_dir() -> String {
    get().report.output_dir.clone()
}

/// Get the report title (convenience function)
pub fn report_title() -> String {
    get().report.title.clone()
}

/// Get the screenshot base directory (convenience function)
pub fn screenshot_dir() -> String {
    get().screenshots.base_dir.clone()
}
