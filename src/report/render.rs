//! HTML rendering of a test run.
//!
//! `render` turns an ordered batch of [`TestOutcome`] records into one
//! self-contained HTML document: inline CSS, inline click-to-zoom script, and
//! evidence screenshots re-encoded as base64 data URIs so the file has no
//! external dependencies. Rendering is a single pass over the outcomes; a
//! missing or unreadable screenshot degrades to a block without an image and
//! never fails the render.

use base64::Engine;
use std::fs;
use std::path::Path;

use crate::config::{self, ReportSettings};
use crate::report::types::{ReportSummary, TestOutcome, TestStatus};

/// Document skeleton. Placeholders are substituted once per render.
const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; padding: 20px; background: #2c3e50; color: white; border-radius: 8px; margin-bottom: 20px; }
        .summary { display: flex; justify-content: space-around; margin: 20px 0; }
        .summary-item { text-align: center; padding: 15px; border-radius: 8px; }
        .passed { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
        .failed { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
        .total { background: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }
        .test-case { margin: 15px 0; padding: 15px; border-radius: 8px; border-left: 5px solid; }
        .test-passed { border-left-color: #28a745; background: #f8fff9; }
        .test-failed { border-left-color: #dc3545; background: #fff8f8; }
        .screenshot { max-width: 400px; margin: 10px 0; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; }
        .screenshot:hover { transform: scale(1.02); transition: transform 0.2s; }
        .timestamp { text-align: center; color: #666; font-size: 0.9em; margin-top: 20px; }
        .screenshot-section { margin: 10px 0; }
        .screenshot-title { font-weight: bold; margin-bottom: 5px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{title}}</h1>
            <p>{{subtitle}}</p>
        </div>

        <div class="summary">
            <div class="summary-item total">
                <h3>Total</h3>
                <p>{{total}}</p>
            </div>
            <div class="summary-item passed">
                <h3>Passed</h3>
                <p>{{passed}}</p>
            </div>
            <div class="summary-item failed">
                <h3>Failed</h3>
                <p>{{failed}}</p>
            </div>
        </div>
{{cases}}
        <div class="timestamp">
            <p>Report generated at: {{generated_at}}</p>
        </div>
    </div>

    <script>
        // Toggle screenshots between thumbnail and centered full view on click
        document.addEventListener('DOMContentLoaded', function() {
            const screenshots = document.querySelectorAll('.screenshot');
            screenshots.forEach(img => {
                img.addEventListener('click', function() {
                    if (this.style.maxWidth === '90vw') {
                        this.style.maxWidth = '400px';
                        this.style.position = 'static';
                        this.style.zIndex = 'auto';
                    } else {
                        this.style.maxWidth = '90vw';
                        this.style.position = 'fixed';
                        this.style.top = '50%';
                        this.style.left = '50%';
                        this.style.transform = 'translate(-50%, -50%)';
                        this.style.zIndex = '1000';
                        this.style.background = 'white';
                        this.style.padding = '10px';
                        this.style.borderRadius = '8px';
                        this.style.boxShadow = '0 0 20px rgba(0,0,0,0.5)';
                    }
                });
            });
        });
    </script>
</body>
</html>
"#;

/// One detail block per outcome, in input order.
const CASE_TEMPLATE: &str = r#"        <div class="test-case {{status_class}}">
            <h3>Test {{index}}: {{name}} - {{badge}}</h3>
            <p><strong>Scenario:</strong> {{scenario}}</p>
            <p><strong>Description:</strong> {{description}}</p>
            <p><strong>Expected Result:</strong> {{expected}}</p>
            <p><strong>Actual Result:</strong> {{actual}}</p>
            <p><strong>Duration:</strong> {{duration}} seconds</p>
{{evidence}}        </div>
"#;

/// Evidence image section, present only when the screenshot was readable.
const EVIDENCE_TEMPLATE: &str = r#"            <div class="screenshot-section">
                <div class="screenshot-title">Evidence:</div>
                <img src="{{data_uri}}"
                     class="screenshot"
                     alt="Screenshot of test {{index}}"
                     title="Click to enlarge">
            </div>
"#;

/// Render a test run as a self-contained HTML document.
///
/// Title and subtitle come from the global configuration. The three summary
/// counters always satisfy `passed + failed == total`.
pub fn render(outcomes: &[TestOutcome]) -> String {
    render_with(&config::get().report, outcomes)
}

/// Render with explicit report settings (title, subtitle).
pub fn render_with(settings: &ReportSettings, outcomes: &[TestOutcome]) -> String {
    let summary = ReportSummary::of(outcomes);

    let mut cases = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        cases.push_str(&render_case(i + 1, outcome));
    }

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    REPORT_TEMPLATE
        .replace("{{title}}", &escape_html(&settings.title))
        .replace("{{subtitle}}", &escape_html(&settings.subtitle))
        .replace("{{total}}", &summary.total.to_string())
        .replace("{{passed}}", &summary.passed.to_string())
        .replace("{{failed}}", &summary.failed.to_string())
        .replace("{{cases}}", &cases)
        .replace("{{generated_at}}", &generated_at)
}

fn render_case(index: usize, outcome: &TestOutcome) -> String {
    let (status_class, badge) = match outcome.status {
        TestStatus::Pass => ("test-passed", "&#9989; PASSED"),
        TestStatus::Fail => ("test-failed", "&#10060; FAILED"),
    };

    let evidence = outcome
        .screenshot_path
        .as_deref()
        .and_then(|path| encode_evidence(path))
        .map(|data_uri| {
            EVIDENCE_TEMPLATE
                .replace("{{data_uri}}", &data_uri)
                .replace("{{index}}", &index.to_string())
        })
        .unwrap_or_default();

    CASE_TEMPLATE
        .replace("{{index}}", &index.to_string())
        .replace("{{status_class}}", status_class)
        .replace("{{badge}}", badge)
        .replace("{{name}}", &escape_html(&outcome.name))
        .replace("{{scenario}}", &escape_html(&outcome.scenario))
        .replace("{{description}}", &escape_html(&outcome.description))
        .replace("{{expected}}", &escape_html(&outcome.expected))
        .replace("{{actual}}", &escape_html(&outcome.actual))
        .replace("{{duration}}", &format!("{:.2}", outcome.duration_seconds))
        .replace("{{evidence}}", &evidence)
}

/// Read an evidence image and encode it as a base64 data URI.
///
/// Returns `None` when the file is missing or unreadable; that is a soft
/// condition and only warrants a warning. The MIME type is sniffed from the
/// file bytes, defaulting to PNG.
fn encode_evidence(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!(
                "Warning: could not read evidence image {}: {}",
                path.display(),
                err
            );
            return None;
        }
    };

    let mime = match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Jpeg) => "image/jpeg",
        Ok(image::ImageFormat::Gif) => "image/gif",
        _ => "image/png",
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Some(format!("data:{};base64,{}", mime, encoded))
}

/// Escape text for safe interpolation into HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::TestStatus;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn outcome(name: &str, status: TestStatus, duration: f64) -> TestOutcome {
        TestOutcome {
            name: name.to_string(),
            status,
            scenario: "Login".to_string(),
            description: "Drive the login form".to_string(),
            expected: "Expected state reached".to_string(),
            actual: "Observed state".to_string(),
            duration_seconds: duration,
            screenshot_path: None,
        }
    }

    fn settings() -> ReportSettings {
        ReportSettings::defaults()
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 30, 30]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .expect("Failed to encode test PNG");
        bytes
    }

    #[test]
    fn test_summary_counters_in_document() {
        let outcomes = vec![
            outcome("Valid login", TestStatus::Pass, 2.5),
            outcome("Bad username", TestStatus::Fail, 1.1),
        ];
        let html = render_with(&settings(), &outcomes);

        assert!(html.contains("<p>2</p>")); // total
        let pass_block = html.find("Test 1: Valid login").unwrap();
        let fail_block = html.find("Test 2: Bad username").unwrap();
        assert!(pass_block < fail_block, "blocks must appear in input order");
        assert!(html.contains("PASSED"));
        assert!(html.contains("FAILED"));
    }

    #[test]
    fn test_duration_formatted_to_two_decimals() {
        let html = render_with(&settings(), &[outcome("t", TestStatus::Pass, 2.5)]);
        assert!(html.contains("2.50 seconds"));
    }

    #[test]
    fn test_missing_screenshot_renders_without_image() {
        let mut o = outcome("Valid login", TestStatus::Pass, 1.0);
        o.screenshot_path = Some(PathBuf::from("screenshots/does_not_exist.png"));
        let html = render_with(&settings(), &[o]);
        assert!(!html.contains("<img"));
        assert!(html.contains("Test 1: Valid login"));
    }

    #[test]
    fn test_embedded_screenshot_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evidence.png");
        let bytes = png_bytes();
        std::fs::write(&path, &bytes).unwrap();

        let mut o = outcome("Valid login", TestStatus::Pass, 1.0);
        o.screenshot_path = Some(path);
        let html = render_with(&settings(), &[o]);

        let marker = "data:image/png;base64,";
        let start = html.find(marker).expect("data URI missing") + marker.len();
        let end = start + html[start..].find('"').expect("unterminated src");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&html[start..end])
            .expect("invalid base64 payload");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_outcome_text_is_html_escaped() {
        let mut o = outcome("<script>alert(1)</script>", TestStatus::Fail, 0.1);
        o.actual = "expected \"x\" & got <y>".to_string();
        let html = render_with(&settings(), &[o]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("expected &quot;x&quot; &amp; got &lt;y&gt;"));
    }

    #[test]
    fn test_empty_run_renders_zero_counters() {
        let html = render_with(&settings(), &[]);
        assert!(html.contains("<p>0</p>"));
        assert!(!html.contains("test-case"));
    }

    #[test]
    fn test_footer_timestamp_present() {
        let html = render_with(&settings(), &[]);
        assert!(html.contains("Report generated at: "));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
