//! Integration tests for the full collect/export and render/persist pipelines

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use web_evidence::collector::{NOT_AVAILABLE, RawItem, collect, export_csv};
use web_evidence::config::ReportSettings;
use web_evidence::report::{
    ReportSummary, ScenarioResult, TestOutcome, TestStatus, persist, render_with,
};

fn write_test_png(path: &Path) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([40, 120, 200]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .expect("Failed to encode PNG");
    std::fs::write(path, &bytes).expect("Failed to write screenshot");
    bytes
}

#[test]
fn test_collect_and_export_pipeline() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("products.csv");

    let raw = vec![
        RawItem {
            name: Some("Air Jordan 1".to_string()),
            price: Some("$180".to_string()),
            variant_count: None,
            availability_status: Some("Sale".to_string()),
            detail_link: Some("/p/1".to_string()),
        },
        RawItem::default(),
    ];

    let items = collect(&raw);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].variant_count, NOT_AVAILABLE);
    assert_eq!(items[1].name, NOT_AVAILABLE);

    export_csv(&items, &csv_path).expect("Export failed");

    let written = std::fs::read_to_string(&csv_path).expect("CSV not written");
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("name,price,variantCount,availabilityStatus,detailLink")
    );
    assert_eq!(lines.next(), Some("Air Jordan 1,$180,N/A,Sale,/p/1"));
    assert_eq!(lines.next(), Some("N/A,N/A,N/A,N/A,N/A"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_render_and_persist_pipeline() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let screenshots = dir.path().join("screenshots");
    std::fs::create_dir_all(&screenshots).expect("Failed to create screenshots dir");

    let evidence_path = screenshots.join("login_success.png");
    let evidence_bytes = write_test_png(&evidence_path);

    let outcomes = vec![
        TestOutcome::from_scenario(
            "Login with valid credentials",
            "Valid login",
            "Login with correct username and password",
            "User logs in and sees the success page",
            ScenarioResult::Success {
                detail: "Success page displayed".to_string(),
                evidence: Some(evidence_path),
            },
            2.5,
        ),
        TestOutcome::from_scenario(
            "Login with invalid username",
            "Bad username",
            "Login with an unknown username",
            "Invalid-username error is shown",
            ScenarioResult::Failure {
                reason: "Timed out waiting for the error banner".to_string(),
                evidence: Some(screenshots.join("missing.png")),
            },
            1.1,
        ),
    ];

    let summary = ReportSummary::of(&outcomes);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);

    let html = render_with(&ReportSettings::defaults(), &outcomes);

    // Detail blocks appear in input order.
    let first = html.find("Login with valid credentials").unwrap();
    let second = html.find("Login with invalid username").unwrap();
    assert!(first < second);

    // The readable screenshot is embedded; decoding it recovers the file bytes.
    let marker = "data:image/png;base64,";
    let start = html.find(marker).expect("No embedded evidence") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&html[start..end])
        .expect("Invalid base64");
    assert_eq!(decoded, evidence_bytes);

    // Exactly one image: the missing screenshot block renders without one.
    assert_eq!(html.matches("<img").count(), 1);

    // Persist under reports/ with the timestamped filename pattern.
    let reports = dir.path().join("reports");
    let path = persist(&html, &reports).expect("Persist failed");
    assert!(path.exists());
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("test_report_"));
    assert!(name.ends_with(".html"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
}

#[test]
fn test_outcomes_survive_json_handoff() {
    // The scenario runner hands outcomes across a process boundary as JSON;
    // the reporter must see identical records on the other side.
    let outcome = TestOutcome {
        name: "Login with invalid password".to_string(),
        status: TestStatus::Fail,
        scenario: "Bad password".to_string(),
        description: "Login with a wrong password".to_string(),
        expected: "Invalid-password error is shown".to_string(),
        actual: "Error banner never appeared".to_string(),
        duration_seconds: 0.87,
        screenshot_path: Some(PathBuf::from("screenshots/error_password.png")),
    };

    let json = serde_json::to_string(&vec![outcome.clone()]).unwrap();
    let decoded: Vec<TestOutcome> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, outcome.name);
    assert_eq!(decoded[0].status, TestStatus::Fail);
    assert_eq!(decoded[0].screenshot_path, outcome.screenshot_path);

    let summary = ReportSummary::of(&decoded);
    assert_eq!(summary.passed + summary.failed, summary.total);
}
