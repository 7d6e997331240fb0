use analyzer_core::AnalysisResult;
use analyzer_engine::{
    export_report, render_report_json, render_report_markdown, report_filename, ExportFormat,
};
use pretty_assertions::assert_eq;

const GENERATED: &str = "2024-01-01T00:00:00Z";

#[test]
fn markdown_report_carries_front_matter_and_findings() {
    let result = AnalysisResult::sample();
    let doc = render_report_markdown("https://example.com", &result, GENERATED);

    assert!(doc.starts_with("---\n"));
    assert!(doc.contains("url: https://example.com"));
    assert!(doc.contains("score: 78"));
    assert!(doc.contains("critical: 2"));
    assert!(doc.contains("warnings: 3"));
    assert!(doc.contains("passed: 15"));
    assert!(doc.contains("generated_utc: 2024-01-01T00:00:00Z"));
    assert!(doc.contains("### [critical] Missing alt text on images"));
    assert!(doc.contains("- Keyboard Nav: 60/100"));
}

#[test]
fn json_report_round_trips() {
    let result = AnalysisResult::sample();
    let doc = render_report_json("https://example.com", &result, GENERATED).expect("encode");

    let value: serde_json::Value = serde_json::from_str(&doc).expect("parse");
    assert_eq!(value["url"], "https://example.com");
    assert_eq!(value["result"]["score"], 78);
    assert_eq!(value["result"]["counts"]["passed"], 15);
    assert_eq!(
        value["result"]["issues"]
            .as_array()
            .map(|issues| issues.len()),
        Some(4)
    );
}

#[test]
fn filename_is_deterministic_and_safe() {
    let fname = report_filename("https://example.com/foo?x=1", ExportFormat::Markdown);
    assert_eq!(fname, "example.com_foo_x_1-a11y-report.md");
    assert_eq!(
        fname,
        report_filename("https://example.com/foo?x=1", ExportFormat::Markdown)
    );

    let fname = report_filename("https://", ExportFormat::Json);
    assert_eq!(fname, "report-a11y-report.json");
}

#[test]
fn export_writes_the_report_into_the_directory() {
    let temp = tempfile::TempDir::new().expect("tempdir");
    let result = AnalysisResult::sample();

    let path = export_report(
        temp.path(),
        "https://example.com",
        &result,
        GENERATED,
        ExportFormat::Markdown,
    )
    .expect("export");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("example.com-a11y-report.md")
    );
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        written,
        render_report_markdown("https://example.com", &result, GENERATED)
    );
}

#[test]
fn export_replaces_a_previous_report() {
    let temp = tempfile::TempDir::new().expect("tempdir");
    let result = AnalysisResult::sample();

    let first = export_report(
        temp.path(),
        "https://example.com",
        &result,
        "2024-01-01T00:00:00Z",
        ExportFormat::Markdown,
    )
    .expect("first export");
    let second = export_report(
        temp.path(),
        "https://example.com",
        &result,
        "2024-02-02T00:00:00Z",
        ExportFormat::Markdown,
    )
    .expect("second export");

    assert_eq!(first, second);
    let written = std::fs::read_to_string(&second).expect("read back");
    assert!(written.contains("generated_utc: 2024-02-02T00:00:00Z"));
}
