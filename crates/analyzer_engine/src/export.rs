use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use analyzer_core::AnalysisResult;
use serde_json::json;
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

/// Renders a finished analysis as a Markdown document with a small front
/// matter header, mirroring what the report screen shows.
pub fn render_report_markdown(target: &str, result: &AnalysisResult, generated_utc: &str) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "---");
    let _ = writeln!(doc, "url: {target}");
    let _ = writeln!(doc, "score: {}", result.score);
    let _ = writeln!(doc, "critical: {}", result.counts.critical);
    let _ = writeln!(doc, "warnings: {}", result.counts.warnings);
    let _ = writeln!(doc, "passed: {}", result.counts.passed);
    let _ = writeln!(doc, "generated_utc: {generated_utc}");
    let _ = writeln!(doc, "---");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "# Accessibility Report");
    let _ = writeln!(doc);
    let _ = writeln!(doc, "Overall score: {}/100", result.score);
    let _ = writeln!(doc);
    let _ = writeln!(doc, "## Category scores");
    let _ = writeln!(doc);
    for entry in &result.category_scores {
        let _ = writeln!(
            doc,
            "- {}: {}/100 ({})",
            entry.category, entry.score, entry.description
        );
    }
    let _ = writeln!(doc);
    let _ = writeln!(doc, "## Issues");
    for issue in &result.issues {
        let _ = writeln!(doc);
        let _ = writeln!(doc, "### [{}] {}", issue.severity, issue.title);
        let _ = writeln!(doc);
        let _ = writeln!(doc, "{}", issue.description);
        let _ = writeln!(doc);
        let _ = writeln!(doc, "Impact: {}", issue.impact);
        if let Some(element) = &issue.element {
            let _ = writeln!(doc, "Element: `{element}`");
        }
        let _ = writeln!(doc, "Recommendation: {}", issue.recommendation);
    }
    doc
}

/// Machine-readable variant of the exported report.
pub fn render_report_json(
    target: &str,
    result: &AnalysisResult,
    generated_utc: &str,
) -> Result<String, ExportError> {
    let value = json!({
        "url": target,
        "generated_utc": generated_utc,
        "result": result,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Deterministic, filesystem-safe report filename derived from the target.
pub fn report_filename(target: &str, format: ExportFormat) -> String {
    let stripped = target
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let mut slug = String::with_capacity(stripped.len());
    let mut prev_underscore = false;
    for c in stripped.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            slug.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            slug.push('_');
            prev_underscore = true;
        }
    }
    let slug = slug.trim_matches(&['_', '.'][..]);
    let mut slug = slug.to_string();
    if slug.len() > 80 {
        slug.truncate(80);
    }
    if slug.is_empty() {
        slug = "report".to_string();
    }
    format!("{slug}-a11y-report.{}", format.extension())
}

/// Renders and atomically writes the report into `dir`, returning the path
/// of the written file.
pub fn export_report(
    dir: &Path,
    target: &str,
    result: &AnalysisResult,
    generated_utc: &str,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let content = match format {
        ExportFormat::Markdown => render_report_markdown(target, result, generated_utc),
        ExportFormat::Json => render_report_json(target, result, generated_utc)?,
    };
    let filename = report_filename(target, format);
    Ok(write_atomic(dir, &filename, &content)?)
}
