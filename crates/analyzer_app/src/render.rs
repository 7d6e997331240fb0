//! Pure view-model to terminal-text rendering.

use analyzer_core::AnalysisResult;
use analyzer_engine::{render_chart, ChartKind};

pub fn progress_line(percent: u8, step_label: &str) -> String {
    // Padded so a shorter label fully overwrites the previous line.
    format!("[{percent:>3}%] {step_label:<45}")
}

pub fn report_lines(target: &str, result: &AnalysisResult, chart: ChartKind) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Accessibility Report for {target}"));
    lines.push(format!("Overall score: {}/100", result.score));
    lines.push(format!(
        "Critical: {}  Warnings: {}  Passed: {}",
        result.counts.critical, result.counts.warnings, result.counts.passed
    ));
    lines.push(String::new());

    lines.push(format!("Category breakdown ({chart} view)"));
    lines.extend(
        render_chart(chart, result)
            .lines()
            .map(ToOwned::to_owned),
    );
    lines.push(String::new());

    lines.push("Detailed issues".to_string());
    for issue in &result.issues {
        lines.push(String::new());
        lines.push(format!(
            "[{}] {} ({})",
            issue.severity, issue.title, issue.category
        ));
        lines.push(format!("  {}", issue.description));
        lines.push(format!("  Impact: {}", issue.impact));
        if let Some(element) = &issue.element {
            lines.push(format!("  Element: {element}"));
        }
        lines.push(format!("  Recommendation: {}", issue.recommendation));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_cover_summary_chart_and_issues() {
        let result = AnalysisResult::sample();
        let lines = report_lines("https://example.com", &result, ChartKind::Bar);
        let text = lines.join("\n");

        assert!(text.contains("Accessibility Report for https://example.com"));
        assert!(text.contains("Overall score: 78/100"));
        assert!(text.contains("Critical: 2  Warnings: 3  Passed: 15"));
        assert!(text.contains("Semantic HTML"));
        assert!(text.contains("[critical] Missing alt text on images (screen reader)"));
        assert!(text.contains("  Element: <button style=\"outline: none;\">Submit</button>"));
    }

    #[test]
    fn progress_line_shows_percent_and_label() {
        let line = progress_line(42, "Checking color contrast...");
        assert!(line.starts_with("[ 42%] Checking color contrast..."));
    }
}
