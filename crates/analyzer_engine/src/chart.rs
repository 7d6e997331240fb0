use std::fmt;

use analyzer_core::{AnalysisResult, CategoryScore};

/// Display mode for the category breakdown. Switching the mode only
/// changes presentation; every mode draws the same series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Radar,
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Radar,
        ChartKind::Pie,
        ChartKind::Bar,
        ChartKind::Line,
    ];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
        }
    }
}

/// The series every chart view draws from: the result's per-category
/// scores, untouched.
pub fn category_series(result: &AnalysisResult) -> &[CategoryScore] {
    &result.category_scores
}

/// Renders the category series as terminal text in the requested style.
pub fn render_chart(kind: ChartKind, result: &AnalysisResult) -> String {
    let series = category_series(result);
    let width = series
        .iter()
        .map(|entry| entry.category.len())
        .max()
        .unwrap_or(0);

    match kind {
        ChartKind::Bar => bar_chart(series, width),
        ChartKind::Radar => radar_chart(series, width),
        ChartKind::Pie => pie_chart(series, width),
        ChartKind::Line => line_chart(series, width),
    }
}

fn bar_chart(series: &[CategoryScore], width: usize) -> String {
    let mut out = String::new();
    for entry in series {
        let filled = usize::from(entry.score) / 2;
        out.push_str(&format!(
            "{:<width$} | {:<50} {:>3}\n",
            entry.category,
            "#".repeat(filled),
            entry.score,
        ));
    }
    out
}

fn radar_chart(series: &[CategoryScore], width: usize) -> String {
    // One spoke per axis, dots growing outward with the score.
    let mut out = String::new();
    for entry in series {
        let reach = usize::from(entry.score) / 5;
        out.push_str(&format!(
            "{:<width$} {:.<reach$}o {:>3}/100\n",
            entry.category, "", entry.score,
        ));
    }
    out
}

fn pie_chart(series: &[CategoryScore], width: usize) -> String {
    let total: u32 = series.iter().map(|entry| u32::from(entry.score)).sum();
    let mut out = String::new();
    for entry in series {
        let share = if total == 0 {
            0
        } else {
            (u32::from(entry.score) * 100 + total / 2) / total
        };
        out.push_str(&format!(
            "{:<width$} {:>3}% of total ({})\n",
            entry.category, share, entry.score,
        ));
    }
    out
}

fn line_chart(series: &[CategoryScore], width: usize) -> String {
    // A single marker per row at the score's position on a 0..100 axis.
    let mut out = String::new();
    for entry in series {
        let offset = usize::from(entry.score) / 2;
        out.push_str(&format!(
            "{:<width$} |{:>offset$} {:>3}\n",
            entry.category, "*", entry.score,
        ));
    }
    out
}
