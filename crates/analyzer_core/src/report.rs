use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Passed,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Passed => write!(f, "passed"),
        }
    }
}

/// Which aspect of accessibility an issue touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    ScreenReader,
    Visual,
    Structure,
    Keyboard,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCategory::ScreenReader => write!(f, "screen reader"),
            IssueCategory::Visual => write!(f, "visual"),
            IssueCategory::Structure => write!(f, "structure"),
            IssueCategory::Keyboard => write!(f, "keyboard"),
        }
    }
}

/// One finding in a report: what was checked, what it means for users and
/// what to do about it. `element` carries the offending markup when the
/// finding points at a concrete node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub severity: Severity,
    pub category: IssueCategory,
    pub element: Option<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueCounts {
    pub critical: u32,
    pub warnings: u32,
    pub passed: u32,
}

/// Score for one audit category, 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u8,
    pub description: String,
}

/// A completed analysis: overall score, issue tallies, the ordered finding
/// list and the per-category breakdown the chart views are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub counts: IssueCounts,
    pub issues: Vec<IssueRecord>,
    pub category_scores: Vec<CategoryScore>,
}

impl AnalysisResult {
    /// The canned result attached to every simulated scan. No scanning
    /// engine exists; these findings stand in for one.
    pub fn sample() -> Self {
        Self {
            score: 78,
            counts: IssueCounts {
                critical: 2,
                warnings: 3,
                passed: 15,
            },
            issues: vec![
                IssueRecord {
                    title: "Missing alt text on images".to_string(),
                    description: "4 images on the page don't have alternative text, making \
                                  them inaccessible to screen reader users."
                        .to_string(),
                    impact: "Screen reader users won't know what information the images convey."
                        .to_string(),
                    severity: Severity::Critical,
                    category: IssueCategory::ScreenReader,
                    element: Some("<img src=\"header-image.jpg\">".to_string()),
                    recommendation: "Add descriptive alt text to all images that convey \
                                     information. Use empty alt text for decorative images."
                        .to_string(),
                },
                IssueRecord {
                    title: "Insufficient color contrast".to_string(),
                    description: "Text elements on the page don't have sufficient contrast \
                                  with their background."
                        .to_string(),
                    impact: "Users with low vision or color blindness may have difficulty \
                             reading the content."
                        .to_string(),
                    severity: Severity::Warning,
                    category: IssueCategory::Visual,
                    element: Some(
                        "<p style=\"color: #777; background-color: #eee;\">Light gray text \
                         on light background</p>"
                            .to_string(),
                    ),
                    recommendation: "Ensure text has a contrast ratio of at least 4.5:1 for \
                                     normal text and 3:1 for large text."
                        .to_string(),
                },
                IssueRecord {
                    title: "Proper heading structure".to_string(),
                    description: "The page uses proper heading structure with h1-h6 elements \
                                  in a hierarchical order."
                        .to_string(),
                    impact: "Good heading structure helps screen reader users navigate the \
                             content more easily."
                        .to_string(),
                    severity: Severity::Passed,
                    category: IssueCategory::Structure,
                    element: None,
                    recommendation: "Continue using semantic heading structure throughout \
                                     the site."
                        .to_string(),
                },
                IssueRecord {
                    title: "Missing focus indicators".to_string(),
                    description: "Interactive elements don't have visible focus indicators \
                                  when navigating with keyboard."
                        .to_string(),
                    impact: "Keyboard users won't be able to tell which element is currently \
                             focused."
                        .to_string(),
                    severity: Severity::Critical,
                    category: IssueCategory::Keyboard,
                    element: Some("<button style=\"outline: none;\">Submit</button>".to_string()),
                    recommendation: "Never remove outline without providing an alternative \
                                     focus indicator."
                        .to_string(),
                },
            ],
            category_scores: vec![
                CategoryScore {
                    category: "Semantic HTML".to_string(),
                    score: 75,
                    description: "Use of proper HTML elements for their intended purpose"
                        .to_string(),
                },
                CategoryScore {
                    category: "ARIA Usage".to_string(),
                    score: 85,
                    description: "Proper implementation of ARIA attributes".to_string(),
                },
                CategoryScore {
                    category: "Keyboard Nav".to_string(),
                    score: 60,
                    description: "Navigability and operability using keyboard alone".to_string(),
                },
                CategoryScore {
                    category: "Color Contrast".to_string(),
                    score: 90,
                    description: "Sufficient contrast between text and background".to_string(),
                },
                CategoryScore {
                    category: "Text Alternatives".to_string(),
                    score: 70,
                    description: "Alternative text for non-text content".to_string(),
                },
                CategoryScore {
                    category: "Mobile Friendly".to_string(),
                    score: 80,
                    description: "Usability on mobile and touch devices".to_string(),
                },
            ],
        }
    }
}
