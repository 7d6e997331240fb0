use crate::report::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub screen: ScreenView,
    pub last_error: Option<String>,
    pub dirty: bool,
}

/// Which of the three screens the UI should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenView {
    #[default]
    Idle,
    Analyzing {
        target: String,
        percent: u8,
        step_label: String,
    },
    Complete {
        target: String,
        result: AnalysisResult,
    },
}
