//! Analyzer core: pure analysis state machine and view-model helpers.
mod effect;
mod msg;
mod plan;
mod report;
mod state;
mod target;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use plan::ScanPlan;
pub use report::{
    AnalysisResult, CategoryScore, IssueCategory, IssueCounts, IssueRecord, Severity,
};
pub use state::{AnalysisState, AppState, LifecycleError, LifecycleOp, TickOutcome};
pub use target::{normalize, InvalidUrl, Target};
pub use update::update;
pub use view_model::{AppViewModel, ScreenView};
