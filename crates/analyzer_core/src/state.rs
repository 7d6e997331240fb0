use std::fmt;

use thiserror::Error;

use crate::plan::ScanPlan;
use crate::report::AnalysisResult;
use crate::target::{normalize, InvalidUrl, Target};
use crate::view_model::{AppViewModel, ScreenView};

/// The analysis lifecycle. Exactly one of these is live at a time and only
/// the owning [`AppState`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Analyzing {
        target: Target,
        percent: u8,
    },
    Complete {
        target: Target,
        result: AnalysisResult,
    },
}

impl AnalysisState {
    fn name(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "idle",
            AnalysisState::Analyzing { .. } => "analyzing",
            AnalysisState::Complete { .. } => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOp {
    Submit,
    Reset,
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleOp::Submit => write!(f, "submit"),
            LifecycleOp::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    InvalidTarget(#[from] InvalidUrl),
    #[error("{op} is not allowed while {state}")]
    InvalidTransition {
        op: LifecycleOp,
        state: &'static str,
    },
}

/// What one tick did to the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress advanced but the scan is still running.
    Advanced,
    /// Progress hit 100 and the state moved to `Complete`.
    Finished,
    /// No scan was running; the tick was a stale timer firing.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    input: String,
    analysis: AnalysisState,
    plan: ScanPlan,
    result_fixture: AnalysisResult,
    last_error: Option<LifecycleError>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_plan(ScanPlan::default())
    }

    pub fn with_plan(plan: ScanPlan) -> Self {
        Self {
            input: String::new(),
            analysis: AnalysisState::Idle,
            plan,
            result_fixture: AnalysisResult::sample(),
            last_error: None,
            dirty: false,
        }
    }

    /// Replaces the result attached when a scan completes.
    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.result_fixture = result;
        self
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn plan(&self) -> &ScanPlan {
        &self.plan
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn last_error(&self) -> Option<&LifecycleError> {
        self.last_error.as_ref()
    }

    /// Starts a new analysis from the given raw input.
    ///
    /// Only valid while idle. Validation runs before any state is touched,
    /// so a rejected input leaves the lifecycle exactly as it was.
    pub fn begin_analysis(&mut self, raw: &str) -> Result<Target, LifecycleError> {
        if !matches!(self.analysis, AnalysisState::Idle) {
            return Err(LifecycleError::InvalidTransition {
                op: LifecycleOp::Submit,
                state: self.analysis.name(),
            });
        }

        let target = normalize(raw)?;
        self.analysis = AnalysisState::Analyzing {
            target: target.clone(),
            percent: 0,
        };
        self.last_error = None;
        self.dirty = true;
        Ok(target)
    }

    /// Advances progress by the plan's increment, clamped so the scan ends
    /// on exactly 100. At 100 the lifecycle moves to `Complete` with the
    /// attached result. Ticks outside a running scan change nothing.
    pub fn advance_tick(&mut self) -> TickOutcome {
        let AnalysisState::Analyzing { target, percent } = &mut self.analysis else {
            return TickOutcome::Ignored;
        };

        *percent = percent.saturating_add(self.plan.increment()).min(100);
        self.dirty = true;
        if *percent < 100 {
            return TickOutcome::Advanced;
        }

        let target = target.clone();
        self.analysis = AnalysisState::Complete {
            target,
            result: self.result_fixture.clone(),
        };
        TickOutcome::Finished
    }

    /// Discards a completed report and returns to idle. Only valid from
    /// `Complete`; anything else is a caller bug and is rejected.
    pub fn start_new_scan(&mut self) -> Result<(), LifecycleError> {
        if !matches!(self.analysis, AnalysisState::Complete { .. }) {
            return Err(LifecycleError::InvalidTransition {
                op: LifecycleOp::Reset,
                state: self.analysis.name(),
            });
        }

        self.analysis = AnalysisState::Idle;
        self.input.clear();
        self.last_error = None;
        self.dirty = true;
        Ok(())
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.analysis {
            AnalysisState::Idle => ScreenView::Idle,
            AnalysisState::Analyzing { target, percent } => ScreenView::Analyzing {
                target: target.to_string(),
                percent: *percent,
                step_label: self.plan.label_at(*percent).to_string(),
            },
            AnalysisState::Complete { target, result } => ScreenView::Complete {
                target: target.to_string(),
                result: result.clone(),
            },
        };

        AppViewModel {
            input: self.input.clone(),
            screen,
            last_error: self.last_error.as_ref().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.last_error = None;
            self.dirty = true;
        }
    }

    pub(crate) fn record_error(&mut self, err: LifecycleError) {
        self.last_error = Some(err);
        self.dirty = true;
    }
}
