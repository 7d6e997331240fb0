use std::time::Duration;

/// Default labels shown while a simulated scan runs, in display order.
const DEFAULT_STEP_LABELS: &[&str] = &[
    "Initializing scan...",
    "Checking color contrast...",
    "Evaluating text alternatives...",
    "Testing keyboard navigation...",
    "Analyzing ARIA attributes...",
    "Checking heading structure...",
    "Testing screen reader compatibility...",
    "Finalizing results...",
];

const DEFAULT_STEP_STRIDE: u8 = 13;
const DEFAULT_INCREMENT: u8 = 1;
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Tuning constants for one simulated scan: the ordered phase labels, how
/// many progress units each label covers, the per-tick increment and the
/// tick cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    labels: Vec<String>,
    step_stride: u8,
    increment: u8,
    tick_interval: Duration,
}

impl Default for ScanPlan {
    fn default() -> Self {
        Self {
            labels: DEFAULT_STEP_LABELS.iter().map(|s| s.to_string()).collect(),
            step_stride: DEFAULT_STEP_STRIDE,
            increment: DEFAULT_INCREMENT,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl ScanPlan {
    /// Builds a plan from custom labels; empty input falls back to the
    /// default label set, and stride/increment are clamped to at least 1.
    pub fn new(labels: Vec<String>, step_stride: u8, increment: u8) -> Self {
        let labels = if labels.is_empty() {
            DEFAULT_STEP_LABELS.iter().map(|s| s.to_string()).collect()
        } else {
            labels
        };
        Self {
            labels,
            step_stride: step_stride.max(1),
            increment: increment.max(1),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn increment(&self) -> u8 {
        self.increment
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn first_label(&self) -> &str {
        &self.labels[0]
    }

    /// Maps a progress percentage onto a label index.
    ///
    /// The index advances every `step_stride` units of progress and is
    /// clamped to the last label, so the sequence over a run never skips
    /// backward and never walks past the end of the list.
    pub fn step_index(&self, percent: u8) -> usize {
        if percent == 0 {
            return 0;
        }
        let advanced = usize::from((percent - 1) / self.step_stride) + 1;
        advanced.min(self.labels.len() - 1)
    }

    pub fn label_at(&self, percent: u8) -> &str {
        &self.labels[self.step_index(percent)]
    }
}
