use std::sync::Once;

use analyzer_core::{
    update, AppState, Effect, LifecycleError, Msg, ScanPlan, ScreenView,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(analyzer_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::AnalyzeClicked)
}

/// Ticks until the scan completes, returning the state, the label sequence
/// observed along the way and the effects from the finishing tick.
fn run_to_completion(mut state: AppState) -> (AppState, Vec<String>, Vec<Effect>) {
    let mut labels = Vec::new();
    let mut last_percent = 0;
    for _ in 0..=200 {
        let (next, effects) = update(state, Msg::Tick);
        state = next;
        match state.view().screen {
            ScreenView::Analyzing {
                percent,
                step_label,
                ..
            } => {
                assert!(percent >= last_percent, "progress went backward");
                last_percent = percent;
                if labels.last() != Some(&step_label) {
                    labels.push(step_label);
                }
            }
            ScreenView::Complete { .. } => return (state, labels, effects),
            ScreenView::Idle => panic!("scan fell back to idle mid-run"),
        }
    }
    panic!("scan never completed");
}

#[test]
fn submit_starts_analysis_at_zero() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "example.com");

    assert_eq!(effects, vec![Effect::StartTicker]);
    match state.view().screen {
        ScreenView::Analyzing {
            target,
            percent,
            step_label,
        } => {
            assert_eq!(target, "https://example.com");
            assert_eq!(percent, 0);
            assert_eq!(step_label, "Initializing scan...");
        }
        other => panic!("expected analyzing screen, got {other:?}"),
    }
}

#[test]
fn invalid_input_keeps_state_idle() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "not a url");

    assert!(effects.is_empty());
    assert_eq!(state.view().screen, ScreenView::Idle);
    assert!(state.view().last_error.is_some());
    assert!(state.consume_dirty());
}

#[test]
fn submit_while_analyzing_is_rejected_without_mutation() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _) = update(state, Msg::Tick);
    let before = state.analysis().clone();

    let (state, effects) = submit(state, "other.example.com");

    assert!(effects.is_empty());
    assert_eq!(state.analysis(), &before);
    assert!(matches!(
        state.last_error(),
        Some(LifecycleError::InvalidTransition { .. })
    ));
}

#[test]
fn progress_reaches_exactly_one_hundred_and_completes() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _labels, finishing_effects) = run_to_completion(state);

    assert_eq!(finishing_effects, vec![Effect::StopTicker]);
    match state.view().screen {
        ScreenView::Complete { target, result } => {
            assert_eq!(target, "https://example.com");
            assert_eq!(result.score, 78);
            assert_eq!(result.counts.critical, 2);
            assert_eq!(result.counts.warnings, 3);
            assert_eq!(result.counts.passed, 15);
        }
        other => panic!("expected complete screen, got {other:?}"),
    }
}

#[test]
fn ticks_after_completion_change_nothing() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (mut state, _, _) = run_to_completion(state);
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::Tick);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}

#[test]
fn label_sequence_is_a_bounded_forward_walk() {
    init_logging();
    let plan = ScanPlan::default();
    let (state, _) = submit(AppState::with_plan(plan.clone()), "example.com");
    let (_state, labels, _) = run_to_completion(state);

    // Observed labels appear in plan order with no backward jumps; the
    // first plan entry is already consumed before the first tick lands.
    let mut plan_iter = plan.labels().iter();
    for label in &labels {
        assert!(
            plan_iter.any(|candidate| candidate == label),
            "label {label:?} out of order"
        );
    }
    assert_eq!(labels.last().map(String::as_str), Some("Finalizing results..."));
}

#[test]
fn odd_increment_still_ends_on_exactly_one_hundred() {
    init_logging();
    let plan = ScanPlan::new(Vec::new(), 13, 7);
    let (state, _) = submit(AppState::with_plan(plan), "example.com");
    let (state, _, _) = run_to_completion(state);

    assert!(matches!(state.view().screen, ScreenView::Complete { .. }));
}

#[test]
fn new_scan_resets_to_idle() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _, _) = run_to_completion(state);

    let (state, effects) = update(state, Msg::NewScanClicked);

    assert_eq!(effects, vec![Effect::StopTicker]);
    let view = state.view();
    assert_eq!(view.screen, ScreenView::Idle);
    assert!(view.input.is_empty());
    assert!(view.last_error.is_none());
}

#[test]
fn new_scan_outside_complete_is_rejected() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::NewScanClicked);
    assert!(effects.is_empty());
    assert!(matches!(
        state.last_error(),
        Some(LifecycleError::InvalidTransition { .. })
    ));

    let (state, _) = submit(AppState::new(), "example.com");
    let before = state.analysis().clone();
    let (state, effects) = update(state, Msg::NewScanClicked);
    assert!(effects.is_empty());
    assert_eq!(state.analysis(), &before);
}
