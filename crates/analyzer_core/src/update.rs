use crate::{AppState, Effect, Msg, TickOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            let raw = state.input().to_owned();
            match state.begin_analysis(&raw) {
                Ok(_target) => vec![Effect::StartTicker],
                Err(err) => {
                    // Invalid input leaves the lifecycle untouched; the
                    // error is surfaced on the view model instead.
                    state.record_error(err);
                    Vec::new()
                }
            }
        }
        Msg::Tick => match state.advance_tick() {
            TickOutcome::Finished => vec![Effect::StopTicker],
            TickOutcome::Advanced | TickOutcome::Ignored => Vec::new(),
        },
        Msg::NewScanClicked => match state.start_new_scan() {
            Ok(()) => vec![Effect::StopTicker],
            Err(err) => {
                state.record_error(err);
                Vec::new()
            }
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
