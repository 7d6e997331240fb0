//! Drives one scan end to end: the update loop, ticker effects and
//! terminal output.

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use analyzer_core::{update, AppState, Effect, Msg, ScanPlan, ScreenView};
use analyzer_engine::{export_report, ChartKind, ExportFormat, TickerHandle};
use analyzer_logging::{scan_debug, scan_error, scan_info};
use anyhow::{bail, Context};

use crate::render;

pub struct ScanOptions {
    pub chart: ChartKind,
    pub export_dir: Option<PathBuf>,
    pub json: bool,
    pub tick_interval: Duration,
}

pub fn run_scan(raw_url: &str, opts: &ScanOptions) -> anyhow::Result<()> {
    let plan = ScanPlan::default().with_tick_interval(opts.tick_interval);
    let interval = plan.tick_interval();
    let mut ticker = TickerHandle::new();

    let state = AppState::with_plan(plan);
    let (state, _) = update(state, Msg::InputChanged(raw_url.to_string()));
    let (mut state, effects) = update(state, Msg::AnalyzeClicked);

    if let Some(message) = state.view().last_error {
        bail!("{message}");
    }

    // Open the log context before the ticker spins up so every line of
    // this run, including the ticker's own, names the target.
    if let ScreenView::Analyzing { target, .. } = state.view().screen {
        analyzer_logging::begin_scan(&target);
        scan_info!("Analysis started");
        println!("Analyzing {target}");
    }
    apply_effects(&mut ticker, interval, &effects);

    // Generous bound so a wedged worker surfaces as an error instead of
    // hanging the terminal forever.
    let stall_limit = interval * 10 + Duration::from_millis(250);
    let mut ticks: u64 = 0;
    loop {
        if ticker.recv_timeout(stall_limit).is_none() {
            scan_error!("Progress ticker stalled; aborting scan");
            analyzer_logging::end_scan();
            bail!("progress ticker stalled");
        }
        ticks += 1;
        analyzer_logging::set_scan_tick(ticks);

        let (next, effects) = update(state, Msg::Tick);
        state = next;
        apply_effects(&mut ticker, interval, &effects);

        if !state.consume_dirty() {
            continue;
        }
        match state.view().screen {
            ScreenView::Analyzing {
                percent,
                step_label,
                ..
            } => {
                print!("\r{}", render::progress_line(percent, &step_label));
                let _ = std::io::stdout().flush();
            }
            ScreenView::Complete { .. } => break,
            ScreenView::Idle => {}
        }
    }
    println!();

    let ScreenView::Complete { target, result } = state.view().screen else {
        analyzer_logging::end_scan();
        bail!("scan ended without a report");
    };
    scan_info!("Analysis complete after {} ticks, score {}", ticks, result.score);
    analyzer_logging::end_scan();

    for line in render::report_lines(&target, &result, opts.chart) {
        println!("{line}");
    }

    if let Some(dir) = &opts.export_dir {
        let generated = chrono::Utc::now().to_rfc3339();
        let format = if opts.json {
            ExportFormat::Json
        } else {
            ExportFormat::Markdown
        };
        let path = export_report(dir, &target, &result, &generated, format)
            .context("exporting report")?;
        scan_debug!("Report exported to {:?}", path);
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn apply_effects(ticker: &mut TickerHandle, interval: Duration, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::StartTicker => ticker.start(interval),
            Effect::StopTicker => ticker.stop(),
        }
    }
}
