#![deny(missing_docs)]
//! Shared logging utilities for the analyzer workspace.
//!
//! The `scan_*` macros stamp every line with the scan that emitted it:
//! the target under analysis and, once ticking has started, the current
//! tick. A log line read in isolation then still shows which scan it
//! belongs to and where in the run it was emitted. The context is
//! tracked per thread; threads that are not driving a scan log bare.

use std::cell::RefCell;

#[derive(Default)]
struct ScanContext {
    target: Option<String>,
    tick: Option<u64>,
}

thread_local! {
    static SCAN_CONTEXT: RefCell<ScanContext> = RefCell::new(ScanContext::default());
}

/// Opens a scan log context for the current thread. Lines logged from
/// here on carry the target; the tick is added once [`set_scan_tick`]
/// has been called.
pub fn begin_scan(target: &str) {
    SCAN_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = ScanContext {
            target: Some(target.to_string()),
            tick: None,
        };
    });
}

/// Records the scan tick for the current thread. The scan loop calls
/// this once per tick so subsequent log lines carry the new position.
pub fn set_scan_tick(tick: u64) {
    SCAN_CONTEXT.with(|ctx| ctx.borrow_mut().tick = Some(tick));
}

/// Closes the scan log context for the current thread.
pub fn end_scan() {
    SCAN_CONTEXT.with(|ctx| {
        ctx.take();
    });
}

/// The stamp the `scan_*` macros prepend: `[target tick N] ` during a
/// scan, `[target] ` before the first tick, empty outside a scan.
pub fn scan_stamp() -> String {
    SCAN_CONTEXT.with(|ctx| {
        let ctx = ctx.borrow();
        match (&ctx.target, ctx.tick) {
            (Some(target), Some(tick)) => format!("[{target} tick {tick}] "),
            (Some(target), None) => format!("[{target}] "),
            (None, _) => String::new(),
        }
    })
}

/// Logs a debug-level message stamped with the current scan context.
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::scan_stamp(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message stamped with the current scan context.
#[macro_export]
macro_rules! scan_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::scan_stamp(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message stamped with the current scan context.
#[macro_export]
macro_rules! scan_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::scan_stamp(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message stamped with the current scan context.
#[macro_export]
macro_rules! scan_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::scan_stamp(), format_args!($($arg)*));
    }};
}

/// Initializes a terminal logger for use in unit tests: debug level in
/// debug builds, info in release builds. Safely no-ops if another logger
/// has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // A second init returns an error; tests share one global logger.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_is_empty_outside_a_scan() {
        end_scan();
        assert_eq!(scan_stamp(), "");

        // A tick without an open scan does not resurrect the stamp.
        set_scan_tick(7);
        assert_eq!(scan_stamp(), "");
    }

    #[test]
    fn stamp_grows_from_target_to_target_and_tick() {
        begin_scan("https://example.com");
        assert_eq!(scan_stamp(), "[https://example.com] ");

        set_scan_tick(1);
        assert_eq!(scan_stamp(), "[https://example.com tick 1] ");

        set_scan_tick(42);
        assert_eq!(scan_stamp(), "[https://example.com tick 42] ");

        end_scan();
        assert_eq!(scan_stamp(), "");
    }

    #[test]
    fn begin_scan_discards_the_previous_run() {
        begin_scan("https://a.example.com");
        set_scan_tick(99);
        begin_scan("https://b.example.com");

        // Fresh scan, fresh position: no stale tick from the last run.
        assert_eq!(scan_stamp(), "[https://b.example.com] ");
        end_scan();
    }
}
