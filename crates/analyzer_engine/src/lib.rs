//! Analyzer engine: tick scheduling, report export and chart views.
mod chart;
mod export;
mod persist;
mod ticker;

pub use chart::{category_series, render_chart, ChartKind};
pub use export::{
    export_report, render_report_json, render_report_markdown, report_filename, ExportError,
    ExportFormat,
};
pub use persist::{ensure_dir, write_atomic, PersistError};
pub use ticker::{TickerEvent, TickerHandle};
