use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use analyzer_engine::ChartKind;

#[derive(Debug, Parser)]
#[command(
    name = "analyzer",
    about = "Simulated website accessibility analyzer",
    version
)]
pub struct Cli {
    /// Where log output goes.
    #[arg(long, value_enum, global = true, default_value = "file")]
    pub log: LogArg,

    /// Enable debug-level logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a simulated accessibility scan against a website URL.
    Scan {
        /// Website URL; the scheme is optional (e.g. example.com).
        url: String,

        /// Chart style for the category breakdown.
        #[arg(long, value_enum, default_value = "radar")]
        chart: ChartArg,

        /// Write the finished report into this directory.
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        /// Export as JSON instead of Markdown.
        #[arg(long, requires = "export")]
        json: bool,

        /// Milliseconds between progress ticks.
        #[arg(long, default_value_t = 120)]
        tick_ms: u64,
    },
    /// Store a local profile; scans mention who ran them.
    Login {
        /// Display name; defaults to the part of the email before the @.
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Remove the stored profile.
    Logout,
    /// Show the stored profile.
    Whoami,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    Radar,
    Pie,
    Bar,
    Line,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Radar => ChartKind::Radar,
            ChartArg::Pie => ChartKind::Pie,
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Line => ChartKind::Line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}
