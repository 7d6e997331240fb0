mod cli;
mod logging;
mod render;
mod runner;
mod session;

use std::time::Duration;

use analyzer_logging::{scan_info, scan_warn};
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Command, LogArg};
use runner::ScanOptions;
use session::SessionStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let destination = match cli.log {
        LogArg::File => logging::LogDestination::File,
        LogArg::Terminal => logging::LogDestination::Terminal,
        LogArg::Both => logging::LogDestination::Both,
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(destination, level);

    match cli.command {
        Command::Scan {
            url,
            chart,
            export,
            json,
            tick_ms,
        } => {
            let store = SessionStore::open_default();
            match store.load() {
                Ok(Some(profile)) => {
                    scan_info!("Scanning as {} <{}>", profile.name, profile.email);
                }
                Ok(None) => {
                    scan_warn!("No stored profile; scanning anonymously");
                    println!("Note: no profile stored. Run `analyzer login` to keep one.");
                }
                Err(err) => scan_warn!("Session store unavailable: {}", err),
            }

            let opts = ScanOptions {
                chart: chart.into(),
                export_dir: export,
                json,
                tick_interval: Duration::from_millis(tick_ms.max(1)),
            };
            runner::run_scan(&url, &opts)
        }
        Command::Login {
            name,
            email,
            password,
        } => {
            let store = SessionStore::open_default();
            let profile = store.login(name.as_deref(), &email, &password)?;
            scan_info!("Stored profile for {}", profile.email);
            println!("Logged in as {} <{}>", profile.name, profile.email);
            Ok(())
        }
        Command::Logout => {
            let store = SessionStore::open_default();
            if store.clear()? {
                println!("Logged out.");
            } else {
                println!("No profile was stored.");
            }
            Ok(())
        }
        Command::Whoami => {
            let store = SessionStore::open_default();
            match store.load()? {
                Some(profile) => println!("{} <{}>", profile.name, profile.email),
                None => println!("Not logged in."),
            }
            Ok(())
        }
    }
}
