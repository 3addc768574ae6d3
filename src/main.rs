mod config;
mod consts;
mod logging;
mod session;
mod ui;

use crate::config::Config;
use crate::logging::LogTarget;
use crate::session::{SnapshotOptions, run_snapshot_mode, run_tui_mode};
use crate::ui::theme::ThemeMode;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Path to a JSON configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Write logs to this file. Logging is off otherwise.
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,
    },
    /// Render one frame and print it as plain text
    Snapshot {
        /// Frame width in columns.
        #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u16).range(1..))]
        width: u16,

        /// Frame height in rows.
        #[arg(long, default_value_t = 45, value_parser = clap::value_parser!(u16).range(1..))]
        height: u16,

        /// Render with the dark theme.
        #[arg(long)]
        dark: bool,

        /// Milliseconds since mount. Defaults to the end of every animation.
        #[arg(long, value_name = "MS")]
        elapsed_ms: Option<u64>,

        /// Path to a JSON configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start { config, log_file } => {
            let target = match log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            logging::init(target)?;

            let config = Config::resolve(config.as_deref())?;
            run_tui_mode(&config)
        }
        Command::Snapshot {
            width,
            height,
            dark,
            elapsed_ms,
            config,
        } => {
            logging::init(LogTarget::Stderr)?;

            let config = Config::resolve(config.as_deref())?;
            let theme = if dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            run_snapshot_mode(
                &config,
                SnapshotOptions {
                    width,
                    height,
                    theme,
                    elapsed: elapsed_ms.map(Duration::from_millis),
                },
            )
        }
    }
}
