//! Logger setup.
//!
//! The interactive dashboard owns the terminal, so it only logs when a log
//! file is given. Headless snapshots log to stderr.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Where log records go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Logging disabled.
    Off,
    Stderr,
    File(&'a Path),
}

/// Builder honouring every `RUST_LOG` directive, including per-module ones.
fn builder(target: LogTarget<'_>, env: Env<'_>) -> Result<Builder, std::io::Error> {
    // Module directives from the environment would survive a global `off`.
    let mut builder = match target {
        LogTarget::Off => Builder::new(),
        _ => Builder::from_env(env),
    };
    builder.format_timestamp_millis();

    match target {
        LogTarget::Off => {
            builder.filter_level(LevelFilter::Off);
        }
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }
    Ok(builder)
}

/// Installs the global logger. Calling it twice keeps the first logger.
///
/// # Errors
/// Returns an `std::io::Error` if the log file cannot be opened.
pub fn init(target: LogTarget<'_>) -> Result<(), std::io::Error> {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);
    if builder(target, env)?.try_init().is_err() {
        log::debug!("Logger already installed");
    }
    Ok(())
}
