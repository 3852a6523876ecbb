#![deny(missing_docs)]
//! Logging for the wordfreq workspace.
//!
//! `freq_debug!`, `freq_info!` and `freq_warn!` forward to the `log` facade;
//! [`initialize`] installs the `simplelog` sinks the binary asks for.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! freq_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! freq_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! freq_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Where and how verbosely the binary logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Maximum level written by every sink.
    pub level: LevelFilter,
    /// Optional log file, truncated on startup, written next to the terminal sink.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
        }
    }
}

/// Initialize the global logger.
///
/// The terminal sink is bound to stderr so that stdout carries only the
/// report. When the log file cannot be created the terminal sink is still
/// installed, the failure is logged at warn level, and the error is returned.
/// A logger that was already installed is left in place.
pub fn initialize(settings: &LogSettings) -> io::Result<()> {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if settings.level != LevelFilter::Off {
        loggers.push(TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let file_result = match &settings.file {
        Some(path) => File::create(path)
            .map(|file| loggers.push(WriteLogger::new(settings.level, config, file)))
            .map_err(|err| (path, err)),
        None => Ok(()),
    };

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }

    file_result.map_err(|(path, err)| {
        freq_warn!("Could not create log file {:?}: {}", path, err);
        err
    })
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Installs a terminal logger for test binaries; a no-op once any logger exists.
///
/// Debug builds log at debug level, release builds at info.
pub fn initialize_for_tests() {
    let level = match cfg!(debug_assertions) {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
