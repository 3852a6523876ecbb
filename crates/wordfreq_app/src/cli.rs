use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use freq_logging::LogSettings;
use log::LevelFilter;
use wordfreq_core::SortOrder;
use wordfreq_engine::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about = "Count whitespace-delimited words in a file")]
pub struct CmdOptions {
    /// Text file to count.
    pub path: PathBuf,

    #[arg(long, value_enum, default_value_t = SortArg::Text, help = "Report order")]
    pub sort: SortArg,

    #[arg(
        long,
        default_value_t = LevelFilter::Warn,
        help = "Diagnostics written to stderr (off, error, warn, info, debug, trace)"
    )]
    pub log_level: LevelFilter,

    #[arg(long, help = "Also write diagnostics to this file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Alphabetical by word.
    Text,
    /// Most frequent first.
    Count,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Text => SortOrder::Text,
            SortArg::Count => SortOrder::Count,
        }
    }
}

impl CmdOptions {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            order: self.sort.into(),
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level,
            file: self.log_file.clone(),
        }
    }
}
