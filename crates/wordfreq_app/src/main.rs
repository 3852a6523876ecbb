mod cli;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use freq_logging::freq_debug;

use crate::cli::CmdOptions;

fn main() -> ExitCode {
    let options = CmdOptions::parse();

    if let Err(err) = freq_logging::initialize(&options.log_settings()) {
        // Already logged unless warnings are filtered out.
        if !log::log_enabled!(log::Level::Warn) {
            eprintln!("Warning: could not open log file: {err}");
        }
    }
    freq_debug!("{:?}", options);

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CmdOptions) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    wordfreq_engine::run(&options.path, options.run_options(), &mut out)
        .with_context(|| format!("counting words in {}", options.path.display()))?;
    Ok(())
}
