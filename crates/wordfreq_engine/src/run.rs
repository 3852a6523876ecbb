use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use freq_logging::{freq_debug, freq_info};
use wordfreq_core::{try_aggregate, FrequencyMap, FrequencyPairs, SortOrder};

use crate::{tokenize, RunError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_tokens: u64,
    pub distinct_tokens: usize,
}

/// Opens `path`, tokenizes it and counts every token.
///
/// The file handle is released when this returns, on success or failure.
pub fn count_file(path: &Path) -> Result<FrequencyMap, RunError> {
    let file = File::open(path).map_err(|err| {
        freq_debug!("Failed to open {:?}: {}", path, err);
        RunError::input(path, err)
    })?;
    freq_debug!("Opened {:?}", path);

    try_aggregate(tokenize(BufReader::new(file))).map_err(|err| {
        freq_debug!("Failed while reading {:?}: {}", path, err);
        RunError::input(path, err)
    })
}

/// Writes the `file: <path>` preamble, then the sorted report for `path`.
///
/// The preamble goes out before the open attempt, so it is present even when
/// the input cannot be read. The report is followed by one blank line.
pub fn run<W: Write>(
    path: &Path,
    options: RunOptions,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    writeln!(out, "file: {}", path.display())?;

    let map = count_file(path)?;
    let summary = RunSummary {
        total_tokens: map.total(),
        distinct_tokens: map.len(),
    };
    let pairs = FrequencyPairs::sorted(map, options.order);

    pairs.write_to(out)?;
    writeln!(out)?;
    out.flush()?;

    freq_info!(
        "Counted {} tokens ({} distinct) in {:?}, sorted by {}",
        summary.total_tokens,
        summary.distinct_tokens,
        path,
        options.order
    );
    Ok(summary)
}
