//! Wordfreq engine: file tokenization and the report pipeline.
mod error;
mod run;
mod token;

pub use error::RunError;
pub use run::{count_file, run, RunOptions, RunSummary};
pub use token::{tokenize, Tokens};
