use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Opening or reading the input failed. Not-found, permission and
    /// mid-read failures all land here with the original cause attached.
    #[error("failed to read {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report")]
    Output(#[from] io::Error),
}

impl RunError {
    pub(crate) fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunError::Input {
            path: path.into(),
            source,
        }
    }
}
