use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("unrecognized record format in {} (first byte {first:#04x})", .path.display())]
    UnrecognizedFormat { path: PathBuf, first: u8 },
    #[error("paired inputs do not share a format: {} {}", .first.display(), .second.display())]
    PairFormatMismatch { first: PathBuf, second: PathBuf },
    #[error("uneven number of paired end input files: {0}")]
    UnevenPairs(usize),
}

impl FilterError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
