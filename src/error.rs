use std::io;

use thiserror::Error;

pub type SaraResult<T> = std::result::Result<T, SaraError>;

#[derive(Debug, Error)]
pub enum SaraError {
    #[error("Usage: sara [path]")]
    Usage,
    #[error("Could not read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Standard stream error: {0}")]
    Stdio(#[from] io::Error),
}

impl SaraError {
    /// Process exit code, following sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            SaraError::Usage => 64,
            SaraError::Io { .. } | SaraError::Stdio(_) => 74,
        }
    }
}
