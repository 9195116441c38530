// ============================================================================
// mp4ify-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for mp4ify-core
//
// Fatal kinds (encoder missing, bad input) abort a run before any file is
// converted. Per-file kinds (EncodingFailed, UnexpectedEncodingError,
// DuplicateOutput) are recorded against one input and never stop the batch.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the mp4ify core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Encoder '{0}' is not installed or not found in PATH")]
    EncoderNotFound(String),

    #[error("Input file must be a .mp4 or .mov file: {}", .0.display())]
    InvalidInputKind(PathBuf),

    #[error("The input path must be a valid file or directory: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("No .mp4 or .mov files found in directory: {}", .0.display())]
    NoMatchingFiles(PathBuf),

    #[error("Encoding failed for '{}': encoder {status}", input.display())]
    EncodingFailed { input: PathBuf, status: ExitStatus },

    #[error("Unexpected error while encoding '{}': {source}", input.display())]
    UnexpectedEncodingError {
        input: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output '{}' for '{}' is already produced by another input in this batch", output.display(), input.display())]
    DuplicateOutput { input: PathBuf, output: PathBuf },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// True for errors scoped to a single input file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            CoreError::EncodingFailed { .. }
                | CoreError::UnexpectedEncodingError { .. }
                | CoreError::DuplicateOutput { .. }
        )
    }
}

/// Result type for mp4ify-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub(crate) fn encoding_failed_error(input: impl Into<PathBuf>, status: ExitStatus) -> CoreError {
    CoreError::EncodingFailed {
        input: input.into(),
        status,
    }
}

pub(crate) fn unexpected_encoding_error(input: impl Into<PathBuf>, source: io::Error) -> CoreError {
    CoreError::UnexpectedEncodingError {
        input: input.into(),
        source,
    }
}
