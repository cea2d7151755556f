use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for auspect.
///
/// Every analysis failure is one of these variants; the display strings are
/// the user-facing messages rendered by the presentation layer.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The ffprobe executable was missing when the analyzer was built.
    ///
    /// This is the one fatal condition: it aborts initialization instead of
    /// being reported per call, since no analysis is possible without the
    /// prober.
    #[error("ffprobe not found: {0}")]
    FfprobeNotFound(PathBuf),

    #[error("file does not exist")]
    FileNotFound,

    #[error("analysis timed out, file may be corrupt")]
    Timeout,

    #[error("not a valid/supported audio file")]
    UnsupportedFormat,

    #[error("failed to parse probe output")]
    MalformedOutput,

    #[error("no audio stream in file")]
    NoAudioStream,

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

/// Result type for auspect operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
