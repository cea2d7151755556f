//! Interactions with the external ffprobe tool and the file system.
//!
//! This module encapsulates everything that leaves the process boundary:
//! spawning ffprobe against a target file and reading file metadata. Both
//! are abstracted behind traits so the extraction logic can be exercised
//! without an ffprobe installation.

use std::path::Path;

// ---- Standard library imports ----
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Contains the ffprobe invoker: trait, production executor, discovery
pub mod ffprobe;

pub use ffprobe::{CommandFfprobe, FfprobeExecutor, PROBE_TIMEOUT};

/// Returns the version banner of the ffprobe executable at `ffprobe_path`.
///
/// Runs `ffprobe -version` and keeps the first line of output. Used by the
/// CLI to report on the installation; a failure here means the executable
/// is present but not runnable.
pub fn ffprobe_version(ffprobe_path: &Path) -> CoreResult<String> {
    let output = Command::new(ffprobe_path)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| CoreError::AnalysisFailed(format!("failed to run ffprobe -version: {e}")))?;

    if !output.status.success() {
        return Err(CoreError::AnalysisFailed(format!(
            "ffprobe -version exited with {}",
            output.status
        )));
    }

    let version_str = String::from_utf8_lossy(&output.stdout);
    let first_line = version_str.lines().next().unwrap_or_default();

    Ok(first_line.to_string())
}

/// Trait for abstracting file metadata access.
///
/// Decouples the extractor from direct file system access so tests can
/// substitute fixed sizes or injected failures.
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn file_size(&self, path: &Path) -> std::io::Result<u64>;
}

/// Standard implementation of [`FileMetadataProvider`] backed by
/// `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn file_size(&self, path: &Path) -> std::io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
