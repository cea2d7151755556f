//! FFprobe invocation with a bounded deadline.
//!
//! This module runs the external ffprobe executable against a target file,
//! requesting combined format and stream metadata as JSON, and decodes the
//! result into the typed [`ProbeOutput`] schema. The child process is a
//! scoped resource: it is killed and reaped on the timeout path and reaped
//! on every other exit path.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{CoreError, CoreResult};
use crate::probe::ProbeOutput;

/// Fixed deadline applied to each ffprobe invocation.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Polling interval while waiting for the child to finish.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Executes a metadata probe against a single file.
///
/// The production implementation is [`CommandFfprobe`]; tests substitute
/// recording or failing fakes.
pub trait FfprobeExecutor {
    /// Probes `path` and returns the decoded document, uninterpreted.
    fn probe(&self, path: &Path) -> CoreResult<ProbeOutput>;
}

/// FFprobe executor backed by the real executable.
#[derive(Debug, Clone)]
pub struct CommandFfprobe {
    ffprobe_path: PathBuf,
    timeout: Duration,
}

impl CommandFfprobe {
    /// Creates an executor backed by the ffprobe executable at
    /// `ffprobe_path`, with the fixed default deadline.
    ///
    /// Fails with [`CoreError::FfprobeNotFound`] if nothing exists at that
    /// path. This is checked once, up front: a missing prober is a startup
    /// error, not a per-call one.
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> CoreResult<Self> {
        Self::with_timeout(ffprobe_path, PROBE_TIMEOUT)
    }

    /// Same as [`CommandFfprobe::new`] with an explicit deadline.
    pub fn with_timeout(
        ffprobe_path: impl Into<PathBuf>,
        timeout: Duration,
    ) -> CoreResult<Self> {
        let ffprobe_path = ffprobe_path.into();
        if !ffprobe_path.exists() {
            return Err(CoreError::FfprobeNotFound(ffprobe_path));
        }
        Ok(Self {
            ffprobe_path,
            timeout,
        })
    }

    /// Creates an executor backed by the first `ffprobe` found on `PATH`.
    pub fn discover() -> CoreResult<Self> {
        let ffprobe_path = which::which("ffprobe")
            .map_err(|_| CoreError::FfprobeNotFound(PathBuf::from("ffprobe")))?;
        Self::new(ffprobe_path)
    }

    /// Path of the executable this executor spawns.
    #[must_use]
    pub fn ffprobe_path(&self) -> &Path {
        &self.ffprobe_path
    }
}

impl FfprobeExecutor for CommandFfprobe {
    fn probe(&self, path: &Path) -> CoreResult<ProbeOutput> {
        if !path.exists() {
            return Err(CoreError::FileNotFound);
        }

        log::debug!("Running ffprobe on: {}", path.display());

        let mut cmd = Command::new(&self.ffprobe_path);
        cmd.args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
        suppress_console_window(&mut cmd);

        let mut child = cmd.spawn().map_err(|e| {
            log::error!("Failed to spawn ffprobe: {e}");
            CoreError::AnalysisFailed(format!("failed to start ffprobe: {e}"))
        })?;

        // Drain both pipes off-thread so a chatty child cannot block on a
        // full pipe buffer while we poll for completion.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_handle = std::thread::spawn(move || drain_pipe(stdout_pipe));
        let stderr_handle = std::thread::spawn(move || drain_pipe(stderr_pipe));

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        log::warn!(
                            "ffprobe timed out after {:?} on {}, killing process",
                            self.timeout,
                            path.display()
                        );
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = stdout_handle.join();
                        let _ = stderr_handle.join();
                        return Err(CoreError::Timeout);
                    }
                    std::thread::sleep(WAIT_POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_handle.join();
                    let _ = stderr_handle.join();
                    return Err(CoreError::AnalysisFailed(format!(
                        "error waiting for ffprobe: {e}"
                    )));
                }
            }
        };

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();

        if !status.success() {
            log::debug!(
                "ffprobe exited with {} on {}: {}",
                status,
                path.display(),
                String::from_utf8_lossy(&stderr).trim()
            );
            return Err(CoreError::UnsupportedFormat);
        }

        serde_json::from_slice(&stdout).map_err(|e| {
            log::warn!("Undecodable ffprobe output for {}: {e}", path.display());
            CoreError::MalformedOutput
        })
    }
}

fn drain_pipe<R: Read>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    buf
}

/// Keeps the spawned prober from flashing a console window on Windows.
/// Cosmetic only; the returned data is unaffected.
#[cfg(windows)]
fn suppress_console_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn suppress_console_window(_cmd: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_executable() {
        let result = CommandFfprobe::new("surely/this/does/not/exist/ffprobe");
        assert!(matches!(result, Err(CoreError::FfprobeNotFound(_))));
    }

    #[test]
    fn test_probe_missing_file_short_circuits() {
        // Any existing file stands in for the executable; the target check
        // fires before anything is spawned.
        let fake_ffprobe = tempfile::NamedTempFile::new().unwrap();
        let executor = CommandFfprobe::new(fake_ffprobe.path()).unwrap();

        let result = executor.probe(Path::new("surely/this/does/not/exist.mp3"));
        assert!(matches!(result, Err(CoreError::FileNotFound)));
    }
}
