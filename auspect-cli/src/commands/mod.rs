//! CLI command implementations.

pub mod analyze;
pub mod tools;

use std::path::Path;
use std::time::Duration;

use auspect_core::{CommandFfprobe, CoreResult};

/// Builds the production executor from the global CLI options: an explicit
/// `--ffprobe` path when given, otherwise the first ffprobe on `PATH`.
pub fn build_executor(ffprobe: Option<&Path>, timeout: Duration) -> CoreResult<CommandFfprobe> {
    match ffprobe {
        Some(path) => CommandFfprobe::with_timeout(path, timeout),
        None => {
            let discovered = CommandFfprobe::discover()?;
            CommandFfprobe::with_timeout(discovered.ffprobe_path().to_path_buf(), timeout)
        }
    }
}
