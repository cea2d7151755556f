//! The `tools` command: report on the ffprobe installation.

use std::path::Path;

use auspect_core::{CommandFfprobe, CoreResult, ffprobe_version};
use log::info;

use crate::output::{print_heading, print_info};

pub fn execute(ffprobe: Option<&Path>) -> CoreResult<()> {
    print_heading("FFprobe Information");

    info!("Checking ffprobe availability");
    let executor = match ffprobe {
        Some(path) => CommandFfprobe::new(path)?,
        None => CommandFfprobe::discover()?,
    };
    print_info("Executable", executor.ffprobe_path().display());

    let version = ffprobe_version(executor.ffprobe_path())?;
    print_info("Version", version);

    Ok(())
}
