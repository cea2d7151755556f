//! The `analyze` command: probe one file and render its report.

use std::path::Path;
use std::time::Duration;

use auspect_core::{Analyzer, CoreError, CoreResult, StdFsMetadataProvider};
use log::info;

use crate::AnalyzeArgs;
use crate::output::{print_heading, print_info};

pub fn execute(ffprobe: Option<&Path>, args: &AnalyzeArgs) -> CoreResult<()> {
    let executor = super::build_executor(ffprobe, Duration::from_secs(args.timeout))?;
    info!("Using ffprobe at {}", executor.ffprobe_path().display());

    let analyzer = Analyzer::with_parts(executor, StdFsMetadataProvider);
    let report = analyzer.analyze(&args.file)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CoreError::AnalysisFailed(format!("could not render report: {e}")))?;
        println!("{rendered}");
    } else {
        print_heading("Audio Metadata");
        print_info("File", args.file.display());
        for (label, value) in report.fields() {
            print_info(label, value);
        }
    }

    Ok(())
}
