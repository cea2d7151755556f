//! Core library for inspecting audio files with ffprobe.
//!
//! This crate invokes the external ffprobe tool against a target file,
//! bounded by a fixed deadline, and normalizes its self-reported metadata
//! into a display-ready [`AudioReport`]. No audio samples are ever read.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use auspect_core::Analyzer;
//! use std::path::Path;
//!
//! let analyzer = Analyzer::discover().expect("ffprobe not installed");
//!
//! match analyzer.analyze(Path::new("/path/to/track.flac")) {
//!     Ok(report) => {
//!         for (label, value) in report.fields() {
//!             println!("{label}: {value}");
//!         }
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod external;
pub mod probe;
pub mod utils;

// Re-exports for public API
pub use analysis::{Analyzer, AudioReport, UNKNOWN};
pub use error::{CoreError, CoreResult};
pub use external::{
    CommandFfprobe, FfprobeExecutor, FileMetadataProvider, PROBE_TIMEOUT,
    StdFsMetadataProvider, ffprobe_version,
};
pub use probe::{ProbeFormat, ProbeOutput, ProbeStream};
pub use utils::{channel_label, format_duration, format_file_size};
