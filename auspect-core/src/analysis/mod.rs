//! Metadata extraction and normalization.
//!
//! Takes the raw probe document from the invoker, locates the first audio
//! stream, and normalizes the reported fields into an [`AudioReport`].
//! Every extraction step degrades to the unknown sentinel when its source
//! field is absent; only genuinely malformed values abort the analysis.

mod report;

pub use report::{AudioReport, UNKNOWN};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::external::{
    CommandFfprobe, FfprobeExecutor, FileMetadataProvider, StdFsMetadataProvider,
};
use crate::utils::{channel_label, format_duration, format_file_size};

/// Analyzes audio files by probing them with ffprobe and normalizing the
/// reported metadata.
///
/// The executor and metadata provider are injectable so the extraction
/// logic can be tested without an ffprobe installation.
pub struct Analyzer<E = CommandFfprobe, M = StdFsMetadataProvider>
where
    E: FfprobeExecutor,
    M: FileMetadataProvider,
{
    executor: E,
    metadata: M,
}

impl Analyzer {
    /// Creates an analyzer backed by the ffprobe executable at
    /// `ffprobe_path`.
    ///
    /// Fails with [`CoreError::FfprobeNotFound`] if the executable is not
    /// present on disk. A missing prober aborts initialization; it is never
    /// reported per call.
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> CoreResult<Self> {
        Ok(Self::with_parts(
            CommandFfprobe::new(ffprobe_path)?,
            StdFsMetadataProvider,
        ))
    }

    /// Creates an analyzer backed by the first `ffprobe` found on `PATH`.
    pub fn discover() -> CoreResult<Self> {
        Ok(Self::with_parts(
            CommandFfprobe::discover()?,
            StdFsMetadataProvider,
        ))
    }
}

impl<E, M> Analyzer<E, M>
where
    E: FfprobeExecutor,
    M: FileMetadataProvider,
{
    /// Assembles an analyzer from explicit parts.
    pub fn with_parts(executor: E, metadata: M) -> Self {
        Self { executor, metadata }
    }

    /// Probes `path` and returns its normalized metadata.
    ///
    /// Every failure maps to one variant of the closed
    /// [`CoreError`] taxonomy; nothing panics and no partially-filled
    /// report escapes on the error path.
    pub fn analyze(&self, path: &Path) -> CoreResult<AudioReport> {
        // Checked here so a missing target never spawns the prober.
        if !path.exists() {
            return Err(CoreError::FileNotFound);
        }

        let output = self.executor.probe(path)?;

        // First audio-typed stream in document order; also covers an empty
        // or absent stream list.
        let stream = output
            .first_audio_stream()
            .ok_or(CoreError::NoAudioStream)?;
        let container = output.format.as_ref();

        let mut report = AudioReport::default();

        if let Some(codec) = &stream.codec_name {
            report.codec = codec.to_uppercase();
        }

        let encoder = stream
            .tags
            .encoder
            .as_deref()
            .or_else(|| container.and_then(|f| f.tags.encoder.as_deref()));
        if let Some(encoder) = encoder {
            report.encoder = encoder.to_string();
        }

        // True sample bit depth wins over the raw/container-reported one.
        match (stream.bits_per_sample, stream.bits_per_raw_sample) {
            (Some(bits), _) if bits > 0 => report.bit_depth = format!("{bits} bit"),
            (_, Some(bits)) if bits > 0 => report.bit_depth = format!("{bits} bit"),
            _ => {}
        }

        if let Some(rate) = &stream.sample_rate {
            let hz: u64 = parse_field(rate, "sample rate")?;
            report.sample_rate = format!("{hz} Hz");
        }

        let bit_rate = stream
            .bit_rate
            .as_deref()
            .or_else(|| container.and_then(|f| f.bit_rate.as_deref()));
        if let Some(rate) = bit_rate {
            let bps: u64 = parse_field(rate, "bit rate")?;
            // Truncating division; kbps boundaries must not round up.
            report.bit_rate = format!("{} kbps", bps / 1000);
        }

        if let Some(channels) = stream.channels {
            report.channels = channel_label(channels);
        }

        if let Some(container) = container {
            if let Some(duration) = &container.duration {
                let seconds: f64 = parse_field(duration, "duration")?;
                if !seconds.is_finite() {
                    return Err(CoreError::AnalysisFailed(format!(
                        "non-finite duration {duration:?}"
                    )));
                }
                report.duration = format_duration(seconds);
            }

            if let Some(name) = &container.format_name {
                if !name.is_empty() {
                    report.format = name.to_uppercase();
                }
            }

            if let Some(count) = container.nb_streams {
                report.stream_count = format!("{count} streams");
            }
        }

        // File size is cosmetic; a filesystem failure leaves it unknown.
        match self.metadata.file_size(path) {
            Ok(size) => report.file_size = format_file_size(size),
            Err(e) => log::debug!("Could not read size of {}: {e}", path.display()),
        }

        Ok(report)
    }
}

/// Parses a numeric field the prober reported as a string. Well-formed
/// prober output always parses; a failure is the generic analysis error.
fn parse_field<T>(raw: &str, what: &str) -> CoreResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        log::warn!("Unreadable {what} {raw:?} in probe output: {e}");
        CoreError::AnalysisFailed(format!("unreadable {what} {raw:?}"))
    })
}
