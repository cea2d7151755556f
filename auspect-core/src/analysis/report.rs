use serde::Serialize;

/// Placeholder substituted whenever an expected field cannot be determined.
/// Used in place of absence to keep the report's shape uniform.
pub const UNKNOWN: &str = "unknown";

/// Normalized, display-ready metadata for one analyzed audio file.
///
/// Every field is either a well-formed formatted string or [`UNKNOWN`]. A
/// report only exists for a successful analysis; failures are carried by
/// [`CoreError`](crate::error::CoreError) instead of an error field here, so
/// no partially-valid report can be observed.
///
/// A report is built fresh per analysis call and has no identity beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioReport {
    /// Container/format name, upper-cased (e.g. "FLAC")
    pub format: String,
    /// Audio codec name, upper-cased (e.g. "MP3")
    pub codec: String,
    /// Free-text encoder tag, stream-level preferred over container-level
    pub encoder: String,
    /// Sampling frequency (e.g. "44100 Hz")
    pub sample_rate: String,
    /// Sample bit depth (e.g. "16 bit")
    pub bit_depth: String,
    /// Bit rate in whole kbps (e.g. "320 kbps")
    pub bit_rate: String,
    /// Channel layout label (e.g. "stereo")
    pub channels: String,
    /// Duration as whole minutes and seconds (e.g. "3 minutes 5 seconds")
    pub duration: String,
    /// Total stream count reported by the container (e.g. "1 streams")
    pub stream_count: String,
    /// On-disk size with binary units (e.g. "4.77 MB")
    pub file_size: String,
}

impl Default for AudioReport {
    fn default() -> Self {
        Self {
            format: UNKNOWN.to_string(),
            codec: UNKNOWN.to_string(),
            encoder: UNKNOWN.to_string(),
            sample_rate: UNKNOWN.to_string(),
            bit_depth: UNKNOWN.to_string(),
            bit_rate: UNKNOWN.to_string(),
            channels: UNKNOWN.to_string(),
            duration: UNKNOWN.to_string(),
            stream_count: UNKNOWN.to_string(),
            file_size: UNKNOWN.to_string(),
        }
    }
}

impl AudioReport {
    /// Labeled field values in presentation order, for rendering as rows.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Format", &self.format),
            ("Codec", &self.codec),
            ("Encoder", &self.encoder),
            ("Sample rate", &self.sample_rate),
            ("Bit depth", &self.bit_depth),
            ("Bit rate", &self.bit_rate),
            ("Channels", &self.channels),
            ("Duration", &self.duration),
            ("Streams", &self.stream_count),
            ("File size", &self.file_size),
        ]
    }
}
