//! Typed model of the ffprobe JSON document.
//!
//! ffprobe reports most numeric fields as JSON strings (`sample_rate`,
//! `bit_rate`, `duration`) and a few as numbers (`channels`,
//! `bits_per_sample`, `nb_streams`). Each field here carries its wire type
//! and is optional, so a missing field is a first-class state rather than a
//! deserialization failure.

use serde::{Deserialize, Deserializer};

/// Decoded `-show_format -show_streams` document, uninterpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    pub format: Option<ProbeFormat>,
}

impl ProbeOutput {
    /// Returns the first stream whose declared type is "audio", in document
    /// order. Ties are broken by document order alone; no stream is
    /// preferred by quality.
    #[must_use]
    pub fn first_audio_stream(&self) -> Option<&ProbeStream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some("audio"))
    }
}

/// One stream entry from the probe document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub sample_rate: Option<String>,
    pub bit_rate: Option<String>,
    pub channels: Option<u32>,
    pub bits_per_sample: Option<u32>,
    // ffprobe emits this one as a string; tolerate either shape.
    #[serde(default, deserialize_with = "u32_or_string")]
    pub bits_per_raw_sample: Option<u32>,
    #[serde(default)]
    pub tags: Tags,
}

/// Container-level section of the probe document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    pub format_name: Option<String>,
    pub nb_streams: Option<u32>,
    pub duration: Option<String>,
    pub bit_rate: Option<String>,
    #[serde(default)]
    pub tags: Tags,
}

/// Tag table attached to a stream or to the container. Only the encoder tag
/// is consumed; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tags {
    pub encoder: Option<String>,
}

fn u32_or_string<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::String(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "streams": [
                {
                    "codec_type": "audio",
                    "codec_name": "flac",
                    "sample_rate": "44100",
                    "channels": 2,
                    "bits_per_sample": 0,
                    "bits_per_raw_sample": "16",
                    "tags": { "encoder": "reference libFLAC 1.3.2" }
                }
            ],
            "format": {
                "format_name": "flac",
                "nb_streams": 1,
                "duration": "185.234000",
                "bit_rate": "921600",
                "tags": { "encoder": "Lavf58.29.100" }
            }
        }"#;

        let output: ProbeOutput = serde_json::from_str(json).unwrap();
        let stream = output.first_audio_stream().unwrap();
        assert_eq!(stream.codec_name.as_deref(), Some("flac"));
        assert_eq!(stream.sample_rate.as_deref(), Some("44100"));
        assert_eq!(stream.channels, Some(2));
        assert_eq!(stream.bits_per_sample, Some(0));
        assert_eq!(stream.bits_per_raw_sample, Some(16));
        assert_eq!(stream.tags.encoder.as_deref(), Some("reference libFLAC 1.3.2"));

        let format = output.format.unwrap();
        assert_eq!(format.format_name.as_deref(), Some("flac"));
        assert_eq!(format.nb_streams, Some(1));
        assert_eq!(format.duration.as_deref(), Some("185.234000"));
        assert_eq!(format.tags.encoder.as_deref(), Some("Lavf58.29.100"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_absent() {
        let output: ProbeOutput = serde_json::from_str(r#"{ "streams": [{}] }"#).unwrap();
        let stream = &output.streams[0];
        assert!(stream.codec_type.is_none());
        assert!(stream.codec_name.is_none());
        assert!(stream.sample_rate.is_none());
        assert!(stream.channels.is_none());
        assert!(stream.tags.encoder.is_none());
        assert!(output.format.is_none());
    }

    #[test]
    fn test_empty_document() {
        let output: ProbeOutput = serde_json::from_str("{}").unwrap();
        assert!(output.streams.is_empty());
        assert!(output.first_audio_stream().is_none());
    }

    #[test]
    fn test_first_audio_stream_skips_other_types() {
        let json = r#"{
            "streams": [
                { "codec_type": "video", "codec_name": "mjpeg" },
                { "codec_type": "audio", "codec_name": "mp3" },
                { "codec_type": "audio", "codec_name": "aac" }
            ]
        }"#;

        let output: ProbeOutput = serde_json::from_str(json).unwrap();
        let stream = output.first_audio_stream().unwrap();
        assert_eq!(stream.codec_name.as_deref(), Some("mp3"));
    }

    #[test]
    fn test_bits_per_raw_sample_accepts_number_or_string() {
        let from_number: ProbeStream =
            serde_json::from_str(r#"{ "bits_per_raw_sample": 24 }"#).unwrap();
        assert_eq!(from_number.bits_per_raw_sample, Some(24));

        let from_string: ProbeStream =
            serde_json::from_str(r#"{ "bits_per_raw_sample": "24" }"#).unwrap();
        assert_eq!(from_string.bits_per_raw_sample, Some(24));

        let garbage: ProbeStream =
            serde_json::from_str(r#"{ "bits_per_raw_sample": "N/A" }"#).unwrap();
        assert_eq!(garbage.bits_per_raw_sample, None);
    }
}
