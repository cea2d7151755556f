//! Utility functions for formatting extracted metadata.
//!
//! These are the pure display conventions of the report: byte counts with
//! binary-1024 units, durations as whole minutes and seconds, and channel
//! counts as layout labels.

/// Formats a byte count with binary units (B, KB, MB, GB), two decimal
/// places for KB and above.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GB {
        format!("{:.2} GB", bytes_f64 / GB)
    } else if bytes_f64 >= MB {
        format!("{:.2} MB", bytes_f64 / MB)
    } else if bytes_f64 >= KB {
        format!("{:.2} KB", bytes_f64 / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats fractional seconds as whole minutes and remaining whole seconds
/// (e.g. 125.7 -> "2 minutes 5 seconds"). Truncates, never rounds.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds as u64;
    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{minutes} minutes {secs} seconds")
}

/// Maps a channel count to its conventional layout label. Counts without a
/// conventional name render as "<N> channels".
#[must_use]
pub fn channel_label(channels: u32) -> String {
    match channels {
        1 => "mono".to_string(),
        2 => "stereo".to_string(),
        6 => "5.1".to_string(),
        8 => "7.1".to_string(),
        n => format!("{n} channels"),
    }
}
