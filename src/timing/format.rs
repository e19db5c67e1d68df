//! Elapsed-time suffix rendering.
//!
//! Durations are truncated to whole milliseconds. Anything under a second is
//! shown as `<n>ms`; longer spans use hours/minutes/seconds with the
//! fractional seconds trimmed of trailing zeros (`1.25s`, `2m3.4s`, `1h0m5s`).

use std::fmt::Write;
use std::time::Duration;

/// Render a duration for the `+<duration>` suffix.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        return format!("{millis}ms");
    }

    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let secs = (millis / 1000) % 60;
    let frac = millis % 1000;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{secs}");
    if frac > 0 {
        let digits = format!("{frac:03}");
        let _ = write!(out, ".{}", digits.trim_end_matches('0'));
    }
    out.push('s');
    out
}
