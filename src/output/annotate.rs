//! Line annotation.
//!
//! # Responsibilities
//! - Split rendered text into lines
//! - Attach the `+<elapsed>` suffix to the first line of a logical emission
//! - Prefix every line with the logger's precomputed prefix
//!
//! # Design Decisions
//! - The "suffix pending" flag is passed in and handed back by value
//! - Lines split like `str::lines`: `\n` or `\r\n`, no trailing empty line
//! - Empty text produces no lines and leaves the flag untouched

use std::time::Duration;

use crate::color::GRAY;
use crate::timing::format_elapsed;

/// Result of annotating one rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// Complete output records, in order.
    pub lines: Vec<String>,
    /// Whether the next line would still receive the suffix.
    pub show_delta: bool,
}

/// Build the `+<duration>` suffix, gray when color is on.
pub fn elapsed_suffix(elapsed: Duration, color: bool) -> String {
    let text = format!("+{}", format_elapsed(elapsed));
    if color {
        GRAY.wrap(text)
    } else {
        text
    }
}

/// Annotate rendered text for output.
pub fn annotate(
    prefix: &str,
    text: &str,
    elapsed: Duration,
    color: bool,
    mut show_delta: bool,
) -> Annotated {
    let mut lines = Vec::new();
    for line in text.lines() {
        if show_delta {
            lines.push(format!("{prefix}{line} {}", elapsed_suffix(elapsed, color)));
            show_delta = false;
        } else {
            lines.push(format!("{prefix}{line}"));
        }
    }
    Annotated { lines, show_delta }
}
