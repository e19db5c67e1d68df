//! The logger instance.
//!
//! # Responsibilities
//! - Decide once, at construction, whether a tag is enabled
//! - Precompute the (optionally colored) line prefix
//! - Render, annotate and write values on each emit call
//! - Build extended loggers from scratch
//!
//! # Design Decisions
//! - A disabled logger does no formatting, no color work and no writes
//! - `enabled` and `prefix` never change after construction
//! - One mutex per instance covers "read delta, reset clock, write lines"

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::color::pick_color;
use crate::config::{ConfigSource, LoggerConfig};
use crate::matching::is_enabled;
use crate::output::{annotate, Sink, StderrSink};
use crate::timing::ElapsedTracker;

/// A tag-filtered development logger.
///
/// Output goes to stderr unless another [`Sink`] is supplied. Whether anything
/// is written at all is decided when the logger is built, by matching its tag
/// against the configured allow-list.
#[derive(Debug)]
pub struct Kemba {
    tag: String,
    allowed: String,
    enabled: bool,
    color: bool,
    prefix: String,
    source: ConfigSource,
    sink: Arc<dyn Sink>,
    last: Mutex<ElapsedTracker>,
}

impl Kemba {
    /// Create a logger configured from `DEBUG`, `KEMBA` and `NOCOLOR`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_source(tag, ConfigSource::Env, Arc::new(StderrSink))
    }

    /// Create a logger from an explicit configuration.
    pub fn with_config(tag: impl Into<String>, config: LoggerConfig) -> Self {
        Self::with_source(tag, ConfigSource::Fixed(config), Arc::new(StderrSink))
    }

    /// Create a logger from a configuration source and output sink.
    pub fn with_source(tag: impl Into<String>, source: ConfigSource, sink: Arc<dyn Sink>) -> Self {
        let tag = tag.into();
        let config = source.load();

        let (enabled, color) = if config.is_empty() {
            (false, false)
        } else {
            (is_enabled(&tag, &config.allowed), !config.no_color)
        };

        let prefix = match (enabled, color) {
            (false, _) => String::new(),
            (true, true) => format!("{} ", pick_color(&tag).wrap(&tag)),
            (true, false) => format!("{tag} "),
        };

        tracing::trace!(tag = %tag, enabled, color, "Logger constructed");

        Self {
            tag,
            allowed: config.allowed,
            enabled,
            color,
            prefix,
            source,
            sink,
            last: Mutex::new(ElapsedTracker::new()),
        }
    }

    /// Replace the output sink. Extensions inherit it.
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The allow-list captured at construction.
    pub fn allowed(&self) -> &str {
        &self.allowed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Text written before every line. Empty when disabled.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Write preformatted arguments, usually built with [`kemba_printf!`](crate::kemba_printf).
    ///
    /// `{:?}` gives compact rendering, `{:#?}` expands structs and collections
    /// over several lines. Only the first line carries the elapsed suffix.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }

        let text = fmt::format(args);

        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        self.emit(&mut last, &text);
    }

    /// Write each value in expanded (`{:#?}`) form.
    ///
    /// Every value is its own emission: it measures its own elapsed time and
    /// gets its own suffix on its first line.
    pub fn println(&self, values: &[&dyn fmt::Debug]) {
        if !self.enabled {
            return;
        }

        // Render outside the lock: a Debug impl may log through this instance
        let texts: Vec<String> = values.iter().map(|value| format!("{value:#?}")).collect();

        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        for text in &texts {
            self.emit(&mut last, text);
        }
    }

    /// Alias for [`println`](Self::println).
    pub fn log(&self, values: &[&dyn fmt::Debug]) {
        self.println(values);
    }

    /// Build a new logger tagged `<tag>:<suffix>`.
    ///
    /// The new logger re-reads its configuration from the same source and
    /// decides `enabled` for the combined tag on its own; nothing is inherited
    /// except the source and the sink.
    pub fn extend(&self, suffix: &str) -> Kemba {
        let tag = format!("{}:{}", self.tag, suffix);
        Kemba::with_source(tag, self.source.clone(), Arc::clone(&self.sink))
    }

    /// Annotate and write one rendered value. Text that produces no lines
    /// leaves the stopwatch running.
    fn emit(&self, last: &mut ElapsedTracker, text: &str) {
        if text.is_empty() {
            return;
        }

        let elapsed = last.since_last();
        let annotated = annotate(&self.prefix, text, elapsed, self.color, true);
        for line in &annotated.lines {
            self.sink.write_line(line);
        }
    }
}
