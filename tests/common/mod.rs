//! Shared helpers for logger integration tests.

use kemba::{Kemba, LoggerConfig, MemorySink};

/// Build a logger writing into a fresh in-memory sink.
#[allow(dead_code)]
pub fn capture(tag: &str, config: LoggerConfig) -> (Kemba, MemorySink) {
    let sink = MemorySink::new();
    let k = Kemba::with_config(tag, config).with_sink(sink.clone());
    (k, sink)
}

/// Allow-list config with color suppressed.
#[allow(dead_code)]
pub fn plain(allowed: &str) -> LoggerConfig {
    LoggerConfig::new(allowed).with_no_color(true)
}

/// Assert that `line` matches `pattern`.
pub fn assert_matches(pattern: &str, line: &str) {
    let re = regex::Regex::new(pattern).unwrap();
    assert!(re.is_match(line), "{line:?} does not match {pattern:?}");
}
