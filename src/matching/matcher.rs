//! Tag matching logic.
//!
//! # Responsibilities
//! - Match a tag against a single allow-list entry (exact or wildcard)
//! - Combine entries with OR semantics, first hit wins
//!
//! # Design Decisions
//! - Entries without `*` are plain string equality, no regex involved
//! - `*` becomes `.*` by plain substitution, so it spans `:` separators too
//! - Anchors are added unless the entry already starts with `^` / ends with `$`
//! - Case-sensitive, whitespace is significant
//! - A wildcard that fails to compile never matches

use regex::Regex;
use thiserror::Error;

/// Trait for matching tags against allow-list entries.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the tag matches this entry.
    fn matches(&self, tag: &str) -> bool;
}

/// Error raised when a wildcard entry is not a valid expression.
#[derive(Debug, Error)]
#[error("invalid wildcard pattern {pattern:?}: {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

/// Matches a tag by exact string equality.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    expected: String,
}

impl ExactMatcher {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, tag: &str) -> bool {
        tag == self.expected
    }
}

/// Matches a tag against an entry containing `*`.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    regex: Regex,
}

impl WildcardMatcher {
    /// Compile a wildcard entry into an anchored expression.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let expr = wildcard_to_regex(pattern);
        let regex = Regex::new(&expr).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl Matcher for WildcardMatcher {
    fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

/// Stand-in for an entry that could not be compiled.
#[derive(Debug, Clone, Copy)]
pub struct NeverMatcher;

impl Matcher for NeverMatcher {
    fn matches(&self, _tag: &str) -> bool {
        false
    }
}

/// Combines allow-list entries with OR semantics.
#[derive(Debug, Default)]
pub struct AllowList {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AllowList {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Parse a comma-separated allow-list.
    ///
    /// An empty string yields an empty list, which matches nothing.
    pub fn parse(allowed: &str) -> Self {
        if allowed.is_empty() {
            return Self::default();
        }

        let matchers = allowed.split(',').map(compile_entry).collect();
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for AllowList {
    fn matches(&self, tag: &str) -> bool {
        // Left to right, stop at the first hit
        self.matchers.iter().any(|m| m.matches(tag))
    }
}

/// Returns true if `tag` is enabled by the comma-separated `allowed` list.
pub fn is_enabled(tag: &str, allowed: &str) -> bool {
    AllowList::parse(allowed).matches(tag)
}

fn compile_entry(pattern: &str) -> Box<dyn Matcher> {
    if !pattern.contains('*') {
        return Box::new(ExactMatcher::new(pattern));
    }

    match WildcardMatcher::compile(pattern) {
        Ok(m) => Box::new(m),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring allow-list entry");
            Box::new(NeverMatcher)
        }
    }
}

fn wildcard_to_regex(pattern: &str) -> String {
    let mut expr = pattern.replace('*', ".*");
    if !expr.starts_with('^') {
        expr.insert(0, '^');
    }
    if !expr.ends_with('$') {
        expr.push('$');
    }
    expr
}
