//! Allow-list validation.
//!
//! # Responsibilities
//! - Flag patterns that can never match what the author probably meant
//! - Report wildcard patterns that fail to compile
//!
//! # Design Decisions
//! - Advisory only: matching never depends on validation
//! - Returns all findings, not just the first
//! - Whitespace is significant in patterns, so padding is flagged rather than trimmed

use thiserror::Error;

use crate::matching::matcher::WildcardMatcher;

/// A finding about one entry of an allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pattern #{index} is empty")]
    EmptyPattern { index: usize },

    #[error("pattern #{index} {pattern:?} has surrounding whitespace and will only match padded tags")]
    PaddedPattern { index: usize, pattern: String },

    #[error("pattern #{index} {pattern:?} does not compile: {reason}")]
    InvalidWildcard {
        index: usize,
        pattern: String,
        reason: String,
    },
}

/// Validate an allow-list string.
///
/// An empty allow-list is valid: it simply disables every logger.
pub fn validate_allow_list(allowed: &str) -> Result<(), Vec<ValidationError>> {
    if allowed.is_empty() {
        return Ok(());
    }

    let mut errors = Vec::new();
    for (index, pattern) in allowed.split(',').enumerate() {
        if pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
            continue;
        }

        if pattern.trim() != pattern {
            errors.push(ValidationError::PaddedPattern {
                index,
                pattern: pattern.to_string(),
            });
        }

        if pattern.contains('*') {
            if let Err(e) = WildcardMatcher::compile(pattern) {
                errors.push(ValidationError::InvalidWildcard {
                    index,
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
