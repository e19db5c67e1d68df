//! Tag matching subsystem.
//!
//! # Data Flow
//! ```text
//! allow-list string ("svc:*,db,test:*:fail")
//!     → split on ','
//!     → matcher.rs (ExactMatcher | WildcardMatcher | NeverMatcher)
//!     → AllowList (OR, left to right)
//!     → enabled: bool, decided once per logger
//! ```
//!
//! # Design Decisions
//! - Deterministic: same tag and list always give the same answer
//! - Broken patterns degrade to "no match", never to an error

pub mod matcher;

pub use matcher::{is_enabled, AllowList, Matcher, PatternError};
