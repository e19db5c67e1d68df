//! Output subsystem.
//!
//! # Data Flow
//! ```text
//! rendered text + elapsed + show_delta
//!     → annotate.rs (split, suffix first line, prefix all)
//!     → sink.rs (one record per line; stderr by default)
//! ```

pub mod annotate;
pub mod sink;

pub use annotate::{annotate, Annotated};
pub use sink::{MemorySink, Sink, StderrSink};
