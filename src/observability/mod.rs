//! Observability subsystem.
//!
//! The logger's own output is plain text to its sink; this module only covers
//! internal diagnostics emitted through `tracing`.

pub mod logging;

pub use logging::init_logging;
