//! Logger subsystem.
//!
//! # Data Flow
//! ```text
//! Kemba::new(tag)
//!     → config (read allow-list once)
//!     → matching (enabled?)
//!     → color (prefix, only when enabled and color on)
//!
//! printf / println / log
//!     → disabled? return
//!     → render (format_args / {:#?})
//!     → timing (elapsed since last emission)
//!     → output (annotate, write to sink)
//! ```

#[macro_use]
mod macros;
pub mod kemba;

pub use kemba::Kemba;
