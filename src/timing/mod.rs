//! Timing subsystem.
//!
//! # Data Flow
//! ```text
//! emit call
//!     → tracker.rs (delta since last emission, then reset)
//!     → format.rs (truncate to ms, render "250ms" / "1.25s")
//!     → suffix on the first line of the emission
//! ```

pub mod format;
pub mod tracker;

pub use format::format_elapsed;
pub use tracker::ElapsedTracker;
