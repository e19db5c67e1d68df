//! Color subsystem.
//!
//! # Data Flow
//! ```text
//! tag
//!     → palette.rs (CRC-64 → seeded draw → palette entry)
//!     → render.rs (owo-colors xterm foreground + reset)
//!     → prefix string, computed once per enabled logger
//! ```
//!
//! # Design Decisions
//! - Pure function of the tag, nothing cached or shared
//! - Only enabled loggers with color on ever reach this subsystem

pub mod palette;
pub mod render;

pub use palette::{pick_color, PALETTE};
pub use render::{Color256, GRAY};
