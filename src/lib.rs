//! Kemba: a tag-filtered development logger.
//!
//! A [`Kemba`] logger writes to stderr only when its tag matches the
//! allow-list in `DEBUG` / `KEMBA`. Each tag gets a stable color, and the
//! first line of every emission is suffixed with the time since that logger's
//! previous one.
//!
//! ```text
//! DEBUG=svc:* my-app
//! svc:db connected +0ms
//! svc:db [ +12ms
//! svc:db     1,
//! svc:db     2,
//! svc:db ]
//! ```
//!
//! # Usage
//! ```
//! use kemba::{kemba_log, kemba_printf, Kemba};
//!
//! let k = Kemba::new("svc:db");
//! kemba_printf!(k, "connected to {}", "localhost");
//! kemba_log!(k, vec![1, 2]);
//!
//! let pool = k.extend("pool");
//! kemba_printf!(pool, "{:?}", (4, 16));
//! ```

// Core
pub mod config;
pub mod logger;
pub mod matching;

// Rendering
pub mod color;
pub mod output;
pub mod timing;

// Cross-cutting concerns
pub mod observability;

pub use color::{pick_color, Color256};
pub use config::{ConfigSource, LoggerConfig};
pub use logger::Kemba;
pub use matching::is_enabled;
pub use output::{MemorySink, Sink, StderrSink};
