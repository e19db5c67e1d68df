//! Diagnostics for the `kemba` binary.
//!
//! # Responsibilities
//! - Install a `tracing` subscriber writing to stderr
//! - Take the filter from `RUST_LOG`, falling back to a quiet default
//!
//! # Design Decisions
//! - The library never installs a subscriber; only the binary calls this
//! - Library diagnostics (ignored patterns, construction decisions) surface
//!   at `debug`/`trace` so they stay out of normal output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "kemba=warn";

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
