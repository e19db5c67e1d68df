//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! DEBUG / KEMBA / NOCOLOR env      TOML file (--config)
//!     → schema.rs (from_env)           → loader.rs (parse)
//!     → LoggerConfig (immutable)  ←────┘
//!     → ConfigSource (Env | Fixed), kept by each logger
//!     → re-read on every construction, including extend()
//!
//! Advisory:
//!     validation.rs inspects the allow-list and reports suspicious patterns
//! ```
//!
//! # Design Decisions
//! - Config is read once per logger; nothing re-reads it mid-lifetime
//! - All fields have defaults, an empty config disables every logger
//! - Validation never changes matching behavior

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ConfigSource, LoggerConfig};
pub use validation::{validate_allow_list, ValidationError};
