//! Logging configuration subsystem.
//!
//! # Data Flow
//! ```text
//! environment (CORRLOG_FORMAT, CORRLOG_CONFIG)
//!     → schema.rs (OutputFormat, typed LoggingConfig)
//!     → loader.rs (parse file, fall back to bundled default)
//!     → logging::runtime (filter directives → tracing subscriber)
//! ```
//!
//! # Design Decisions
//! - Configuration is immutable once read at process start
//! - A missing or invalid config file falls back to the bundled default;
//!   initialization failures are reported to stderr, never raised
//! - The output format is threaded into facade constructors rather than
//!   consulted as ambient global state

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggingConfig, OutputFormat};
