//! Structured Application Logging with Correlation Propagation

pub mod config;
pub mod context;
pub mod headers;
pub mod http;
pub mod logging;

pub use config::{LoggingConfig, OutputFormat};
pub use context::CorrelationContext;
pub use logging::{get_logger, get_mdal_logger, ActivityLogger, AppLogger};
