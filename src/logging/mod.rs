//! Logging facades and backend dispatch.
//!
//! # Data Flow
//! ```text
//! caller
//!     → leveled.rs (AppLogger: info/warn/error/apm)
//!     → activity.rs (ActivityLogger: MDAL events, attributes, contexts)
//!         both read context::store per call
//!     → template.rs (positional message rendering)
//!     → sink.rs (LogSink seam → tracing backend)
//!
//! on any formatting/dispatch failure:
//!     → fallback.rs (internal-error record, then raw stderr)
//! ```
//!
//! # Design Decisions
//! - Nothing in this subsystem ever propagates an error or panics into the
//!   caller; the worst symptom is a missing or malformed log line
//! - APM and MDAL are routed through dedicated tracing targets so backend
//!   configuration can filter them independently of standard levels
//! - The output format (Text vs JSON) is read once at initialization and
//!   threaded into facade constructors

pub mod activity;
pub mod codes;
mod fallback;
pub mod level;
pub mod leveled;
pub mod runtime;
pub mod sink;
pub mod template;

pub use activity::ActivityLogger;
pub use codes::LogCode;
pub use level::{ActivityEventStatus, Level, SecurityLevel};
pub use leveled::AppLogger;
pub use runtime::{get_logger, get_mdal_logger, init, init_with, is_initialized};
pub use sink::{LogRecord, LogSink, TracingSink};
pub use template::FormatError;
