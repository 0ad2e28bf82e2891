//! Backend seam: prepared records in, tracing events out.
//!
//! # Responsibilities
//! - Define the record shape handed to the logging backend
//! - Dispatch records to `tracing` at the mapped level and target
//!
//! # Design Decisions
//! - `LogSink` is a trait so tests can capture records instead of emitting
//! - APM and MDAL map onto INFO-level tracing events with dedicated
//!   targets, which is what backend filter configuration matches on

use serde_json::{Map, Value};

use crate::logging::level::Level;

/// Tracing target for standard leveled records.
pub const APP_TARGET: &str = "corrlog";

/// Tracing target for APM operational-metric records.
pub const APM_TARGET: &str = "corrlog::apm";

/// Tracing target for MDAL activity records.
pub const MDAL_TARGET: &str = "corrlog::mdal";

/// One fully-prepared log record.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Facade name the record was emitted through.
    pub logger: String,
    /// Stable log code id.
    pub code: &'static str,
    /// Rendered message text.
    pub message: String,
    /// Side-channel of extra named fields.
    pub fields: Map<String, Value>,
    /// Rendered error context, when the call carried one.
    pub error: Option<String>,
}

/// The external logging backend interface.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// Default sink dispatching into the `tracing` backend.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        let mut fields = record.fields;
        if let Some(error) = record.error {
            fields.insert("error".to_string(), Value::String(error));
        }
        let fields = Value::Object(fields).to_string();

        match record.level {
            Level::Info => tracing::info!(
                target: APP_TARGET,
                logger = %record.logger,
                code = record.code,
                fields = %fields,
                "{}",
                record.message
            ),
            Level::Apm => tracing::info!(
                target: APM_TARGET,
                logger = %record.logger,
                code = record.code,
                fields = %fields,
                "{}",
                record.message
            ),
            Level::Mdal => tracing::info!(
                target: MDAL_TARGET,
                logger = %record.logger,
                code = record.code,
                fields = %fields,
                "{}",
                record.message
            ),
            Level::Warning => tracing::warn!(
                target: APP_TARGET,
                logger = %record.logger,
                code = record.code,
                fields = %fields,
                "{}",
                record.message
            ),
            Level::Error => tracing::error!(
                target: APP_TARGET,
                logger = %record.logger,
                code = record.code,
                fields = %fields,
                "{}",
                record.message
            ),
        }
    }
}
