//! Leveled logging facade.
//!
//! # Responsibilities
//! - Render code-tagged message templates with positional args
//! - Attach the correlation id and security level as extra fields
//! - Guard every public call: failures divert to the internal-error path
//!
//! # Design Decisions
//! - Public methods return nothing; logging is best-effort infrastructure
//! - A degraded (disabled) instance is handed out when the runtime is not
//!   initialized, so callers never branch on acquisition errors

use std::error::Error;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::context::store;
use crate::logging::codes::LogCode;
use crate::logging::fallback;
use crate::logging::level::{Level, SecurityLevel};
use crate::logging::sink::{LogRecord, LogSink, TracingSink};
use crate::logging::template::{self, FormatError};

/// Leveled, code-tagged application logger.
pub struct AppLogger {
    name: String,
    enabled: bool,
    sink: Arc<dyn LogSink>,
}

impl AppLogger {
    pub(crate) fn new(name: &str) -> Self {
        Self::with_sink(name, Arc::new(TracingSink))
    }

    /// Build a logger emitting into a caller-supplied sink.
    pub fn with_sink(name: &str, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            sink,
        }
    }

    /// Degraded no-op instance, handed out before initialization.
    pub(crate) fn disabled(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: false,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn info(&self, code: LogCode, args: &[&str]) {
        self.log(Level::Info, code, args, SecurityLevel::default(), None);
    }

    pub fn warn(&self, code: LogCode, args: &[&str]) {
        self.log(Level::Warning, code, args, SecurityLevel::default(), None);
    }

    pub fn error(&self, code: LogCode, args: &[&str]) {
        self.log(Level::Error, code, args, SecurityLevel::default(), None);
    }

    /// Error record carrying the source error chain as diagnostic payload.
    pub fn error_with_cause(&self, code: LogCode, args: &[&str], cause: &dyn Error) {
        self.log(
            Level::Error,
            code,
            args,
            SecurityLevel::default(),
            Some(cause),
        );
    }

    /// Operational-metrics record (APM routing discriminator).
    pub fn apm(&self, code: LogCode, args: &[&str]) {
        self.log(Level::Apm, code, args, SecurityLevel::default(), None);
    }

    /// Full-control entry point; the convenience methods above delegate
    /// here.
    pub fn log(
        &self,
        level: Level,
        code: LogCode,
        args: &[&str],
        security: SecurityLevel,
        cause: Option<&dyn Error>,
    ) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.try_log(level, code, args, security, cause) {
            fallback::internal_error(self.sink.as_ref(), &self.name, level, code.template, &err);
        }
    }

    fn try_log(
        &self,
        level: Level,
        code: LogCode,
        args: &[&str],
        security: SecurityLevel,
        cause: Option<&dyn Error>,
    ) -> Result<(), FormatError> {
        let message = template::render(code.template, args)?;

        let mut fields = Map::new();
        fields.insert("log_code".to_string(), Value::String(code.id.to_string()));
        fields.insert(
            "correlation_id".to_string(),
            Value::String(store::get_corr_id()),
        );
        fields.insert(
            "security_level".to_string(),
            Value::String(security.as_str().to_string()),
        );

        self.sink.emit(LogRecord {
            level,
            logger: self.name.clone(),
            code: code.id,
            message,
            fields,
            error: cause.map(render_error_chain),
        });
        Ok(())
    }
}

/// Flatten an error and its sources into one diagnostic string.
fn render_error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::logging::sink::capture::CaptureSink;

    const GREETING: LogCode = LogCode {
        id: "TEST001",
        template: "hello {}",
    };

    #[test]
    fn test_info_record_fields() {
        store::clean();
        store::set_corr_id("cid-test");

        let sink = CaptureSink::shared();
        let logger = AppLogger::with_sink("unit", sink.clone());
        logger.info(GREETING, &["world"]);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.logger, "unit");
        assert_eq!(record.code, "TEST001");
        assert_eq!(record.message, "hello world");
        assert_eq!(record.fields["log_code"], "TEST001");
        assert_eq!(record.fields["correlation_id"], "cid-test");
        assert_eq!(record.fields["security_level"], "LEVEL1");
        assert!(record.error.is_none());
    }

    #[test]
    fn test_apm_maps_to_apm_level() {
        let sink = CaptureSink::shared();
        let logger = AppLogger::with_sink("unit", sink.clone());
        logger.apm(GREETING, &["apm"]);

        assert_eq!(sink.records()[0].level, Level::Apm);
    }

    #[test]
    fn test_bad_arguments_divert_to_internal_error() {
        let sink = CaptureSink::shared();
        let logger = AppLogger::with_sink("unit", sink.clone());
        // Template needs one argument; none supplied.
        logger.warn(GREETING, &[]);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.level, Level::Error);
        assert_eq!(record.code, codes::LOGGER_BAD_ARGUMENTS.id);
        // The failed call's template and level travel as payload.
        assert!(record.message.contains("hello {}"));
        assert!(record.message.contains("WARNING"));
        assert!(record.error.is_some());
    }

    #[test]
    fn test_error_with_cause_renders_chain() {
        let sink = CaptureSink::shared();
        let logger = AppLogger::with_sink("unit", sink.clone());
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        logger.error_with_cause(GREETING, &["ops"], &cause);

        let records = sink.records();
        assert_eq!(records[0].error.as_deref(), Some("disk on fire"));
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let sink = CaptureSink::shared();
        let mut logger = AppLogger::with_sink("unit", sink.clone());
        logger.enabled = false;
        logger.error(GREETING, &["nope"]);

        assert!(sink.records().is_empty());
    }
}
