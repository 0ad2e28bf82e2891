//! Last-resort error reporting for the facades.
//!
//! Dispatch failures are reported in a strict fallback order: a structured
//! internal-error record first, and if preparing even that fails, a raw
//! write to stderr. Neither tier ever propagates to the caller.

use serde_json::{Map, Value};

use crate::context::store;
use crate::logging::codes;
use crate::logging::level::Level;
use crate::logging::sink::{LogRecord, LogSink};
use crate::logging::template::{self, FormatError};

/// Emit the fixed internal-error record for a failed logging call.
///
/// `original_level` and `original_template` identify the call that failed;
/// `source` is what went wrong while preparing it.
pub(crate) fn internal_error(
    sink: &dyn LogSink,
    logger: &str,
    original_level: Level,
    original_template: &str,
    source: &FormatError,
) {
    let bad_args = codes::LOGGER_BAD_ARGUMENTS;
    match template::render(bad_args.template, &[original_template, original_level.name()]) {
        Ok(message) => {
            let mut fields = Map::new();
            fields.insert("log_code".to_string(), Value::String(bad_args.id.to_string()));
            fields.insert(
                "correlation_id".to_string(),
                Value::String(store::get_corr_id()),
            );
            sink.emit(LogRecord {
                level: Level::Error,
                logger: logger.to_string(),
                code: bad_args.id,
                message,
                fields,
                error: Some(source.to_string()),
            });
        }
        Err(fallback_failure) => {
            eprintln!(
                "corrlog: failed to record logging error: {} (original failure: {})",
                fallback_failure, source
            );
        }
    }
}
