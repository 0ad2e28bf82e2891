//! MDAL activity-event facade.
//!
//! # Responsibilities
//! - Push/pop nested context labels around units of work
//! - Record activity events with a structured payload
//! - Record per-event and task-global attributes
//!
//! # Design Decisions
//! - Text and JSON rendering collect different extra fields; the mode is
//!   fixed at construction from the process-wide output format
//! - In JSON mode each global attribute becomes a top-level field split on
//!   its first colon; a token with no colon fails that split and the event
//!   diverts to the internal-error path (text mode passes it through raw)

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::OutputFormat;
use crate::context::store;
use crate::logging::codes::{self, LogCode};
use crate::logging::fallback;
use crate::logging::level::Level;
use crate::logging::sink::{LogRecord, LogSink, TracingSink};
use crate::logging::template::{self, FormatError};

/// Activity logger bound to the task-local correlation context.
pub struct ActivityLogger {
    name: String,
    enabled: bool,
    format: OutputFormat,
    sink: Arc<dyn LogSink>,
}

impl ActivityLogger {
    pub(crate) fn new(name: &str, format: OutputFormat) -> Self {
        Self::with_sink(name, format, Arc::new(TracingSink))
    }

    /// Build an activity logger emitting into a caller-supplied sink.
    pub fn with_sink(name: &str, format: OutputFormat, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            format,
            sink,
        }
    }

    /// Degraded no-op instance, handed out before initialization.
    pub(crate) fn disabled(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: false,
            format: OutputFormat::Text,
            sink: Arc::new(TracingSink),
        }
    }

    /// Push a nested context label for subsequent events.
    pub fn add_context(&self, label: impl Into<String>) {
        if self.enabled {
            store::add_context(label);
        }
    }

    /// Pop the most recent context label. No-op on an empty stack.
    pub fn remove_top_context(&self) {
        if self.enabled {
            store::remove_top_context();
        }
    }

    pub fn remove_all_contexts(&self) {
        if self.enabled {
            store::remove_all_contexts();
        }
    }

    pub fn get_current_context(&self) -> Vec<String> {
        if self.enabled {
            store::get_current_context()
        } else {
            Vec::new()
        }
    }

    /// Record an activity event with the default event code.
    pub fn log_event(&self, event_info: &Map<String, Value>) {
        self.log_event_with(codes::MDAL_MESSAGE, &[], event_info);
    }

    /// Record an activity event with an explicit code and template args.
    pub fn log_event_with(&self, code: LogCode, args: &[&str], event_info: &Map<String, Value>) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.try_log_event(code, args, event_info) {
            fallback::internal_error(
                self.sink.as_ref(),
                &self.name,
                Level::Mdal,
                code.template,
                &err,
            );
        }
    }

    fn try_log_event(
        &self,
        code: LogCode,
        args: &[&str],
        event_info: &Map<String, Value>,
    ) -> Result<(), FormatError> {
        let mut message = template::render(code.template, args)?;

        let fields = match self.format {
            OutputFormat::Json => self.json_fields(code.id, Some(event_info))?,
            OutputFormat::Text => {
                // The default event message carries the payload inline.
                if code == codes::MDAL_MESSAGE && !event_info.is_empty() {
                    let payload = serde_json::to_string(event_info)
                        .map_err(|e| FormatError::Serialize(e.to_string()))?;
                    message.push(' ');
                    message.push_str(&payload);
                }
                self.text_fields(code.id)
            }
        };

        self.sink.emit(LogRecord {
            level: Level::Mdal,
            logger: self.name.clone(),
            code: code.id,
            message,
            fields,
            error: None,
        });
        Ok(())
    }

    /// Record a single named attribute as its own event.
    pub fn add_attribute(&self, name: &str, value: &str) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.try_add_attribute(name, value) {
            let template = match self.format {
                OutputFormat::Json => codes::MDAL_ADD_ATTRIBUTE_JSON.template,
                OutputFormat::Text => codes::MDAL_ADD_ATTRIBUTE_TEXT.template,
            };
            fallback::internal_error(self.sink.as_ref(), &self.name, Level::Mdal, template, &err);
        }
    }

    fn try_add_attribute(&self, name: &str, value: &str) -> Result<(), FormatError> {
        let (code, message, fields) = match self.format {
            OutputFormat::Json => {
                let code = codes::MDAL_ADD_ATTRIBUTE_JSON;
                let mut fields = self.json_fields(code.id, None)?;
                fields.insert(name.to_string(), Value::String(value.to_string()));
                (code, template::render(code.template, &[])?, fields)
            }
            OutputFormat::Text => {
                let code = codes::MDAL_ADD_ATTRIBUTE_TEXT;
                let message = template::render(code.template, &[name, value])?;
                (code, message, self.text_fields(code.id))
            }
        };

        self.sink.emit(LogRecord {
            level: Level::Mdal,
            logger: self.name.clone(),
            code: code.id,
            message,
            fields,
            error: None,
        });
        Ok(())
    }

    /// Attach a `name:value` attribute visible on every subsequent event
    /// for the lifetime of the task context.
    pub fn add_global_attribute(&self, name: &str, value: &str) {
        if self.enabled {
            store::add_attr(format!("{}:{}", name, value));
        }
    }

    pub fn get_current_global_attributes(&self) -> Vec<String> {
        if self.enabled {
            store::get_attrs()
        } else {
            Vec::new()
        }
    }

    /// Extra fields for text rendering: the context stack is concatenated
    /// onto the correlation id, attributes stay raw and comma-joined.
    fn text_fields(&self, code_id: &str) -> Map<String, Value> {
        let context = store::get_current_context();
        let corr_id = if context.is_empty() {
            store::get_corr_id()
        } else {
            format!("{}/{}", store::get_corr_id(), context.join("|"))
        };

        let mut fields = Map::new();
        fields.insert("log_code".to_string(), Value::String(code_id.to_string()));
        fields.insert("correlation_id".to_string(), Value::String(corr_id));
        fields.insert(
            "log_attribute".to_string(),
            Value::String(store::get_attrs().join(",")),
        );
        fields
    }

    /// Extra fields for JSON rendering: bare correlation id, the context
    /// stack under its own field, the event payload nested, and each global
    /// attribute split into a top-level field.
    fn json_fields(
        &self,
        code_id: &str,
        event_info: Option<&Map<String, Value>>,
    ) -> Result<Map<String, Value>, FormatError> {
        let mut fields = Map::new();
        fields.insert("log_code".to_string(), Value::String(code_id.to_string()));
        fields.insert(
            "correlation_id".to_string(),
            Value::String(store::get_corr_id()),
        );
        fields.insert(
            "context".to_string(),
            Value::String(store::get_current_context().join("|")),
        );
        if let Some(event) = event_info {
            fields.insert("event".to_string(), Value::Object(event.clone()));
        }

        for attr in store::get_attrs() {
            let mut parts = attr.splitn(2, ':');
            let name = parts.next().unwrap_or_default().to_string();
            let value = parts
                .next()
                .ok_or_else(|| FormatError::MalformedAttribute { token: attr.clone() })?;
            fields.insert(name, Value::String(value.to_string()));
        }
        Ok(fields)
    }
}
