//! Log code catalogue.
//!
//! Every emitted record carries a stable code so log consumers can match
//! on it regardless of the message wording. Templates use positional `{}`
//! placeholders with `{{`/`}}` escaping literal braces.

/// A stable log identifier paired with its message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCode {
    pub id: &'static str,
    pub template: &'static str,
}

/// A logging call itself failed; the original template and level travel as
/// diagnostic payload.
pub const LOGGER_BAD_ARGUMENTS: LogCode = LogCode {
    id: "CORRLOG001",
    template: "Failed to log message [{}] at {} level correctly, see attached error for details",
};

/// Default MDAL activity event.
pub const MDAL_MESSAGE: LogCode = LogCode {
    id: "MDALEVENT",
    template: "Event recorded",
};

/// Per-event attribute, text rendering (name and value inline).
pub const MDAL_ADD_ATTRIBUTE_TEXT: LogCode = LogCode {
    id: "MDALATTR",
    template: "[ attribute: {{\"{}\": \"{}\"}} ]",
};

/// Per-event attribute, JSON rendering (name and value as fields).
pub const MDAL_ADD_ATTRIBUTE_JSON: LogCode = LogCode {
    id: "MDALATTR",
    template: "Attribute recorded",
};

/// Inbound request arrived without a correlation header.
pub const MDAL_NO_CORRID: LogCode = LogCode {
    id: "CORRIDNOTPRESENT",
    template: "Correlation Id not present in the request",
};
