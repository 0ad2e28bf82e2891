//! Correlation header wire protocol.
//!
//! # Data Flow
//! ```text
//! raw header value(s), each possibly comma-joined
//!     → codec.rs (flatten, extract corrid/attr tokens)
//!     → context::store (decoded state)
//!     → codec.rs (encode state back into ordered tokens)
//!     → outbound header value
//! ```
//!
//! # Design Decisions
//! - Label matching is a plain string-prefix test; no escaping mechanism
//! - Malformed tokens are dropped silently, never surfaced as errors
//! - Encode output is decode-compatible (round-trip preserves id + attrs)

pub mod codec;

pub use codec::{ATTR_LABEL, CORRID_LABEL};
