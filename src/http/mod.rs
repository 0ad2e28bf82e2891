//! HTTP request-boundary adapter.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (decode X-Correlation-ID into a fresh scope)
//!     → downstream handler (reads/writes the scoped context)
//!     → middleware.rs (encode final state into the response header)
//! ```

pub mod middleware;

pub use middleware::{propagate_correlation, CORRELATION_HEADER};
