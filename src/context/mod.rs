//! Correlation context storage subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request headers
//!     → headers::codec (decode into id + attributes)
//!     → store (task-local CorrelationContext)
//!     → logging facades read id/attrs/context per event
//!     → headers::codec (encode store state)
//!     → outbound response headers
//! ```
//!
//! # Design Decisions
//! - One CorrelationContext per logical task; never shared across tasks
//! - Child tasks inherit a copy of the parent state, not a reference
//! - Mutations within a task are sequential, so no locking is needed

pub mod store;

pub use store::CorrelationContext;
