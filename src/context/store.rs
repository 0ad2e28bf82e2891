//! Task-local storage for the active correlation context.
//!
//! # Responsibilities
//! - Hold exactly one `CorrelationContext` per executing logical task
//! - Lazily generate a correlation id when headers are produced
//! - Maintain the nested context-label stack (LIFO)
//!
//! # Design Decisions
//! - Async tasks get an isolated store via `scope()`; code running outside
//!   any scope falls back to a thread-local store
//! - `snapshot()` + `scope()` give copy-on-branch semantics when spawning
//!   child tasks: the child starts from the parent's current state and
//!   diverges from there

use std::cell::RefCell;
use std::future::Future;

use uuid::Uuid;

use crate::headers::codec;

/// Correlation state for one logical request chain.
///
/// The empty string is the "unset" sentinel for `correlation_id`; an id is
/// generated on first header emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrelationContext {
    /// Globally-unique identifier for one logical request chain.
    pub correlation_id: String,

    /// Pre-joined `"name:value"` attribute tokens, in insertion order.
    /// Duplicates are permitted.
    pub attributes: Vec<String>,

    /// LIFO stack of nested context labels, rendered joined by `|`.
    pub context_stack: Vec<String>,
}

tokio::task_local! {
    static TASK_CONTEXT: RefCell<CorrelationContext>;
}

thread_local! {
    static THREAD_CONTEXT: RefCell<CorrelationContext> =
        RefCell::new(CorrelationContext::default());
}

fn in_task_scope() -> bool {
    TASK_CONTEXT.try_with(|_| ()).is_ok()
}

/// Run `f` against the context of the current logical task, creating a
/// default context on first access.
fn with_context<T>(f: impl FnOnce(&mut CorrelationContext) -> T) -> T {
    if in_task_scope() {
        TASK_CONTEXT.with(|cell| f(&mut cell.borrow_mut()))
    } else {
        THREAD_CONTEXT.with(|cell| f(&mut cell.borrow_mut()))
    }
}

/// Run `future` with its own isolated correlation context.
///
/// Mutations made inside the scope are invisible to every other task. Pass
/// `snapshot()` as `context` to inherit the current state when branching.
pub async fn scope<F>(context: CorrelationContext, future: F) -> F::Output
where
    F: Future,
{
    TASK_CONTEXT.scope(RefCell::new(context), future).await
}

/// Copy of the current task's context, for seeding a child task.
pub fn snapshot() -> CorrelationContext {
    with_context(|ctx| ctx.clone())
}

/// Generate a fresh correlation id and set it on the current context.
pub fn init_headers() {
    set_corr_id(Uuid::new_v4().to_string());
}

/// Replace the current context from raw inbound header values.
///
/// All prior state is discarded first. Each raw value may itself be a
/// comma-joined token list; the first `corrid:` token wins and every
/// retained `attr:` value is appended in scan order. A missing or empty id
/// token falls back to generating a fresh one.
pub fn set_headers<S: AsRef<str>>(raw_values: &[S]) {
    clean();
    let tokens = codec::flatten(raw_values);

    match codec::extract_corr_id(&tokens) {
        Some(id) if !id.is_empty() => set_corr_id(id),
        _ => init_headers(),
    }

    for attr in codec::extract_attrs(&tokens) {
        add_attr(attr);
    }
}

pub fn set_corr_id(corr_id: impl Into<String>) {
    with_context(|ctx| ctx.correlation_id = corr_id.into());
}

pub fn get_corr_id() -> String {
    with_context(|ctx| ctx.correlation_id.clone())
}

/// Append a pre-joined `"name:value"` token to the attribute list.
pub fn add_attr(attr: impl Into<String>) {
    with_context(|ctx| ctx.attributes.push(attr.into()));
}

pub fn get_attrs() -> Vec<String> {
    with_context(|ctx| ctx.attributes.clone())
}

/// Encode the current context as outbound header tokens.
///
/// The id is generated first if still unset, so the result always starts
/// with a non-empty `corrid:` token, followed by attributes in insertion
/// order.
pub fn get_headers() -> Vec<String> {
    if get_corr_id().is_empty() {
        init_headers();
    }
    with_context(|ctx| codec::encode(&ctx.correlation_id, &ctx.attributes))
}

/// Reset the current context to defaults: empty id, no attributes, no
/// context labels.
pub fn clean() {
    with_context(|ctx| *ctx = CorrelationContext::default());
}

/// Push a nested context label.
pub fn add_context(label: impl Into<String>) {
    with_context(|ctx| ctx.context_stack.push(label.into()));
}

/// Pop the most recent context label. No-op on an empty stack.
pub fn remove_top_context() {
    with_context(|ctx| {
        ctx.context_stack.pop();
    });
}

pub fn remove_all_contexts() {
    with_context(|ctx| ctx.context_stack.clear());
}

pub fn get_current_context() -> Vec<String> {
    with_context(|ctx| ctx.context_stack.clone())
}
