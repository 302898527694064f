//! The attach/rechain state machine invoked at boundary crossings.
//!
//! The embedding glue decides *when* an error crosses a boundary; these
//! functions only record the crossing. [`chain`] is the general entry point:
//! the first call records a single leaf, every further call wraps the
//! existing chain and the newly captured snapshot into one more
//! [`TraceNode::Pair`] level. No call ever mutates or drops a previously
//! recorded node.
//!
//! # Examples
//!
//! ```
//! use trace_splice::chain::{chain, chain_state, ChainState};
//! use trace_splice::host::SandboxError;
//! use trace_splice::registry::BoundaryRegistry;
//! use trace_splice::snapshot;
//!
//! let registry = BoundaryRegistry::new();
//! let mut error = SandboxError::new("TypeError", "x is not a function");
//! assert_eq!(chain_state(&error, &registry), ChainState::Unseen);
//!
//! chain(&mut error, &registry, snapshot!["inner.js":3:7 => "f"]);
//! assert_eq!(chain_state(&error, &registry), ChainState::Attached);
//!
//! chain(&mut error, &registry, snapshot!["outer.js":10:1 => "run"]);
//! assert_eq!(chain_state(&error, &registry), ChainState::Chained);
//! ```

use crate::accessor::StackAccessor;
use crate::registry::BoundaryRegistry;
use crate::traits::ErrorObject;
use crate::types::{TraceNode, TraceSnapshot};

/// Where an error object stands in the boundary-crossing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// No hidden slot; this crate has never seen the error.
    Unseen,
    /// The slot holds a single leaf; one crossing recorded.
    Attached,
    /// The slot holds a pair; two or more crossings recorded.
    Chained,
}

/// Records the first crossing of an error this crate has never seen.
///
/// Installs the snapshot as the hidden slot's single leaf and installs the
/// stack accessor. Valid from [`ChainState::Unseen`] only; calling it on an
/// error that already carries a chain replaces the chain. [`chain`] is the
/// general entry point and never loses recorded data.
pub fn attach<E>(error: &mut E, registry: &BoundaryRegistry, snapshot: TraceSnapshot)
where
    E: ErrorObject + ?Sized,
{
    let key = registry.key();
    #[cfg(feature = "tracing")]
    tracing::trace!(constructor = error.constructor_name(), "attached boundary trace");
    error.hidden_set(key, TraceNode::snapshot(snapshot));
    error.install_stack_accessor(StackAccessor::new(key));
}

/// Records one boundary crossing, chaining onto whatever the error already
/// carries.
///
/// If the hidden slot is empty, trace data recorded outside this crate is
/// recovered first: a native trace still associated with the error by the
/// host runtime becomes the older snapshot leaf; failing that, a plain
/// textual `stack` field (left behind when a cross-boundary copy flattened
/// the trace) becomes the older text leaf. With nothing to recover the call
/// degrades to [`attach`]. In every other case the existing slot value moves
/// into a new pair as the older side.
pub fn chain<E>(error: &mut E, registry: &BoundaryRegistry, snapshot: TraceSnapshot)
where
    E: ErrorObject + ?Sized,
{
    let key = registry.key();
    let older = match error.hidden_take(key) {
        Some(existing) => existing,
        None => match recover_older(error) {
            Some(recovered) => recovered,
            None => return attach(error, registry, snapshot),
        },
    };
    let node = TraceNode::pair(TraceNode::snapshot(snapshot), older);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        constructor = error.constructor_name(),
        segments = node.segments(),
        "chained boundary trace"
    );
    error.hidden_set(key, node);
    error.install_stack_accessor(StackAccessor::new(key));
}

/// Recovers trace data attached to `error` before this crate ever saw it.
fn recover_older<E>(error: &E) -> Option<TraceNode>
where
    E: ErrorObject + ?Sized,
{
    if let Some(native) = error.native_stack() {
        return Some(TraceNode::snapshot(native));
    }
    error.plain_stack_text().map(TraceNode::text)
}

/// Reports the error's position in the state machine.
pub fn chain_state<E>(error: &E, registry: &BoundaryRegistry) -> ChainState
where
    E: ErrorObject + ?Sized,
{
    match error.hidden_get(registry.key()) {
        None => ChainState::Unseen,
        Some(TraceNode::Pair { .. }) => ChainState::Chained,
        Some(_) => ChainState::Attached,
    }
}
