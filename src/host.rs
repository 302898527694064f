//! Reference host object model.
//!
//! A real embedding wires [`crate::traits`] to its isolation runtime. This
//! module is the minimal stand-in: enough object model to run the whole
//! attach → chain → read control flow in tests, doc examples, and benches,
//! and a template for what an embedder's own implementation looks like.
//!
//! # Examples
//!
//! ```
//! use trace_splice::host::{SandboxContext, SandboxError};
//! use trace_splice::snapshot;
//!
//! let inner = SandboxContext::new();
//! let mut error = SandboxError::new("Error", "boom");
//! inner.chain(&mut error, snapshot!["worker.js":3:7 => "f"]);
//!
//! assert_eq!(error.stack().unwrap(), "Error: boom\n    at f (worker.js:3:7)");
//! ```

use crate::accessor::StackAccessor;
use crate::chain::{self, ChainState};
use crate::registry::{BoundaryRegistry, SlotKey};
use crate::traits::{ErrorObject, HiddenSlots};
use crate::types::alloc_type::{BTreeMap, String};
use crate::types::{TraceNode, TraceSnapshot};
#[cfg(feature = "serde")]
use serde::Serialize;

/// The visible `stack` property: absent, a plain value, or the installed
/// accessor.
#[derive(Debug, Clone)]
enum StackProperty {
    Absent,
    Value(String),
    Accessor(StackAccessor),
}

/// An error value living in a sandboxed context.
///
/// Carries a constructor name, an optional message, a `stack` property, an
/// optional runtime-associated native trace, and a private hidden-slot map.
/// The hidden slots and the accessor are invisible to serialization; only
/// the error's ordinary shape is exposed.
///
/// # Examples
///
/// ```
/// use trace_splice::host::SandboxError;
///
/// let error = SandboxError::new("TypeError", "x is not a function")
///     .with_plain_stack("TypeError: x is not a function\n    at foo:1:1");
/// assert_eq!(error.message(), Some("x is not a function"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct SandboxError {
    constructor_name: String,
    message: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    stack: StackProperty,
    #[cfg_attr(feature = "serde", serde(skip))]
    native_stack: Option<TraceSnapshot>,
    #[cfg_attr(feature = "serde", serde(skip))]
    hidden: BTreeMap<SlotKey, TraceNode>,
}

impl SandboxError {
    /// Creates an error with a constructor name and message.
    pub fn new<C, M>(constructor_name: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            constructor_name: constructor_name.into(),
            message: Some(message.into()),
            stack: StackProperty::Absent,
            native_stack: None,
            hidden: BTreeMap::new(),
        }
    }

    /// Creates an error with no message field at all.
    pub fn without_message<C: Into<String>>(constructor_name: C) -> Self {
        Self {
            constructor_name: constructor_name.into(),
            message: None,
            stack: StackProperty::Absent,
            native_stack: None,
            hidden: BTreeMap::new(),
        }
    }

    /// Associates the trace the runtime captured when the error was thrown.
    pub fn with_native_stack(mut self, snapshot: TraceSnapshot) -> Self {
        self.native_stack = Some(snapshot);
        self
    }

    /// Sets a plain-text `stack` value, as a cross-boundary copy that
    /// flattened the trace would leave behind.
    pub fn with_plain_stack<S: Into<String>>(mut self, stack: S) -> Self {
        self.stack = StackProperty::Value(stack.into());
        self
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Reads the `stack` property.
    ///
    /// A plain value returns its text; an installed accessor renders the
    /// chain afresh on every read.
    pub fn stack(&self) -> Option<String> {
        match &self.stack {
            StackProperty::Absent => None,
            StackProperty::Value(text) => Some(text.clone()),
            StackProperty::Accessor(accessor) => Some(accessor.read(self)),
        }
    }
}

impl HiddenSlots for SandboxError {
    fn hidden_get(&self, key: SlotKey) -> Option<&TraceNode> {
        self.hidden.get(&key)
    }

    fn hidden_take(&mut self, key: SlotKey) -> Option<TraceNode> {
        self.hidden.remove(&key)
    }

    fn hidden_set(&mut self, key: SlotKey, node: TraceNode) {
        self.hidden.insert(key, node);
    }
}

impl ErrorObject for SandboxError {
    fn constructor_name(&self) -> &str {
        &self.constructor_name
    }

    fn message_text(&self) -> String {
        self.message.clone().unwrap_or_default()
    }

    fn native_stack(&self) -> Option<TraceSnapshot> {
        self.native_stack.clone()
    }

    fn plain_stack_text(&self) -> Option<String> {
        match &self.stack {
            StackProperty::Value(text) => Some(text.clone()),
            StackProperty::Absent | StackProperty::Accessor(_) => None,
        }
    }

    fn install_stack_accessor(&mut self, accessor: StackAccessor) {
        self.stack = StackProperty::Accessor(accessor);
    }
}

/// An isolated execution context that owns its [`BoundaryRegistry`].
///
/// The registry lives and dies with the context, so the hidden slot key is
/// scoped exactly to the context's lifetime.
#[derive(Debug, Default)]
pub struct SandboxContext {
    registry: BoundaryRegistry,
}

impl SandboxContext {
    #[inline]
    pub fn new() -> Self {
        Self { registry: BoundaryRegistry::new() }
    }

    #[inline]
    pub fn registry(&self) -> &BoundaryRegistry {
        &self.registry
    }

    /// [`chain::attach`] with this context's registry.
    pub fn attach<E>(&self, error: &mut E, snapshot: TraceSnapshot)
    where
        E: ErrorObject + ?Sized,
    {
        chain::attach(error, &self.registry, snapshot);
    }

    /// [`chain::chain`] with this context's registry.
    pub fn chain<E>(&self, error: &mut E, snapshot: TraceSnapshot)
    where
        E: ErrorObject + ?Sized,
    {
        chain::chain(error, &self.registry, snapshot);
    }

    /// [`chain::chain_state`] with this context's registry.
    pub fn chain_state<E>(&self, error: &E) -> ChainState
    where
        E: ErrorObject + ?Sized,
    {
        chain::chain_state(error, &self.registry)
    }
}
