//! The lazy `stack` property installed on chained error objects.

use crate::registry::SlotKey;
use crate::render;
use crate::traits::ErrorObject;
use crate::types::alloc_type::String;

/// Property accessor that renders an error's chained trace on every read.
///
/// Installed by [`attach`](crate::chain::attach) and
/// [`chain`](crate::chain::chain) via
/// [`ErrorObject::install_stack_accessor`], replacing any value-typed `stack`
/// field, non-enumerable. The accessor holds nothing but the [`SlotKey`] of
/// its context; all trace data stays in the error's hidden slot, so a read
/// always reflects the chain as it stands at that moment.
///
/// There is no write half. Shadowing `stack` with an ordinary data property
/// afterwards is the host object model's business and is not guarded
/// against.
///
/// # Examples
///
/// ```
/// use trace_splice::host::{SandboxContext, SandboxError};
/// use trace_splice::snapshot;
///
/// let context = SandboxContext::new();
/// let mut error = SandboxError::new("Error", "boom");
/// context.attach(&mut error, snapshot!["a.js":3:7 => "f"]);
///
/// assert_eq!(error.stack().unwrap(), "Error: boom\n    at f (a.js:3:7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackAccessor {
    key: SlotKey,
}

impl StackAccessor {
    #[inline]
    pub fn new(key: SlotKey) -> Self {
        Self { key }
    }

    /// The slot key this accessor reads through.
    #[inline]
    pub fn key(&self) -> SlotKey {
        self.key
    }

    /// Reads the property: constructor name, message, then the rendered
    /// chain.
    ///
    /// A missing or non-textual message converts to the empty string. The
    /// render is recomputed in full on every call; nothing is cached.
    pub fn read<E>(&self, error: &E) -> String
    where
        E: ErrorObject + ?Sized,
    {
        let mut out = String::from(error.constructor_name());
        out.push_str(": ");
        out.push_str(&error.message_text());
        let slot = error.hidden_get(self.key);
        debug_assert!(slot.is_some(), "stack accessor installed without a hidden trace slot");
        if let Some(node) = slot {
            render::render_into(&mut out, node);
        }
        out
    }
}
