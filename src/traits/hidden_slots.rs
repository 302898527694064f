//! The hidden-slot primitive consumed from the host object model.

use crate::registry::SlotKey;
use crate::types::TraceNode;

/// Keyed, non-enumerable per-object storage.
///
/// The host object model provides one hidden slot per error object and key:
/// invisible to ordinary property enumeration, ignored by generic
/// serialization of the object, and not deletable by ordinary object
/// operations. A side table keyed by [`SlotKey`] satisfies the contract just
/// as well as a native private field.
///
/// At most one value lives under a key at a time; `hidden_set` replaces.
pub trait HiddenSlots {
    /// Reads the slot without disturbing it.
    fn hidden_get(&self, key: SlotKey) -> Option<&TraceNode>;

    /// Removes and returns the slot value, leaving the slot empty.
    fn hidden_take(&mut self, key: SlotKey) -> Option<TraceNode>;

    /// Stores `node` under `key`, replacing any previous value.
    fn hidden_set(&mut self, key: SlotKey, node: TraceNode);
}
