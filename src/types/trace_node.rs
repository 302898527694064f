//! The tagged-union chain of trace segments recorded across boundary
//! crossings.

use crate::types::alloc_type::{Box, String};
use crate::types::TraceSnapshot;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of the trace chain attached to an error object's hidden slot.
///
/// The chain is a right-leaning tree: each boundary crossing wraps the
/// existing node into a new [`Pair`](Self::Pair) whose `newer` side is the
/// snapshot captured at that crossing. Nodes are never mutated in place and
/// are owned exclusively by the hidden slot or `Pair` referencing them.
///
/// The three shapes cover everything a crossing can encounter:
///
/// - [`Text`](Self::Text) — a pre-existing textual trace, e.g. one flattened
///   into a plain `stack` value by a cross-boundary copy.
/// - [`Snapshot`](Self::Snapshot) — a native capture, rendered on demand.
/// - [`Pair`](Self::Pair) — the composition of two traces from two different
///   crossings, rendered newer-then-older with a boundary marker between.
///
/// # Examples
///
/// ```
/// use trace_splice::snapshot;
/// use trace_splice::types::TraceNode;
///
/// let older = TraceNode::snapshot(snapshot!["inner.js":3:7 => "f"]);
/// let newer = TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]);
/// let chain = TraceNode::pair(newer, older);
///
/// assert!(chain.is_pair());
/// assert_eq!(chain.segments(), 2);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceNode {
    /// A pre-existing textual trace handed in from outside this crate.
    Text(String),
    /// A native capture to be rendered on demand.
    Snapshot(TraceSnapshot),
    /// Two traces from two different boundary-crossing events.
    Pair {
        /// The most recently captured side.
        newer: Box<TraceNode>,
        /// Everything recorded before it.
        older: Box<TraceNode>,
    },
}

impl TraceNode {
    /// Creates a text leaf.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Creates a snapshot leaf.
    #[inline]
    pub fn snapshot(snapshot: TraceSnapshot) -> Self {
        Self::Snapshot(snapshot)
    }

    /// Composes two nodes; `newer` must be the most recently captured side.
    #[inline]
    pub fn pair(newer: TraceNode, older: TraceNode) -> Self {
        Self::Pair { newer: Box::new(newer), older: Box::new(older) }
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }

    /// Number of trace segments (leaves) in the chain.
    ///
    /// A rendered chain contains exactly `segments() - 1` boundary markers.
    pub fn segments(&self) -> usize {
        match self {
            Self::Text(_) | Self::Snapshot(_) => 1,
            Self::Pair { newer, older } => newer.segments() + older.segments(),
        }
    }
}

impl From<TraceSnapshot> for TraceNode {
    #[inline]
    fn from(snapshot: TraceSnapshot) -> Self {
        Self::Snapshot(snapshot)
    }
}
