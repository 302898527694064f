//! Immutable point-in-time captures of a native call stack.

use crate::types::{Frame, FrameVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, innermost-frame-first capture of one native call stack.
///
/// A snapshot must be taken synchronously, at the moment the native stack is
/// observable — the host's stack representation is transient and cannot be
/// held across a boundary crossing. [`capture`](Self::capture) copies the
/// frame data into owned storage; the result never changes and is owned
/// exclusively by the [`TraceNode`](crate::types::TraceNode) leaf that wraps
/// it.
///
/// Snapshots hold data only. Turning one into text is deferred until a
/// `stack` read actually happens, via
/// [`format_snapshot`](crate::render::format_snapshot).
///
/// # Examples
///
/// ```
/// use trace_splice::types::{Frame, TraceSnapshot};
///
/// let snapshot = TraceSnapshot::capture([
///     Frame::named("f", "a.js", 3, 7),
///     Frame::anonymous("a.js", 9, 1),
/// ]);
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot.frames()[0].function_name(), "f");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceSnapshot {
    frames: FrameVec,
}

impl TraceSnapshot {
    /// Copies frame data out of a transient stack representation.
    #[inline]
    pub fn capture<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        Self { frames: frames.into_iter().collect() }
    }

    /// Frames in capture order, innermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
