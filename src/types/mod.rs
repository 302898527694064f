//! Trace data model: frames, snapshots, and the chain node.
//!
//! Everything here is plain immutable data. Capturing is eager (the host's
//! stack representation is transient); formatting is deferred until a `stack`
//! read actually happens, in [`crate::render`].
//!
//! # Examples
//!
//! ```
//! use trace_splice::render;
//! use trace_splice::types::{Frame, TraceNode, TraceSnapshot};
//!
//! let snapshot = TraceSnapshot::capture([Frame::named("f", "a.js", 3, 7)]);
//! let node = TraceNode::snapshot(snapshot);
//!
//! assert_eq!(render::render(&node), "\n    at f (a.js:3:7)");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod frame;
pub mod snapshot;
pub mod trace_node;

pub use frame::*;
pub use snapshot::*;
pub use trace_node::*;

/// SmallVec-backed frame storage for snapshots.
///
/// Uses inline storage for up to 4 frames so shallow stacks avoid a heap
/// allocation at capture time.
pub type FrameVec = SmallVec<[Frame; 4]>;
