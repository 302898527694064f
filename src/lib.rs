//! Lazy, chainable stack traces for errors that cross sandbox or isolate
//! boundaries.
//!
//! An error raised inside a nested, isolated execution context and re-thrown
//! across one or more boundaries keeps a faithful causal chain of traces:
//! the segment recorded at each crossing, separated by a boundary marker,
//! arbitrarily deep. Nothing is formatted until someone actually reads the
//! error's `stack` property — attaching is cheap, rendering happens on
//! demand and is recomputed on every read.
//!
//! The embedding glue decides *when* an error crosses a boundary; this crate
//! provides the capture/compose/render mechanism and the accessor contract.
//!
//! # Examples
//!
//! ## Chaining Across Two Boundaries
//!
//! ```
//! use trace_splice::host::{SandboxContext, SandboxError};
//! use trace_splice::snapshot;
//!
//! let context = SandboxContext::new();
//!
//! let mut error = SandboxError::new("Error", "boom");
//! context.chain(&mut error, snapshot!["worker.js":3:7 => "f"]);
//! context.chain(&mut error, snapshot!["main.js":10:1 => "run"]);
//!
//! assert_eq!(
//!     error.stack().unwrap(),
//!     "Error: boom\
//!      \n    at run (main.js:10:1)\
//!      \n    at (<isolated boundary>)\
//!      \n    at f (worker.js:3:7)"
//! );
//! ```
//!
//! ## Picking Up a Flattened Trace
//!
//! ```
//! use trace_splice::host::{SandboxContext, SandboxError};
//! use trace_splice::snapshot;
//!
//! // A cross-boundary copy flattened the original trace into plain text.
//! let mut error = SandboxError::new("TypeError", "x is not a function")
//!     .with_plain_stack("TypeError: x is not a function\n    at foo:1:1");
//!
//! let context = SandboxContext::new();
//! context.chain(&mut error, snapshot!["main.js":10:1 => "run"]);
//!
//! assert_eq!(
//!     error.stack().unwrap(),
//!     "TypeError: x is not a function\
//!      \n    at run (main.js:10:1)\
//!      \n    at (<isolated boundary>)\
//!      \n    at foo:1:1"
//! );
//! ```
//!
//! ## Rendering Without an Error Object
//!
//! ```
//! use trace_splice::render::render;
//! use trace_splice::snapshot;
//! use trace_splice::types::TraceNode;
//!
//! let node = TraceNode::snapshot(snapshot!["a.js":3:7 => "f"]);
//! assert_eq!(render(&node), "\n    at f (a.js:3:7)");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Lazy `stack` property accessor
pub mod accessor;
/// Attach/rechain state machine invoked at boundary crossings
pub mod chain;
/// Reference host object model for embedders, tests, and benches
pub mod host;
/// Snapshot construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Per-context hidden slot keys
pub mod registry;
/// On-demand rendering of trace chains
pub mod render;
/// Trait seams toward the host object model
pub mod traits;
/// Trace data model: frames, snapshots, chain nodes
pub mod types;

// Re-export the working surface at the root; embedders that want the full
// module paths can ignore these.
pub use accessor::StackAccessor;
pub use chain::{attach, chain, chain_state, ChainState};
pub use registry::{BoundaryRegistry, SlotKey};
pub use render::{format_snapshot, render, BOUNDARY_MARKER};
pub use traits::{ErrorObject, HiddenSlots};
pub use types::{Frame, FrameVec, TraceNode, TraceSnapshot};
