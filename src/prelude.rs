//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use trace_splice::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`snapshot!`](crate::snapshot)
//! - **Types**: [`Frame`], [`TraceSnapshot`], [`TraceNode`],
//!   [`BoundaryRegistry`], [`SlotKey`], [`StackAccessor`], [`ChainState`]
//! - **Operations**: [`attach`], [`chain`], [`chain_state`], [`render`],
//!   [`format_snapshot`]
//! - **Traits**: [`ErrorObject`], [`HiddenSlots`]
//!
//! # Examples
//!
//! ```
//! use trace_splice::prelude::*;
//! use trace_splice::host::SandboxError;
//!
//! let registry = BoundaryRegistry::new();
//! let mut error = SandboxError::new("Error", "boom");
//! chain(&mut error, &registry, snapshot!["a.js":3:7 => "f"]);
//!
//! assert_eq!(chain_state(&error, &registry), ChainState::Attached);
//! ```

// Macros
pub use crate::snapshot;

// Core types
pub use crate::accessor::StackAccessor;
pub use crate::registry::{BoundaryRegistry, SlotKey};
pub use crate::types::{Frame, TraceNode, TraceSnapshot};

// Operations
pub use crate::chain::{attach, chain, chain_state, ChainState};
pub use crate::render::{format_snapshot, render, BOUNDARY_MARKER};

// Traits
pub use crate::traits::{ErrorObject, HiddenSlots};
