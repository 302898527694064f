//! On-demand rendering of trace chains.
//!
//! Rendering is a pure function of the [`TraceNode`] tree: deterministic,
//! idempotent, and uncached. Every call re-walks the full tree — traces are
//! read rarely relative to how often they are attached, and repeated reads
//! are expected to repeat the full-cost render. Do not add a cache here; the
//! recompute-on-read behavior is an observable part of the contract.
//!
//! # Examples
//!
//! ```
//! use trace_splice::render::render;
//! use trace_splice::snapshot;
//! use trace_splice::types::TraceNode;
//!
//! let chain = TraceNode::pair(
//!     TraceNode::snapshot(snapshot!["outer.js":10:1 => "run"]),
//!     TraceNode::snapshot(snapshot!["inner.js":3:7 => "f"]),
//! );
//!
//! assert_eq!(
//!     render(&chain),
//!     "\n    at run (outer.js:10:1)\n    at (<isolated boundary>)\n    at f (inner.js:3:7)"
//! );
//! ```

use crate::types::alloc_type::String;
use crate::types::{Frame, TraceNode, TraceSnapshot};
use core::fmt::Write;

/// Line inserted between two chained trace segments.
pub const BOUNDARY_MARKER: &str = "\n    at (<isolated boundary>)";

/// Renders a trace chain to text, newer segments first.
///
/// Text leaves that already start with four spaces pass through unchanged;
/// other text leaves are sliced from their first newline so the message line
/// duplicated by the caller is dropped (a text leaf with no newline renders
/// as the empty string). Snapshot leaves render one line per frame. Pair
/// nodes render newer, then [`BOUNDARY_MARKER`], then older.
pub fn render(node: &TraceNode) -> String {
    let mut out = String::new();
    render_into(&mut out, node);
    out
}

pub(crate) fn render_into(out: &mut String, node: &TraceNode) {
    match node {
        TraceNode::Text(text) => out.push_str(continuation_of(text)),
        TraceNode::Snapshot(snapshot) => format_snapshot_into(out, snapshot),
        TraceNode::Pair { newer, older } => {
            render_into(out, newer);
            out.push_str(BOUNDARY_MARKER);
            render_into(out, older);
        }
    }
}

/// Slices a textual trace down to its continuation lines.
fn continuation_of(text: &str) -> &str {
    // Already-rendered fragments start with indentation; never re-trim them.
    if text.starts_with("    ") {
        return text;
    }
    match text.find('\n') {
        Some(newline) => &text[newline..],
        // No stack, just a message.
        None => "",
    }
}

/// Formats one snapshot, one `\n    at ...` line per frame in capture order.
pub fn format_snapshot(snapshot: &TraceSnapshot) -> String {
    let mut out = String::with_capacity(snapshot.len() * 32);
    format_snapshot_into(&mut out, snapshot);
    out
}

fn format_snapshot_into(out: &mut String, snapshot: &TraceSnapshot) {
    for frame in snapshot.frames() {
        format_frame_into(out, frame);
    }
}

fn format_frame_into(out: &mut String, frame: &Frame) {
    out.push_str("\n    at ");
    if frame.is_eval() {
        if frame.script_id().is_none() {
            let _ = write!(out, "[eval]:{}:{}", frame.line(), frame.column());
        } else {
            // The missing ')' matches the upstream trace shape; consumers
            // parse this exact form.
            let _ = write!(
                out,
                "[eval] ({}:{}:{}",
                frame.script_name(),
                frame.line(),
                frame.column()
            );
        }
    } else if frame.function_name().is_empty() {
        let _ = write!(
            out,
            "{}:{}:{}",
            frame.script_name(),
            frame.line(),
            frame.column()
        );
    } else {
        let _ = write!(
            out,
            "{} ({}:{}:{})",
            frame.function_name(),
            frame.script_name(),
            frame.line(),
            frame.column()
        );
    }
}
