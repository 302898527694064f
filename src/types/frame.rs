//! Single call-stack entries as observed at a boundary crossing.

use crate::types::alloc_type::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One call-stack entry, immutable once captured.
///
/// A frame carries the script name, the function name (empty for anonymous
/// frames), a line/column position, and eval provenance. Frames are copied
/// out of the host runtime's transient stack representation by
/// [`TraceSnapshot::capture`](crate::types::TraceSnapshot::capture) and never
/// change afterwards.
///
/// # Examples
///
/// ```
/// use trace_splice::types::Frame;
///
/// let frame = Frame::named("f", "a.js", 3, 7);
/// assert_eq!(frame.function_name(), "f");
/// assert!(!frame.is_eval());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    script_name: String,
    function_name: String,
    line: u32,
    column: u32,
    is_eval: bool,
    script_id: Option<i32>,
}

impl Frame {
    /// Creates a frame for a named function.
    #[inline]
    pub fn named<F, S>(function_name: F, script_name: S, line: u32, column: u32) -> Self
    where
        F: Into<String>,
        S: Into<String>,
    {
        Self {
            script_name: script_name.into(),
            function_name: function_name.into(),
            line,
            column,
            is_eval: false,
            script_id: None,
        }
    }

    /// Creates a frame with no function name.
    ///
    /// A named frame whose function name is empty formats identically.
    #[inline]
    pub fn anonymous<S: Into<String>>(script_name: S, line: u32, column: u32) -> Self {
        Self::named("", script_name, line, column)
    }

    /// Creates an eval frame with no script id.
    #[inline]
    pub fn eval(line: u32, column: u32) -> Self {
        Self {
            script_name: String::new(),
            function_name: String::new(),
            line,
            column,
            is_eval: true,
            script_id: None,
        }
    }

    /// Creates an eval frame that carries the id of the script performing
    /// the eval, so the script name is part of the formatted line.
    #[inline]
    pub fn eval_in<S: Into<String>>(script_name: S, script_id: i32, line: u32, column: u32) -> Self {
        Self {
            script_name: script_name.into(),
            function_name: String::new(),
            line,
            column,
            is_eval: true,
            script_id: Some(script_id),
        }
    }

    /// Script name; may be empty.
    #[inline]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// Function name; empty for anonymous frames.
    #[inline]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether the frame originates from an eval.
    #[inline]
    pub fn is_eval(&self) -> bool {
        self.is_eval
    }

    /// Id of the owning script, if the runtime reported one.
    #[inline]
    pub fn script_id(&self) -> Option<i32> {
        self.script_id
    }
}
