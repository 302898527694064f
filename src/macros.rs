//! Construction sugar for trace snapshots.
//!
//! [`snapshot!`](crate::snapshot) builds a
//! [`TraceSnapshot`](crate::types::TraceSnapshot) literal, which keeps
//! fixtures in tests and doc examples close to the trace lines they render
//! to.

/// Builds a [`TraceSnapshot`](crate::types::TraceSnapshot) literal.
///
/// Frames are written innermost first as `"script":line:col`, optionally
/// followed by `=> "function"` for named frames. Eval frames have no literal
/// form; construct those with
/// [`Frame::eval`](crate::types::Frame::eval) /
/// [`Frame::eval_in`](crate::types::Frame::eval_in) directly.
///
/// # Examples
///
/// ```
/// use trace_splice::render::format_snapshot;
/// use trace_splice::snapshot;
///
/// let snap = snapshot!["a.js":3:7 => "f", "b.js":10:2];
/// assert_eq!(
///     format_snapshot(&snap),
///     "\n    at f (a.js:3:7)\n    at b.js:10:2"
/// );
///
/// assert!(snapshot![].is_empty());
/// ```
#[macro_export]
macro_rules! snapshot {
    () => {
        $crate::types::TraceSnapshot::capture(::core::iter::empty())
    };
    ($($script:literal : $line:literal : $col:literal $(=> $function:literal)?),+ $(,)?) => {
        $crate::types::TraceSnapshot::capture([
            $($crate::snapshot!(@frame $script, $line, $col $(, $function)?)),+
        ])
    };
    (@frame $script:literal, $line:literal, $col:literal) => {
        $crate::types::Frame::anonymous($script, $line, $col)
    };
    (@frame $script:literal, $line:literal, $col:literal, $function:literal) => {
        $crate::types::Frame::named($function, $script, $line, $col)
    };
}
