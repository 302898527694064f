//! The error-object seam consumed from the host object model.

use crate::accessor::StackAccessor;
use crate::traits::HiddenSlots;
use crate::types::alloc_type::String;
use crate::types::TraceSnapshot;

/// An error value living in the host object model.
///
/// This is everything [`chain`](crate::chain::chain) and
/// [`StackAccessor::read`] need from the embedder: text conversion of the
/// error's fields, recovery of trace data recorded before this crate saw the
/// error, and installation of the lazy `stack` accessor. The crate never
/// owns these objects; their lifetime is the host's business.
///
/// [`host::SandboxError`](crate::host::SandboxError) is the reference
/// implementation.
pub trait ErrorObject: HiddenSlots {
    /// Constructor name of the error, e.g. `"TypeError"`.
    fn constructor_name(&self) -> &str;

    /// The `message` field as text.
    ///
    /// A missing or non-textual message converts to the empty string, the
    /// way a generic to-string conversion would.
    fn message_text(&self) -> String;

    /// The native trace the host runtime still associates with this error,
    /// if any, copied out synchronously.
    fn native_stack(&self) -> Option<TraceSnapshot>;

    /// A plain textual `stack` data property, if the error carries one.
    ///
    /// Returns `None` when the field is absent or not actually text — for
    /// example after the accessor replaced it.
    fn plain_stack_text(&self) -> Option<String>;

    /// Installs `accessor` as the error's `stack` property.
    ///
    /// Replaces any previously-existing value-typed `stack` field, must not
    /// be enumerable, and must be idempotent when the accessor is already
    /// installed.
    fn install_stack_accessor(&mut self, accessor: StackAccessor);
}
