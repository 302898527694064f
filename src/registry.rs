//! Per-context keys for the hidden trace slot.
//!
//! Every isolated execution context owns one [`BoundaryRegistry`], and the
//! registry mints one [`SlotKey`] the first time it is asked. The key is the
//! capability that addresses the hidden, non-enumerable slot on error objects
//! living in that context; holding it is the only way to reach the slot.
//!
//! Registries are meant to be fields of the embedder's context object, never
//! process-wide singletons — the key's validity is scoped to one context's
//! lifetime and is torn down with it.

use core::cell::OnceCell;
use core::sync::atomic::{AtomicU64, Ordering};

// Global mint so keys from contexts with overlapping lifetimes never collide.
static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque capability key addressing one context's hidden trace slot.
///
/// Keys are only minted by [`BoundaryRegistry`]; two registries never hand
/// out the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(u64);

impl SlotKey {
    fn mint() -> Self {
        Self(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lazily creates and memoizes the hidden slot key of one isolated context.
///
/// The registry is `!Sync` on purpose: all operations of this crate execute
/// on the thread owning the context, so key creation needs no locking.
///
/// # Examples
///
/// ```
/// use trace_splice::registry::BoundaryRegistry;
///
/// let registry = BoundaryRegistry::new();
/// let key = registry.key();
/// assert_eq!(registry.key(), key);
///
/// let other = BoundaryRegistry::new();
/// assert_ne!(other.key(), key);
/// ```
#[derive(Debug)]
pub struct BoundaryRegistry {
    key: OnceCell<SlotKey>,
}

impl BoundaryRegistry {
    #[inline]
    pub const fn new() -> Self {
        Self { key: OnceCell::new() }
    }

    /// Returns this context's slot key, minting it on first use.
    #[inline]
    pub fn key(&self) -> SlotKey {
        *self.key.get_or_init(SlotKey::mint)
    }
}

impl Default for BoundaryRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
