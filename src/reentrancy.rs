//! Debug-only check against re-entering a map from its own callbacks.
//!
//! `BuildHasher` and `KeyEqual` implementations are user code and run while
//! a chain is being probed or the bucket array is being rebuilt. If such
//! code reaches back into the same map (through a raw pointer or interior
//! mutability), the map would observe itself half-updated. Debug builds
//! panic on the nested entry; release builds carry no state at all.

#[cfg(debug_assertions)]
use core::cell::Cell;
use core::marker::PhantomData;

/// Per-map busy flag. Public methods hold a [`ProbeGuard`] for the span in
/// which they call into user code.
#[derive(Debug)]
pub(crate) struct ReentryCheck {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // The map is single-owner and single-threaded; keep it !Send + !Sync.
    _single_thread: PhantomData<*mut ()>,
}

impl ReentryCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _single_thread: PhantomData,
        }
    }

    /// Marks the map busy until the returned guard drops.
    ///
    /// Panics in debug builds if the map is already busy.
    #[inline]
    pub(crate) fn enter(&self) -> ProbeGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "chain-hashmap re-entered from a hasher or key comparator"
            );
            return ProbeGuard { check: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ProbeGuard { _check: PhantomData };
        }
    }
}

impl Default for ReentryCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloned map gets its own, idle check.
impl Clone for ReentryCheck {
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct ProbeGuard<'a> {
    #[cfg(debug_assertions)]
    check: &'a ReentryCheck,
    #[cfg(not(debug_assertions))]
    _check: PhantomData<&'a ReentryCheck>,
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.check.busy.set(false);
    }
}
