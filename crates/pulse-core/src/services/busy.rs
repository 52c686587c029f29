//! Single-slot busy latch.

use std::sync::atomic::{AtomicBool, Ordering};

/// A boolean latch that admits at most one holder at a time.
///
/// Acquisition never waits: a caller that finds the latch held is expected
/// to drop its request.
#[derive(Debug, Default)]
pub struct BusyLatch {
    busy: AtomicBool,
}

impl BusyLatch {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Take the latch, or `None` if someone already holds it.
    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| BusyGuard { latch: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the latch on drop, including when the owning future is dropped.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    latch: &'a BusyLatch,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.latch.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let latch = BusyLatch::new();
        let guard = latch.try_acquire();
        assert!(guard.is_some());
        assert!(latch.is_busy());
        assert!(latch.try_acquire().is_none());

        drop(guard);
        assert!(!latch.is_busy());
        assert!(latch.try_acquire().is_some());
    }
}
