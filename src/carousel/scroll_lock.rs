// SPDX-License-Identifier: MPL-2.0
//! Background scroll suspension while a modal is open.
//!
//! The host page owns the actual scrolling. The carousel only acquires a
//! [`ScrollLockGuard`] when it opens and drops it when it closes; dropping is
//! the release, so no close path can leak a suspended page.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Host capability that can suspend and resume page scrolling.
pub trait ScrollLock {
    fn suspend(&self);
    fn resume(&self);
}

/// Holds the page scroll suspended until dropped.
#[derive(Debug)]
#[must_use = "scrolling resumes as soon as the guard is dropped"]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.suspend();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.resume();
    }
}

/// Depth-counting scroll lock shared between the modals and the page view.
///
/// Every clone observes the same counter. The page scrolls only while no
/// guard is held.
#[derive(Debug, Clone, Default)]
pub struct SharedScrollLock {
    depth: Arc<AtomicUsize>,
}

impl SharedScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.depth.load(Ordering::Acquire) > 0
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }
}

impl ScrollLock for SharedScrollLock {
    fn suspend(&self) {
        self.depth.fetch_add(1, Ordering::AcqRel);
    }

    fn resume(&self) {
        // Saturate so a stray resume cannot wrap the counter.
        let _ = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |depth| {
                Some(depth.saturating_sub(1))
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_suspends_until_dropped() {
        let lock = SharedScrollLock::new();
        assert!(!lock.is_locked());

        let guard = ScrollLockGuard::acquire(lock.clone());
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_keep_lock_until_last_release() {
        let lock = SharedScrollLock::new();
        let outer = ScrollLockGuard::acquire(lock.clone());
        let inner = ScrollLockGuard::acquire(lock.clone());
        assert_eq!(lock.depth(), 2);

        drop(inner);
        assert!(lock.is_locked());
        drop(outer);
        assert!(!lock.is_locked());
    }

    #[test]
    fn stray_resume_does_not_underflow() {
        let lock = SharedScrollLock::new();
        lock.resume();
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn guard_releases_during_unwind() {
        let lock = SharedScrollLock::new();
        let probe = lock.clone();

        let result = std::panic::catch_unwind(move || {
            let _guard = ScrollLockGuard::acquire(lock);
            panic!("modal render failed");
        });

        assert!(result.is_err());
        assert!(!probe.is_locked());
    }
}
