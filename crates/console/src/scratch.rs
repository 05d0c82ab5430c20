use core::{
    cell::UnsafeCell,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{Error, Result};

/// A fixed-size buffer shared between console calls.
///
/// Access goes through [`ScratchBuffer::try_lock`]; while a guard is alive
/// every other attempt fails with [`Error::Busy`].
pub struct ScratchBuffer<const N: usize> {
    locked: AtomicBool,
    buf: UnsafeCell<[u8; N]>,
}

// Safety: the buffer is only reachable through a `ScratchGuard`, and at most
// one guard exists at a time.
unsafe impl<const N: usize> Sync for ScratchBuffer<N> {}

impl<const N: usize> ScratchBuffer<N> {
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
            buf: UnsafeCell::new([0; N]),
        }
    }

    /// Acquires the buffer without blocking.
    pub fn try_lock(&self) -> Result<ScratchGuard<'_, N>> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| Error::Busy)?;

        Ok(ScratchGuard { owner: self })
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ScratchBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive access to a [`ScratchBuffer`], released on drop.
pub struct ScratchGuard<'a, const N: usize> {
    owner: &'a ScratchBuffer<N>,
}

impl<const N: usize> Deref for ScratchGuard<'_, N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        // Safety: the guard holds the lock.
        unsafe { &*self.owner.buf.get() }
    }
}

impl<const N: usize> DerefMut for ScratchGuard<'_, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // Safety: the guard holds the lock.
        unsafe { &mut *self.owner.buf.get() }
    }
}

impl<const N: usize> Drop for ScratchGuard<'_, N> {
    fn drop(&mut self) {
        self.owner.locked.store(false, Ordering::Release);
    }
}
