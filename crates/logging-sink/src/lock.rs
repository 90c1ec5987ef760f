//! crates/logging-sink/src/lock.rs
//!
//! Error-checking mutex used to serialize writes to the shared log file.
//!
//! [`std::sync::Mutex`] leaves re-entrant locking unspecified (it may deadlock
//! or panic). [`CheckedMutex`] tracks the owning thread so a second
//! acquisition from the same thread fails with [`LockError::Reentrant`]
//! instead. A poisoned lock is recovered: every critical section writes one
//! complete line, so a panic in another writer leaves no torn state behind.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::LockError;

/// Owner value meaning "no thread holds the lock".
const UNOWNED: usize = 0;

static NEXT_THREAD_TOKEN: AtomicUsize = AtomicUsize::new(UNOWNED + 1);

thread_local! {
    static THREAD_TOKEN: usize = NEXT_THREAD_TOKEN.fetch_add(1, Ordering::Relaxed);
}

fn current_thread_token() -> usize {
    THREAD_TOKEN.with(|token| *token)
}

/// Mutual-exclusion primitive that rejects re-entrant acquisition.
///
/// # Examples
///
/// ```
/// use logging_sink::{CheckedMutex, LockError};
///
/// let lock = CheckedMutex::new(Vec::<u8>::new());
/// let mut guard = lock.lock()?;
/// guard.extend_from_slice(b"line\n");
///
/// assert_eq!(lock.lock().err(), Some(LockError::Reentrant));
/// drop(guard);
/// assert_eq!(lock.lock()?.len(), 5);
/// # Ok::<(), LockError>(())
/// ```
#[derive(Debug, Default)]
pub struct CheckedMutex<T> {
    inner: Mutex<T>,
    owner: AtomicUsize,
}

impl<T> CheckedMutex<T> {
    /// Creates an unlocked mutex holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
            owner: AtomicUsize::new(UNOWNED),
        }
    }

    /// Acquires the lock, blocking until it is available.
    ///
    /// Returns [`LockError::Reentrant`] without blocking when the calling
    /// thread already holds the lock.
    pub fn lock(&self) -> Result<CheckedGuard<'_, T>, LockError> {
        let token = current_thread_token();
        if self.owner.load(Ordering::Acquire) == token {
            return Err(LockError::Reentrant);
        }

        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        self.owner.store(token, Ordering::Release);
        Ok(CheckedGuard {
            guard,
            owner: &self.owner,
        })
    }

    /// Reports whether the calling thread currently holds the lock.
    #[must_use]
    pub fn is_held_by_current_thread(&self) -> bool {
        self.owner.load(Ordering::Acquire) == current_thread_token()
    }

    /// Returns a mutable reference to the protected value.
    ///
    /// Exclusive access to the mutex proves no guard is alive.
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the mutex and returns the protected value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// RAII guard returned by [`CheckedMutex::lock`].
///
/// Dropping the guard clears the owner before the inner lock is released.
#[must_use = "dropping the guard immediately releases the lock"]
pub struct CheckedGuard<'a, T> {
    guard: MutexGuard<'a, T>,
    owner: &'a AtomicUsize,
}

impl<T> Drop for CheckedGuard<'_, T> {
    fn drop(&mut self) {
        self.owner.store(UNOWNED, Ordering::Release);
    }
}

impl<T> Deref for CheckedGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<T> DerefMut for CheckedGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}
