//! A movable, scoped guard for exclusive locks.
//!
//! [`ExclusiveGuard`] owns at most one exclusive claim on a lock
//! implementing [`RawExclusive`] and guarantees the claim is released
//! exactly once, on every exit path: explicit [`unlock`], unwind, and drop.
//!
//! The guard is move-only. Assigning over a guard that owns a claim drops
//! the old value first, which releases that claim before the new state is
//! adopted; a moved-from guard ceases to exist at compile time, so a claim
//! can never be represented by two live guards.
//!
//! # Example
//!
//! ```
//! use parking_lot::lock_api::RawMutex as _;
//! use unilock::ExclusiveGuard;
//!
//! static LOCK: parking_lot::RawMutex = parking_lot::RawMutex::INIT;
//!
//! let mut guard = ExclusiveGuard::acquire(&LOCK);
//! assert!(guard.owns());
//! guard.unlock().unwrap();
//! // Dropping a non-owning guard is a no-op.
//! ```
//!
//! [`unlock`]: ExclusiveGuard::unlock

#![allow(unsafe_code)]

use std::fmt;
use std::mem;

use crate::error::GuardError;
use crate::raw::RawExclusive;

/// A move-only guard over the exclusive claim of a [`RawExclusive`] lock.
///
/// A guard is in one of three states:
///
/// - **empty** — bound to no lock (default construction, or after
///   [`swap`](Self::swap) with an empty guard);
/// - **bound, not owning** — bound to a lock without holding its claim
///   ([`deferred`](Self::deferred), or after [`unlock`](Self::unlock));
/// - **bound, owning** — holding the claim ([`acquire`](Self::acquire),
///   [`adopt`](Self::adopt), or after a successful [`lock`](Self::lock) /
///   [`try_lock`](Self::try_lock)).
///
/// `owns == true` implies a bound lock; the guard maintains this invariant
/// internally. Dropping an owning guard releases the claim; dropping an
/// empty or non-owning guard does nothing.
///
/// A guard instance is intended for one logical owner at a time. It has no
/// `Clone` impl: a claim cannot be duplicated, only moved.
#[must_use = "an unused owning guard releases its claim immediately"]
pub struct ExclusiveGuard<'a, L: RawExclusive> {
    target: Option<&'a L>,
    owns: bool,
}

impl<'a, L: RawExclusive> ExclusiveGuard<'a, L> {
    /// Creates an empty guard, bound to no lock. No side effects.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            owns: false,
        }
    }

    /// Binds to `lock` and acquires its claim, blocking until it is
    /// obtained.
    ///
    /// May block for an unbounded time under contention; acquisition cannot
    /// be interrupted once invoked.
    pub fn acquire(lock: &'a L) -> Self {
        lock.acquire();
        tracing::trace!(lock = ?std::ptr::from_ref(lock), "claim acquired");
        Self {
            target: Some(lock),
            owns: true,
        }
    }

    /// Binds to `lock` without acquiring. The caller locks later via
    /// [`lock`](Self::lock) or [`try_lock`](Self::try_lock).
    #[must_use]
    pub fn deferred(lock: &'a L) -> Self {
        Self {
            target: Some(lock),
            owns: false,
        }
    }

    /// Binds to `lock` and records ownership of its claim without
    /// acquiring.
    ///
    /// # Safety
    ///
    /// The caller must already hold the claim on `lock` (for example via a
    /// manual [`RawExclusive::acquire`]). The guard cannot verify this; a
    /// guard adopting a claim that is not held will release a claim it
    /// never owned, which is undefined behavior at the lock level.
    pub unsafe fn adopt(lock: &'a L) -> Self {
        Self {
            target: Some(lock),
            owns: true,
        }
    }

    /// Acquires the claim on the bound lock, blocking until it is obtained.
    ///
    /// # Errors
    ///
    /// - [`GuardError::InvalidOperation`] if the guard is empty.
    /// - [`GuardError::AlreadyOwned`] if the guard already owns the claim.
    pub fn lock(&mut self) -> Result<(), GuardError> {
        let target = self.target.ok_or(GuardError::InvalidOperation)?;
        if self.owns {
            return Err(GuardError::AlreadyOwned);
        }
        target.acquire();
        self.owns = true;
        tracing::trace!(lock = ?std::ptr::from_ref(target), "claim acquired");
        Ok(())
    }

    /// Attempts to acquire the claim without blocking. A single attempt;
    /// returns whether the claim was obtained, which is also the new value
    /// of [`owns`](Self::owns).
    ///
    /// # Errors
    ///
    /// - [`GuardError::InvalidOperation`] if the guard is empty.
    /// - [`GuardError::AlreadyOwned`] if the guard already owns the claim.
    pub fn try_lock(&mut self) -> Result<bool, GuardError> {
        let target = self.target.ok_or(GuardError::InvalidOperation)?;
        if self.owns {
            return Err(GuardError::AlreadyOwned);
        }
        self.owns = target.try_acquire();
        if self.owns {
            tracing::trace!(lock = ?std::ptr::from_ref(target), "claim acquired");
        }
        Ok(self.owns)
    }

    /// Releases the claim, leaving the guard bound but not owning. Never
    /// blocks.
    ///
    /// # Errors
    ///
    /// - [`GuardError::NotOwned`] if the guard does not own the claim.
    pub fn unlock(&mut self) -> Result<(), GuardError> {
        if !self.owns {
            return Err(GuardError::NotOwned);
        }
        debug_assert!(self.target.is_some(), "owning guard must be bound");
        if let Some(target) = self.target {
            // Safety: owns is true only while this guard holds the claim.
            unsafe { target.release() };
            self.owns = false;
            tracing::trace!(lock = ?std::ptr::from_ref(target), "claim released");
        }
        Ok(())
    }

    /// Exchanges the bound lock and ownership state with `other`. No
    /// acquire or release happens; both claims keep their holders.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.target, &mut other.target);
        mem::swap(&mut self.owns, &mut other.owns);
    }

    /// Returns `true` if this guard currently owns the claim.
    #[must_use]
    pub fn owns(&self) -> bool {
        self.owns
    }

    /// Returns `true` if this guard is bound to a lock.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Returns the bound lock, if any.
    #[must_use]
    pub fn target(&self) -> Option<&'a L> {
        self.target
    }
}

impl<L: RawExclusive> Default for ExclusiveGuard<'_, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: RawExclusive> fmt::Debug for ExclusiveGuard<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusiveGuard")
            .field("bound", &self.target.is_some())
            .field("owns", &self.owns)
            .finish()
    }
}

impl<L: RawExclusive> Drop for ExclusiveGuard<'_, L> {
    fn drop(&mut self) {
        if self.owns {
            if let Some(target) = self.target {
                // Safety: owns is true only while this guard holds the claim.
                unsafe { target.release() };
                tracing::trace!(lock = ?std::ptr::from_ref(target), "claim released on drop");
            }
        }
    }
}
