//! The capability contract required of a wrapped lock.

#![allow(unsafe_code)]

/// Basic operations of an exclusive (mutual-exclusion) lock.
///
/// A type implementing this trait can be managed by
/// [`ExclusiveGuard`](crate::ExclusiveGuard). The contract is minimal:
/// a blocking [`acquire`](Self::acquire), a non-blocking
/// [`release`](Self::release), and a single-attempt
/// [`try_acquire`](Self::try_acquire). The lock provides whatever fairness
/// and ordering policy it likes; the guard is a pass-through.
///
/// # Safety
///
/// Implementations must provide real mutual exclusion: after `acquire`
/// returns (or `try_acquire` returns `true`), no other party may obtain the
/// claim until `release` is called. The guard relies on this for its
/// exactly-once release guarantee.
pub unsafe trait RawExclusive {
    /// Acquires the exclusive claim, blocking the calling thread until it
    /// is obtained. May block for an unbounded time under contention; there
    /// is no cancellation or timeout.
    fn acquire(&self);

    /// Releases the exclusive claim. Never blocks.
    ///
    /// # Safety
    ///
    /// The caller must currently hold the claim. Releasing a claim that is
    /// not held is undefined behavior for real lock implementations.
    unsafe fn release(&self);

    /// Attempts to acquire the claim without blocking. Returns `true` if
    /// the claim was obtained. A single attempt, no internal retry.
    fn try_acquire(&self) -> bool;
}

unsafe impl RawExclusive for parking_lot::RawMutex {
    #[inline]
    fn acquire(&self) {
        parking_lot::lock_api::RawMutex::lock(self);
    }

    #[inline]
    unsafe fn release(&self) {
        // Safety: forwarded precondition; the caller holds the claim.
        unsafe { parking_lot::lock_api::RawMutex::unlock(self) };
    }

    #[inline]
    fn try_acquire(&self) -> bool {
        parking_lot::lock_api::RawMutex::try_lock(self)
    }
}
