//! Usage-contract errors reported by the guard.

use thiserror::Error;

/// Error returned when a guard operation violates its usage contract.
///
/// Every variant is a programmer error detected synchronously at the call
/// site. None of them is retried internally and none indicates a failure of
/// the underlying lock; the lock is left exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    /// `lock` or `try_lock` was called on a guard with no bound lock.
    #[error("guard is not bound to a lock")]
    InvalidOperation,

    /// `lock` or `try_lock` was called while the guard already owns the
    /// claim. Re-entrant locking through the same guard is not permitted.
    #[error("guard already owns the lock")]
    AlreadyOwned,

    /// `unlock` was called while the guard does not own the claim.
    #[error("guard does not own the lock")]
    NotOwned,
}
