//! Movable, scoped guards for exclusive locks.
//!
//! This crate provides one primitive: [`ExclusiveGuard`], a move-only
//! wrapper that owns at most one exclusive claim on a lock implementing
//! [`RawExclusive`] and releases it exactly once on every exit path —
//! explicit [`unlock`](ExclusiveGuard::unlock), unwind, transfer to another
//! guard, and drop.
//!
//! The guard adds no scheduling, fairness, or ordering of its own; it is a
//! pass-through over whatever policy the wrapped lock provides.
//! [`RawExclusive`] is implemented for [`parking_lot::RawMutex`] out of the
//! box and is open for caller-provided lock types.
//!
//! # Example
//!
//! ```
//! use parking_lot::lock_api::RawMutex as _;
//! use unilock::{ExclusiveGuard, GuardError};
//!
//! static LOCK: parking_lot::RawMutex = parking_lot::RawMutex::INIT;
//!
//! let mut guard = ExclusiveGuard::acquire(&LOCK);
//! assert!(guard.owns());
//!
//! // Re-entrant locking through the same guard is a contract violation.
//! assert_eq!(guard.lock(), Err(GuardError::AlreadyOwned));
//!
//! guard.unlock().unwrap();
//! assert!(!guard.owns());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod error;
mod guard;
mod raw;

pub use error::GuardError;
pub use guard::ExclusiveGuard;
pub use raw::RawExclusive;
