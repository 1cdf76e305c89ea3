//! Four threads contend for one lock through scoped guards.
//!
//! Each worker sleeps 3s, acquires the shared lock through a guard, holds
//! it for 5s, logs its identity, unlocks explicitly, sleeps 5s, then
//! re-acquires through a fresh guard before finishing. Watch the log: the
//! hold windows never overlap.
//!
//! Run with: `cargo run --example contend`

use parking_lot::lock_api::RawMutex as _;
use std::thread;
use std::time::Duration;
use unilock::ExclusiveGuard;

static LOCK: parking_lot::RawMutex = parking_lot::RawMutex::INIT;

fn worker(id: usize) {
    thread::sleep(Duration::from_secs(3));

    let mut guard = ExclusiveGuard::acquire(&LOCK);
    thread::sleep(Duration::from_secs(5));
    tracing::info!(worker = id, "holding the lock");
    guard.unlock().expect("guard owns the claim");

    thread::sleep(Duration::from_secs(5));

    let _guard = ExclusiveGuard::acquire(&LOCK);
    tracing::info!(worker = id, "finished");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let handles: Vec<_> = (0..4)
        .map(|id| thread::spawn(move || worker(id)))
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
