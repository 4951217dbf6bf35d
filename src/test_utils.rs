#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for Heartboard unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::HOME_ENV_VAR;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `HEARTBOARD_HOME` environment variable.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Instant `ms` milliseconds after `base`
pub fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

/// RAII guard that points `HEARTBOARD_HOME` at a temp directory for a test
/// scope and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other
/// threads may read the environment concurrently. `HOME_LOCK` serializes every
/// test that touches the variable and the guard restores the previous value
/// on drop, including on panic.
pub struct HomeGuard {
    original: Option<String>,
    // Held for the guard's lifetime to keep HEARTBOARD_HOME exclusive
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under HOME_LOCK"
)]
impl HomeGuard {
    /// Create a new guard that sets `HEARTBOARD_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        let lock = HOME_LOCK.lock().unwrap();

        let original = std::env::var(HOME_ENV_VAR).ok();
        // SAFETY: HOME_LOCK is held, so no other test reads or writes the variable.
        unsafe {
            std::env::set_var(HOME_ENV_VAR, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: the guard still holds HOME_LOCK.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV_VAR);
            }
        }
    }
}
