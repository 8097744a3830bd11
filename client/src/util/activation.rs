//! Mount-scoped liveness flag for async work started by a component.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page spawns its fetch on mount and flips the guard from `on_cleanup`.
//! The spawned task checks the guard before writing any state, so a response
//! that lands after the page is gone is dropped instead of mutating shared
//! stores for a view that no longer exists.

#[cfg(test)]
#[path = "activation_test.rs"]
mod activation_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct ActivationGuard {
    alive: Arc<AtomicBool>,
}

impl ActivationGuard {
    /// A guard for a freshly mounted component.
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning component as unmounted. Idempotent.
    pub fn deactivate(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for ActivationGuard {
    fn default() -> Self {
        Self::new()
    }
}
