//! Cancellation token tied to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components spawn `spawn_local` fetches that can outlive them. Each task
//! holds a clone of the owning component's [`Lifetime`] and checks
//! [`Lifetime::is_alive`] before writing results back into reactive state, so
//! a unit that unmounts mid-request simply drops the late response.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared alive flag; every clone observes the same cancellation.
#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Lifetime {
    /// A fresh, live token not bound to any owner.
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A live token cancelled when the current reactive owner is disposed.
    pub fn scoped() -> Self {
        let lifetime = Self::new();
        let on_dispose = lifetime.clone();
        leptos::prelude::on_cleanup(move || on_dispose.cancel());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}
