//! Component-lifetime guard for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page that starts a fetch on mount may be torn down before the response
//! arrives. Writing into its signals afterwards is at best wasted work, so
//! every page-level fetch goes through `spawn_guarded`, which drops the
//! result once the owning component has been cleaned up. HTTP requests are
//! not cancelled; only their results are discarded.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl AliveFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag that flips to dead when the current reactive owner is cleaned
    /// up. Call from inside a component body.
    #[must_use]
    pub fn for_current_owner() -> Self {
        let flag = Self::new();
        let on_drop = flag.clone();
        leptos::prelude::on_cleanup(move || on_drop.kill());
        flag
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Hand `value` to `apply` only while `alive` still holds. Returns whether
/// the value was delivered.
pub fn deliver_if_alive<T>(alive: &AliveFlag, value: T, apply: impl FnOnce(T)) -> bool {
    if alive.is_alive() {
        apply(value);
        true
    } else {
        log::debug!("discarding async result for an unmounted view");
        false
    }
}

/// Run `work` on the browser event loop and apply its output if the owner
/// is still mounted. A no-op during server rendering.
pub fn spawn_guarded<T, F, A>(alive: AliveFlag, work: F, apply: A)
where
    T: 'static,
    F: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let value = work.await;
            deliver_if_alive(&alive, value, apply);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (alive, work, apply);
    }
}
