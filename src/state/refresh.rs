//! "Something changed, re-fetch" signalling between components.
//!
//! SYSTEM CONTEXT
//! ==============
//! A wizard that creates a subscription, a payout request, or a storefront
//! edit must make the dashboard widgets and list pages re-fetch. Two
//! channels carry that signal:
//!
//! - `RefreshBus`: in-process publish/subscribe, provided as a context from
//!   `App`. Delivery is synchronous inside `notify`.
//! - `RefreshBeacon`: a stamped record in `localStorage` polled by the
//!   dashboard, so other open tabs of the app also refresh.
//!
//! DESIGN
//! ======
//! Delivery is at-least-once. A tab that both notifies the bus and publishes
//! the beacon will usually refresh twice; every subscriber only re-fetches,
//! so duplicates are harmless. The beacon is never deleted on read: each
//! poller remembers the last stamp it has seen, so two pollers cannot race
//! each other out of a notification.
//!
//! TRADE-OFFS
//! ==========
//! The bus snapshots its subscriber list before invoking callbacks. A
//! callback that unsubscribes another subscriber mid-notify does not stop
//! that subscriber from receiving the current notification.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, KeyValueStore, load_json_from, save_json_to};

pub const BEACON_KEY: &str = "paybord.refresh";

/// What changed. Subscribers may ignore reasons they do not display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshReason {
    Transactions,
    Subscriptions,
    Storefronts,
    Products,
    Balance,
    PaymentMethods,
    Profile,
    All,
}

impl RefreshReason {
    /// Whether a view showing `topic` should re-fetch for this reason.
    #[must_use]
    pub fn affects(self, topic: Self) -> bool {
        self == Self::All || topic == Self::All || self == topic
    }
}

// =============================================================================
// IN-PROCESS BUS
// =============================================================================

type Callback = Arc<dyn Fn(RefreshReason) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

#[derive(Clone, Default)]
pub struct RefreshBus {
    inner: Arc<Mutex<BusInner>>,
}

impl std::fmt::Debug for RefreshBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshBus").field("subscribers", &self.subscriber_count()).finish()
    }
}

impl RefreshBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`. It stays registered until the returned
    /// `Subscription` is dropped or unsubscribed.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(RefreshReason) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        Subscription { bus: Arc::downgrade(&self.inner), id: Some(id) }
    }

    /// Invoke every current subscriber once. Returns how many were called;
    /// zero subscribers is a no-op.
    pub fn notify(&self, reason: RefreshReason) -> usize {
        let snapshot: Vec<Callback> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        log::debug!("refresh {reason:?} -> {} subscriber(s)", snapshot.len());
        for callback in &snapshot {
            callback(reason);
        }
        snapshot.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).subscribers.len()
    }
}

/// Handle for one bus registration.
pub struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    id: Option<u64>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(bus) = self.bus.upgrade() {
            bus.lock().unwrap_or_else(PoisonError::into_inner).subscribers.retain(|(sid, _)| *sid != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

// =============================================================================
// CROSS-TAB BEACON
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconRecord {
    pub stamp: u64,
    pub reason: RefreshReason,
}

/// One poller's view of the shared beacon record.
#[derive(Clone, Debug)]
pub struct RefreshBeacon<S> {
    store: S,
    last_seen: u64,
}

impl<S: KeyValueStore> RefreshBeacon<S> {
    /// Start polling from the current record; anything published before
    /// this poller existed is not replayed.
    pub fn new(store: S) -> Self {
        let last_seen = Self::read(&store).map_or(0, |r| r.stamp);
        Self { store, last_seen }
    }

    /// Write a record whose stamp is strictly greater than any stamp
    /// previously stored, even if the wall clock moved backwards. The
    /// publishing poller does not echo its own record back.
    pub fn publish(&mut self, reason: RefreshReason, now_ms: u64) -> u64 {
        let previous = Self::read(&self.store).map_or(0, |r| r.stamp);
        let stamp = now_ms.max(previous.saturating_add(1));
        save_json_to(&self.store, BEACON_KEY, &BeaconRecord { stamp, reason });
        self.last_seen = stamp;
        stamp
    }

    /// Return the reason of a record this poller has not seen yet.
    pub fn poll(&mut self) -> Option<RefreshReason> {
        let record = Self::read(&self.store)?;
        if record.stamp <= self.last_seen {
            return None;
        }
        self.last_seen = record.stamp;
        Some(record.reason)
    }

    fn read(store: &S) -> Option<BeaconRecord> {
        load_json_from(store, BEACON_KEY)
    }
}

// =============================================================================
// CONTEXT HANDLE
// =============================================================================

/// The hub `App` provides, backed by `localStorage`.
pub type AppRefresh = RefreshHub<BrowserStorage>;

/// App-wide handle: the in-process bus plus this tab's beacon poller.
/// Provided as a context so every page announces through the same beacon
/// and never re-reads its own record.
pub struct RefreshHub<S> {
    bus: RefreshBus,
    beacon: Arc<Mutex<RefreshBeacon<S>>>,
}

impl<S> Clone for RefreshHub<S> {
    fn clone(&self) -> Self {
        Self { bus: self.bus.clone(), beacon: Arc::clone(&self.beacon) }
    }
}

impl<S: KeyValueStore> RefreshHub<S> {
    pub fn new(store: S) -> Self {
        Self { bus: RefreshBus::new(), beacon: Arc::new(Mutex::new(RefreshBeacon::new(store))) }
    }

    #[must_use]
    pub fn bus(&self) -> &RefreshBus {
        &self.bus
    }

    /// Tell the other tabs, then refresh this one. The beacon lock is
    /// released before subscribers run, so they may use the hub again.
    pub fn announce(&self, reason: RefreshReason, now_ms: u64) {
        self.beacon.lock().unwrap_or_else(PoisonError::into_inner).publish(reason, now_ms);
        self.bus.notify(reason);
    }

    /// Forward a beacon record published by another tab to the local bus.
    pub fn pump_beacon(&self) -> Option<RefreshReason> {
        let reason = self.beacon.lock().unwrap_or_else(PoisonError::into_inner).poll()?;
        log::debug!("refresh beacon from another tab: {reason:?}");
        self.bus.notify(reason);
        Some(reason)
    }
}

impl<S> std::fmt::Debug for RefreshHub<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshHub").field("bus", &self.bus).finish_non_exhaustive()
    }
}
