//! Page-level fetch wiring: load into a `FetchState` signal and re-load when
//! the refresh bus says the data changed.

use std::future::Future;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::state::fetch::FetchState;
use crate::state::refresh::{AppRefresh, RefreshReason};
use crate::util::alive::{AliveFlag, spawn_guarded};

/// Mark `target` loading and fill it with the outcome of `work`.
pub fn fetch_into<T, F>(target: RwSignal<FetchState<T>>, alive: AliveFlag, work: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.update(FetchState::start);
    spawn_guarded(alive, work, move |result| {
        target.try_update(|s| s.finish(result));
    });
}

/// Bump `version` whenever a refresh touching `topic` is announced. The
/// subscription is dropped with the current reactive owner.
pub fn refetch_on(topic: RefreshReason, version: RwSignal<u64>) {
    let Some(hub) = use_context::<AppRefresh>() else {
        log::debug!("no refresh hub in context; {topic:?} changes will not re-fetch");
        return;
    };
    let subscription = hub.bus().subscribe(move |reason| {
        if reason.affects(topic) {
            version.try_update(|v| *v += 1);
        }
    });
    on_cleanup(move || subscription.unsubscribe());
}
