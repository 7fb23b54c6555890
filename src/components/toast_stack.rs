//! Toast notices: the `Toaster` context handle and the stack that renders it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form and page reports service outcomes through `Toaster`, provided
//! from `App`. Notices auto-dismiss after the configured TTL in the browser;
//! during server rendering they simply stay queued.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::state::toast::{Toast, ToastKind, ToastState};

/// Copyable handle for pushing notices from anywhere in the view tree.
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
    ttl_ms: u64,
}

impl Toaster {
    #[must_use]
    pub fn new(state: RwSignal<ToastState>, ttl_ms: u64) -> Self {
        Self { state, ttl_ms }
    }

    #[must_use]
    pub fn state(self) -> RwSignal<ToastState> {
        self.state
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Error notice carrying the user-facing text of an API failure.
    pub fn api_error(self, err: &ApiError) {
        log::warn!("api error surfaced to user: {err}");
        self.error(err.user_message());
    }

    pub fn dismiss(self, id: u64) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }

    fn show(self, kind: ToastKind, message: String) {
        let id = self.state.try_update(|s| s.push(kind, message));
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id
                && self.ttl_ms > 0
            {
                let state = self.state;
                let ttl = self.ttl_ms;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(ttl)).await;
                    state.try_update(|s| s.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

/// `aria-live` politeness for a notice: errors interrupt, the rest wait.
fn live_region(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "assertive",
        ToastKind::Success | ToastKind::Info => "polite",
    }
}

fn toast_class(toast: &Toast) -> String {
    format!("toast {}", toast.kind.css_modifier())
}

/// Fixed-position stack of current notices.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let state = toaster.state();

    view! {
        <div class="toast-stack">
            {move || {
                state
                    .get()
                    .items()
                    .cloned()
                    .map(|toast| {
                        let id = toast.id;
                        let class = toast_class(&toast);
                        let message = toast.message;
                        view! {
                            <div class=class role="status" aria-live=live_region(toast.kind)>
                                <span class="toast__message">{message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
