//! Transient, non-blocking notices.
//!
//! DESIGN
//! ======
//! A bounded FIFO: pushing past capacity drops the oldest notice. Each
//! notice gets a monotonically increasing id so a delayed auto-dismiss can
//! target exactly the notice it was scheduled for, even if the user already
//! closed it by hand.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;

use crate::config::DEFAULT_MAX_TOASTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct ToastState {
    items: VecDeque<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_TOASTS)
    }
}

impl ToastState {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: VecDeque::new(), next_id: 1, capacity: capacity.max(1) }
    }

    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Toast { id, kind, message: message.into() });
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
