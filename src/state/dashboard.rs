//! Dashboard widget order with drag-and-drop reorder.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json_from, save_json_to};

pub const LAYOUT_KEY: &str = "paybord.dashboard.layout";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Balance,
    Analytics,
    RecentTransactions,
    Subscriptions,
    QuickActions,
}

impl Widget {
    pub const DEFAULT_ORDER: [Self; 5] =
        [Self::Balance, Self::Analytics, Self::RecentTransactions, Self::Subscriptions, Self::QuickActions];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::Analytics => "Payment analytics",
            Self::RecentTransactions => "Recent transactions",
            Self::Subscriptions => "Subscriptions",
            Self::QuickActions => "Quick actions",
        }
    }
}

/// Ordered list of widgets; every widget appears exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardLayout {
    order: Vec<Widget>,
    /// Index of the widget currently being dragged.
    #[serde(skip)]
    dragging: Option<usize>,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self { order: Widget::DEFAULT_ORDER.to_vec(), dragging: None }
    }
}

impl DashboardLayout {
    /// Restore a saved order. Unknown or duplicated entries are dropped and
    /// widgets missing from the saved order are appended, so a layout saved
    /// by an older build still shows every widget.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let saved: Vec<Widget> = load_json_from(store, LAYOUT_KEY).unwrap_or_default();
        let mut order: Vec<Widget> = Vec::with_capacity(Widget::DEFAULT_ORDER.len());
        for widget in saved.into_iter().chain(Widget::DEFAULT_ORDER) {
            if !order.contains(&widget) {
                order.push(widget);
            }
        }
        Self { order, dragging: None }
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        save_json_to(store, LAYOUT_KEY, &self.order);
    }

    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.order
    }

    /// Move the widget at `from` so it ends up at index `to`. Out-of-range
    /// indices are ignored; returns whether the order changed.
    pub fn move_widget(&mut self, from: usize, to: usize) -> bool {
        let len = self.order.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let widget = self.order.remove(from);
        self.order.insert(to, widget);
        true
    }

    pub fn start_drag(&mut self, index: usize) {
        self.dragging = (index < self.order.len()).then_some(index);
    }

    /// Finish a drag over `target`. Returns whether the order changed.
    pub fn drop_on(&mut self, target: usize) -> bool {
        match self.dragging.take() {
            Some(from) => self.move_widget(from, target),
            None => false,
        }
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
