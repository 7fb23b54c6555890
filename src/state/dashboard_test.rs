use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn default_layout_lists_every_widget_once() {
    let layout = DashboardLayout::default();
    assert_eq!(layout.widgets(), Widget::DEFAULT_ORDER.as_slice());
}

#[test]
fn move_widget_forward_and_backward() {
    let mut layout = DashboardLayout::default();
    assert!(layout.move_widget(0, 2));
    assert_eq!(
        layout.widgets()[..3],
        [Widget::Analytics, Widget::RecentTransactions, Widget::Balance]
    );
    assert!(layout.move_widget(2, 0));
    assert_eq!(layout, DashboardLayout::default());
}

#[test]
fn move_widget_ignores_out_of_range_and_same_index() {
    let mut layout = DashboardLayout::default();
    assert!(!layout.move_widget(9, 0));
    assert!(!layout.move_widget(0, 9));
    assert!(!layout.move_widget(1, 1));
    assert_eq!(layout, DashboardLayout::default());
}

#[test]
fn drag_then_drop_reorders() {
    let mut layout = DashboardLayout::default();
    layout.start_drag(4);
    assert_eq!(layout.dragging(), Some(4));
    assert!(layout.drop_on(0));
    assert_eq!(layout.widgets()[0], Widget::QuickActions);
    assert_eq!(layout.dragging(), None);
    assert!(!layout.drop_on(1));
}

#[test]
fn cancelled_drag_changes_nothing() {
    let mut layout = DashboardLayout::default();
    layout.start_drag(1);
    layout.cancel_drag();
    assert!(!layout.drop_on(3));
    assert_eq!(layout, DashboardLayout::default());
}

#[test]
fn saved_order_round_trips() {
    let store = MemoryStore::new();
    let mut layout = DashboardLayout::default();
    layout.move_widget(3, 0);
    layout.save(&store);
    assert_eq!(DashboardLayout::load(&store).widgets(), layout.widgets());
}

#[test]
fn load_repairs_partial_or_duplicated_order() {
    let store = MemoryStore::new();
    store.set(LAYOUT_KEY, r#"["subscriptions","subscriptions","balance"]"#);
    let layout = DashboardLayout::load(&store);
    assert_eq!(layout.widgets().len(), Widget::DEFAULT_ORDER.len());
    assert_eq!(layout.widgets()[0], Widget::Subscriptions);
    assert_eq!(layout.widgets()[1], Widget::Balance);
}
