use super::*;
use std::cell::Cell;

#[test]
fn new_flag_is_alive_until_killed() {
    let flag = AliveFlag::new();
    assert!(flag.is_alive());
    flag.kill();
    assert!(!flag.is_alive());
}

#[test]
fn clones_observe_the_same_state() {
    let flag = AliveFlag::new();
    let task_copy = flag.clone();
    flag.kill();
    assert!(!task_copy.is_alive());
}

#[test]
fn late_results_are_discarded_after_unmount() {
    let flag = AliveFlag::new();
    let applied = Cell::new(0);

    assert!(deliver_if_alive(&flag, 1, |v| applied.set(v)));
    assert_eq!(applied.get(), 1);

    flag.kill();
    assert!(!deliver_if_alive(&flag, 2, |v| applied.set(v)));
    assert_eq!(applied.get(), 1);
}
