use super::*;

#[test]
fn errors_interrupt_screen_readers() {
    assert_eq!(live_region(ToastKind::Error), "assertive");
    assert_eq!(live_region(ToastKind::Success), "polite");
    assert_eq!(live_region(ToastKind::Info), "polite");
}

#[test]
fn toast_class_includes_kind_modifier() {
    let toast = Toast { id: 3, kind: ToastKind::Success, message: "Saved".to_owned() };
    assert_eq!(toast_class(&toast), "toast toast--success");
}
