use super::*;

#[test]
fn humanize_capitalizes_and_spaces() {
    assert_eq!(humanize("past_due"), "Past due");
    assert_eq!(humanize("succeeded"), "Succeeded");
    assert_eq!(humanize("in_transit"), "In transit");
    assert_eq!(humanize(""), "");
}
