use super::*;

#[test]
fn switch_starts_on_current_plan() {
    let wizard = switch_wizard("plan_pro");
    assert_eq!(wizard.text("plan"), "plan_pro");
}

#[test]
fn unchanged_plan_produces_no_update() {
    let wizard = switch_wizard("plan_pro");
    assert!(plan_update("plan_pro", wizard.values()).is_none());
}

#[test]
fn new_plan_produces_plan_only_update() {
    let mut wizard = switch_wizard("plan_pro");
    wizard.set_text("plan", "plan_enterprise");
    let update = plan_update("plan_pro", wizard.values()).unwrap();
    assert_eq!(update.plan.as_deref(), Some("plan_enterprise"));
    assert!(update.status.is_none());
}
