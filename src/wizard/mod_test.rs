use super::*;

const NAME_STEP: &[FieldSpec] = &[FieldSpec::required("name", "Name")];
const EMAIL_STEP: &[FieldSpec] = &[FieldSpec::required("email", "Email").validate(Validator::Email)];
const NOTE_STEP: &[FieldSpec] = &[FieldSpec::optional("note", "Note")];

const THREE_STEPS: &[StepSpec] = &[
    StepSpec { id: "name", title: "Name", fields: NAME_STEP },
    StepSpec { id: "email", title: "Email", fields: EMAIL_STEP },
    StepSpec { id: "note", title: "Note", fields: NOTE_STEP },
];

const FLOW: Flow = Flow::new("test", THREE_STEPS);

fn ready_wizard() -> Wizard {
    let mut wizard = Wizard::new(FLOW);
    wizard.set_text("name", "Jane");
    wizard.next().unwrap();
    wizard.set_text("email", "jane@paybord.io");
    wizard.next().unwrap();
    assert_eq!(wizard.next(), Ok(Advance::ReadyToSubmit));
    wizard
}

// =============================================================
// next()
// =============================================================

#[test]
fn new_wizard_starts_on_first_step_editing() {
    let wizard = Wizard::new(FLOW);
    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.step_count(), 3);
    assert_eq!(wizard.phase(), Phase::Editing);
    assert!(wizard.is_first_step());
    assert_eq!(wizard.current_step().id, "name");
    assert_eq!(wizard.progress_percent(), 0);
}

#[test]
fn next_is_noop_when_required_field_empty() {
    let mut wizard = Wizard::new(FLOW);
    assert_eq!(wizard.next(), Err(WizardError::Invalid { count: 1 }));
    assert_eq!(wizard.step_index(), 0);
    assert_eq!(wizard.error("name"), Some("Name is required"));

    wizard.set_text("name", "   ");
    assert!(wizard.next().is_err());
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn set_field_value_does_not_validate_eagerly() {
    let mut wizard = Wizard::new(FLOW);
    wizard.next().unwrap_err();
    wizard.set_text("name", "Jane");
    assert_eq!(wizard.error("name"), Some("Name is required"));
    wizard.next().unwrap();
    assert_eq!(wizard.error("name"), None);
}

#[test]
fn advancing_past_last_step_enters_ready_without_leaving_range() {
    let wizard = ready_wizard();
    assert_eq!(wizard.phase(), Phase::ReadyToSubmit);
    assert_eq!(wizard.step_index(), 2);
    assert!(wizard.step_index() < wizard.step_count());
    assert_eq!(wizard.progress_percent(), 100);
}

#[test]
fn next_when_ready_is_idempotent() {
    let mut wizard = ready_wizard();
    assert_eq!(wizard.next(), Ok(Advance::ReadyToSubmit));
    assert_eq!(wizard.step_index(), 2);
}

// =============================================================
// back()
// =============================================================

#[test]
fn back_at_first_step_is_noop() {
    let mut wizard = Wizard::new(FLOW);
    assert!(!wizard.back());
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn back_preserves_values_from_later_steps() {
    let mut wizard = ready_wizard();
    wizard.set_text("note", "VIP");

    assert!(wizard.back());
    assert_eq!(wizard.phase(), Phase::Editing);
    assert_eq!(wizard.step_index(), 2);
    assert!(wizard.back());
    assert!(wizard.back());
    assert_eq!(wizard.step_index(), 0);

    assert_eq!(wizard.text("name"), "Jane");
    assert_eq!(wizard.text("email"), "jane@paybord.io");
    assert_eq!(wizard.text("note"), "VIP");

    wizard.next().unwrap();
    wizard.next().unwrap();
    assert_eq!(wizard.text("note"), "VIP");
}

// =============================================================
// submit
// =============================================================

#[test]
fn begin_submit_requires_ready_phase() {
    let mut wizard = Wizard::new(FLOW);
    assert_eq!(wizard.begin_submit(), Err(SubmitError::NotReady));
}

#[test]
fn begin_submit_rejects_double_submission() {
    let mut wizard = ready_wizard();
    let values = wizard.begin_submit().unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(wizard.phase(), Phase::Submitting);
    assert_eq!(wizard.begin_submit(), Err(SubmitError::InFlight));
    assert!(!wizard.back());
}

#[test]
fn failed_submit_preserves_values_and_step() {
    let mut wizard = ready_wizard();
    wizard.begin_submit().unwrap();
    wizard.finish_submit(Err("Network error".to_owned()));

    assert_eq!(wizard.phase(), Phase::ReadyToSubmit);
    assert_eq!(wizard.step_index(), 2);
    assert_eq!(wizard.text("name"), "Jane");
    assert_eq!(wizard.last_error(), Some("Network error"));

    wizard.begin_submit().unwrap();
    assert_eq!(wizard.last_error(), None);
    wizard.finish_submit(Ok(()));
    assert_eq!(wizard.phase(), Phase::Submitted);
}

#[test]
fn begin_submit_revalidates_earlier_steps() {
    let mut wizard = ready_wizard();
    wizard.set_text("email", "not-an-email");
    assert_eq!(wizard.begin_submit(), Err(SubmitError::NotReady));
    assert_eq!(wizard.phase(), Phase::Editing);
    assert_eq!(wizard.step_index(), 1);
    assert!(wizard.error("email").is_some());
}

#[test]
fn finish_submit_outside_submitting_is_ignored() {
    let mut wizard = ready_wizard();
    wizard.finish_submit(Ok(()));
    assert_eq!(wizard.phase(), Phase::ReadyToSubmit);
}

#[test]
fn sync_submit_surfaces_action_error() {
    let mut wizard = ready_wizard();
    let result: Result<(), SubmitError> = wizard.submit(|_| Err::<(), _>("card declined"));
    assert_eq!(result, Err(SubmitError::Rejected("card declined".to_owned())));
    assert_eq!(wizard.phase(), Phase::ReadyToSubmit);
    assert_eq!(wizard.last_error(), Some("card declined"));
}

// =============================================================
// cancel / reset / reject
// =============================================================

#[test]
fn cancel_discards_values_and_is_terminal() {
    let mut wizard = ready_wizard();
    wizard.cancel();
    assert_eq!(wizard.phase(), Phase::Cancelled);
    assert!(wizard.values().is_empty());
    assert_eq!(wizard.next(), Err(WizardError::WrongPhase(Phase::Cancelled)));
    assert_eq!(wizard.begin_submit(), Err(SubmitError::Closed(Phase::Cancelled)));
}

#[test]
fn reset_returns_to_a_fresh_run() {
    let mut wizard = ready_wizard();
    wizard.begin_submit().unwrap();
    wizard.finish_submit(Ok(()));
    wizard.reset();
    assert_eq!(wizard.phase(), Phase::Editing);
    assert_eq!(wizard.step_index(), 0);
    assert!(wizard.values().is_empty());
}

#[test]
fn reject_field_moves_back_to_owning_step() {
    let mut wizard = ready_wizard();
    wizard.reject_field("email", "Email already registered");
    assert_eq!(wizard.phase(), Phase::Editing);
    assert_eq!(wizard.step_index(), 1);
    assert_eq!(wizard.error("email"), Some("Email already registered"));
}

#[test]
fn with_values_prefills_fields() {
    let mut values = FieldValues::new();
    values.insert("name".to_owned(), FieldValue::Text("Acme".to_owned()));
    let mut wizard = Wizard::with_values(FLOW, values);
    assert_eq!(wizard.text("name"), "Acme");
    assert_eq!(wizard.next(), Ok(Advance::Step(1)));
}

#[test]
fn remove_file_leaves_text_values_alone() {
    let mut wizard = Wizard::new(FLOW);
    wizard.set_text("name", "Jane");
    wizard.remove_file("name");
    assert_eq!(wizard.text("name"), "Jane");
}

#[test]
fn flow_field_lookup_spans_steps() {
    assert_eq!(FLOW.field("email").map(|f| f.label), Some("Email"));
    assert!(FLOW.field("missing").is_none());
}
