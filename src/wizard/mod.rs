//! Stepped wizard state machine shared by every multi-step form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Onboarding (KYC), subscription creation, storefront creation and the
//! single-step auth/payment forms all drive one `Wizard` value held in a
//! reactive signal. Components only render and forward events; every
//! transition rule lives here, independent of Leptos.
//!
//! DESIGN
//! ======
//! States are the step indices `0..step_count` plus a `Phase`:
//! `Editing -> ReadyToSubmit -> Submitting -> Submitted`, with `Cancelled`
//! reachable from any non-terminal phase. The index never leaves
//! `0..step_count`; "one past the last step" is represented by
//! `Phase::ReadyToSubmit` while the index stays on the last step.
//!
//! Submission is split into `begin_submit` / `finish_submit` so a page can
//! await a service call without holding the wizard across the await point.

pub mod field;
pub mod flows;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::collections::BTreeMap;

pub use field::{FieldKind, FieldSpec, FieldValue, FileRef, Validator};

/// Field name -> current value for every field touched so far.
pub type FieldValues = BTreeMap<String, FieldValue>;

/// Field name -> user-facing validation message.
pub type FieldErrors = BTreeMap<String, String>;

/// One ordered step of a flow.
#[derive(Clone, Copy, Debug)]
pub struct StepSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepSpec {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A non-empty, ordered list of steps.
#[derive(Clone, Copy, Debug)]
pub struct Flow {
    pub name: &'static str,
    steps: &'static [StepSpec],
}

impl Flow {
    /// Declare a flow. Evaluated in `const` context, so an empty step table
    /// fails the build rather than producing a wizard with no steps.
    #[must_use]
    pub const fn new(name: &'static str, steps: &'static [StepSpec]) -> Self {
        assert!(!steps.is_empty(), "a flow needs at least one step");
        Self { name, steps }
    }

    #[must_use]
    pub fn steps(&self) -> &'static [StepSpec] {
        self.steps
    }

    /// Look up a field spec by name across all steps.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.steps.iter().find_map(|step| step.field(name))
    }
}

/// Lifecycle phase of a wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    /// Every step validated; waiting for an explicit submit.
    ReadyToSubmit,
    /// A submission is in flight.
    Submitting,
    /// Terminal: the collaborator accepted the submission.
    Submitted,
    /// Terminal: the user abandoned the flow.
    Cancelled,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled)
    }
}

/// Result of a successful `next()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved onto the given step index.
    Step(usize),
    /// Past the last step; submit is now allowed.
    ReadyToSubmit,
}

/// Invalid wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{count} field(s) need attention")]
    Invalid { count: usize },
    #[error("wizard is {0:?}; transition not allowed")]
    WrongPhase(Phase),
}

/// Failures of the submit transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("complete every step before submitting")]
    NotReady,
    #[error("a submission is already in progress")]
    InFlight,
    #[error("this form was already {0:?}")]
    Closed(Phase),
    #[error("{0}")]
    Rejected(String),
}

/// Explicit state for one run through a flow.
#[derive(Clone, Debug)]
pub struct Wizard {
    flow: Flow,
    current: usize,
    phase: Phase,
    values: FieldValues,
    errors: FieldErrors,
    last_error: Option<String>,
}

impl Wizard {
    #[must_use]
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            current: 0,
            phase: Phase::Editing,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            last_error: None,
        }
    }

    /// Start a wizard with some fields already filled (e.g. edit forms).
    #[must_use]
    pub fn with_values(flow: Flow, values: FieldValues) -> Self {
        Self { values, ..Self::new(flow) }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.flow.steps.len()
    }

    #[must_use]
    pub fn current_step(&self) -> &'static StepSpec {
        &self.flow.steps[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.step_count()
    }

    /// Completed steps as a percentage, counting "ready to submit" as 100.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        let done = match self.phase {
            Phase::Editing | Phase::Cancelled => self.current,
            Phase::ReadyToSubmit | Phase::Submitting | Phase::Submitted => self.step_count(),
        };
        done * 100 / self.step_count()
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of a field, empty when unset or holding a file.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    #[must_use]
    pub fn file(&self, name: &str) -> Option<&FileRef> {
        self.values.get(name).and_then(FieldValue::as_file)
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Message from the most recent failed submission, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    /// Assign a value. No validation happens until `next()` or submit.
    pub fn set_field_value(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        self.set_field_value(name, FieldValue::Text(text.into()));
    }

    pub fn set_file(&mut self, name: &str, file: FileRef) {
        self.set_field_value(name, FieldValue::File(file));
    }

    /// Return a file field to "no file selected".
    pub fn remove_file(&mut self, name: &str) {
        if matches!(self.values.get(name), Some(FieldValue::File(_))) {
            self.values.remove(name);
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Validate the current step and move forward.
    ///
    /// # Errors
    ///
    /// `WizardError::Invalid` when any field of the current step fails; the
    /// index is unchanged and per-field errors are recorded.
    /// `WizardError::WrongPhase` outside the editing phase.
    pub fn next(&mut self) -> Result<Advance, WizardError> {
        match self.phase {
            Phase::Editing => {}
            Phase::ReadyToSubmit => return Ok(Advance::ReadyToSubmit),
            other => return Err(WizardError::WrongPhase(other)),
        }

        let step = self.current_step();
        let failures = validate_step(step, &self.values);
        for field in step.fields {
            self.errors.remove(field.name);
        }
        if !failures.is_empty() {
            let count = failures.len();
            log::debug!("wizard {}: step {} blocked by {count} field(s)", self.flow.name, step.id);
            self.errors.extend(failures);
            return Err(WizardError::Invalid { count });
        }

        if self.is_last_step() {
            self.phase = Phase::ReadyToSubmit;
            Ok(Advance::ReadyToSubmit)
        } else {
            self.current += 1;
            Ok(Advance::Step(self.current))
        }
    }

    /// Step backward. Returns `false` when nothing moved.
    pub fn back(&mut self) -> bool {
        match self.phase {
            Phase::ReadyToSubmit => {
                self.phase = Phase::Editing;
                true
            }
            Phase::Editing if self.current > 0 => {
                self.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Enter `Submitting` and hand out the values to send.
    ///
    /// Every step is re-validated so a wizard edited after reaching
    /// `ReadyToSubmit` cannot submit stale or invalid data.
    ///
    /// # Errors
    ///
    /// Rejects submissions before the last step validated, while another
    /// submission is in flight, and after a terminal phase.
    pub fn begin_submit(&mut self) -> Result<FieldValues, SubmitError> {
        match self.phase {
            Phase::ReadyToSubmit => {}
            Phase::Editing => return Err(SubmitError::NotReady),
            Phase::Submitting => return Err(SubmitError::InFlight),
            terminal @ (Phase::Submitted | Phase::Cancelled) => return Err(SubmitError::Closed(terminal)),
        }
        if let Some((index, failures)) = self.first_invalid_step() {
            self.current = index;
            self.phase = Phase::Editing;
            self.errors.extend(failures);
            return Err(SubmitError::NotReady);
        }
        self.phase = Phase::Submitting;
        self.last_error = None;
        Ok(self.values.clone())
    }

    /// Record the collaborator's answer for the in-flight submission.
    ///
    /// Success is terminal. Failure keeps values and step index so the user
    /// can retry manually.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if self.phase != Phase::Submitting {
            log::warn!("wizard {}: submit result ignored in phase {:?}", self.flow.name, self.phase);
            return;
        }
        match result {
            Ok(()) => {
                self.phase = Phase::Submitted;
                self.errors.clear();
            }
            Err(message) => {
                log::warn!("wizard {}: submission failed: {message}", self.flow.name);
                self.phase = Phase::ReadyToSubmit;
                self.last_error = Some(message);
            }
        }
    }

    /// Synchronous submit: run `action` on the values exactly once.
    ///
    /// # Errors
    ///
    /// The same phase errors as `begin_submit`, or `Rejected` carrying the
    /// action's error text.
    pub fn submit<T, E: std::fmt::Display>(
        &mut self,
        action: impl FnOnce(&FieldValues) -> Result<T, E>,
    ) -> Result<T, SubmitError> {
        let values = self.begin_submit()?;
        match action(&values) {
            Ok(out) => {
                self.finish_submit(Ok(()));
                Ok(out)
            }
            Err(e) => {
                let message = e.to_string();
                self.finish_submit(Err(message.clone()));
                Err(SubmitError::Rejected(message))
            }
        }
    }

    /// Attach an error reported outside the field rules (password mismatch,
    /// backend conflicts) and return to the step that owns the field.
    pub fn reject_field(&mut self, name: &str, message: impl Into<String>) {
        if self.phase.is_terminal() {
            return;
        }
        if let Some(index) = self.flow.steps.iter().position(|step| step.field(name).is_some()) {
            self.current = index;
        }
        if matches!(self.phase, Phase::ReadyToSubmit | Phase::Submitting) {
            self.phase = Phase::Editing;
        }
        self.errors.insert(name.to_owned(), message.into());
    }

    /// Abandon the flow. Entered values are discarded.
    pub fn cancel(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = Phase::Cancelled;
        self.values.clear();
        self.errors.clear();
    }

    /// Start over on the same flow.
    pub fn reset(&mut self) {
        *self = Self::new(self.flow);
    }

    fn first_invalid_step(&self) -> Option<(usize, FieldErrors)> {
        self.flow
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| (index, validate_step(step, &self.values)))
            .find(|(_, failures)| !failures.is_empty())
    }
}

/// Validate every field of one step against the current values.
#[must_use]
pub fn validate_step(step: &StepSpec, values: &FieldValues) -> FieldErrors {
    step.fields
        .iter()
        .filter_map(|spec| {
            field::check_field(spec, values.get(spec.name))
                .err()
                .map(|message| (spec.name.to_owned(), message))
        })
        .collect()
}
