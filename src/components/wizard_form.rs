//! Generic rendering of a `Wizard`: step indicator, current-step fields,
//! navigation, and the async submit bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form in the app (sign-in through checkout) is a `Wizard` in an
//! `RwSignal`. These components only render the current step and forward
//! events; transitions and validation stay in `crate::wizard`.
//!
//! DESIGN
//! ======
//! The field list re-renders only when the step index changes (a `Memo`),
//! so typing into an input does not rebuild the inputs and steal focus.
//! Values and errors are read per field through fine-grained closures.

#[cfg(test)]
#[path = "wizard_form_test.rs"]
mod wizard_form_test;

use std::future::Future;

use leptos::prelude::*;

use crate::components::toast_stack::Toaster;
use crate::error::ApiError;
use crate::util::alive::{AliveFlag, spawn_guarded};
use crate::util::format::{file_size, format_card_input, format_expiry_input};
use crate::wizard::{Advance, FieldKind, FieldSpec, FieldValues, FileRef, Phase, Validator, Wizard};

/// Reformat raw input as the user types (card grouping, `MM/YY`).
fn normalize_input(spec: &FieldSpec, raw: &str) -> String {
    match spec.validator {
        Some(Validator::CardNumber) => format_card_input(raw),
        Some(Validator::Expiry) => format_expiry_input(raw),
        _ => raw.to_owned(),
    }
}

fn step_class(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "steps__item steps__item--done",
        std::cmp::Ordering::Equal => "steps__item steps__item--current",
        std::cmp::Ordering::Greater => "steps__item",
    }
}

/// Label of the primary button for the wizard's position.
fn primary_label(wizard: &Wizard, submit_label: &str) -> String {
    match wizard.phase() {
        Phase::Submitting => "Submitting...".to_owned(),
        _ if wizard.is_last_step() => submit_label.to_owned(),
        _ => "Continue".to_owned(),
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_ref(name: String, size: f64, mime_type: String) -> FileRef {
    let size_bytes = if size.is_finite() && size > 0.0 { size as u64 } else { 0 };
    FileRef { name, size_bytes, mime_type }
}

// =============================================================================
// COMPONENTS
// =============================================================================

/// Numbered step list; hidden for single-step flows.
#[component]
pub fn StepIndicator(wizard: RwSignal<Wizard>) -> impl IntoView {
    let steps = wizard.with_untracked(|w| w.flow().steps());
    let current = Memo::new(move |_| wizard.with(Wizard::step_index));

    (steps.len() > 1).then(|| {
        view! {
            <ol class="steps">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! { <li class=move || step_class(index, current.get())>{step.title}</li> }
                    })
                    .collect_view()}
            </ol>
        }
    })
}

/// Form wrapper: fields of the current step plus Back / Continue / Submit.
///
/// Pressing the primary button runs `next()`; once the wizard reports
/// `ReadyToSubmit`, `on_submit` fires. The host then calls
/// [`submit_wizard`].
#[component]
pub fn WizardForm(
    wizard: RwSignal<Wizard>,
    #[prop(into)] submit_label: String,
    on_submit: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let step_index = Memo::new(move |_| wizard.with(Wizard::step_index));
    let submitting = move || wizard.with(|w| w.phase() == Phase::Submitting);
    let can_go_back = move || wizard.with(|w| !w.is_first_step() && w.phase() == Phase::Editing);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let advanced = wizard.try_update(Wizard::next);
        if matches!(advanced, Some(Ok(Advance::ReadyToSubmit))) {
            on_submit.run(());
        }
    };

    view! {
        <form class="wizard" on:submit=on_form_submit novalidate=true>
            <StepIndicator wizard=wizard/>
            <h2 class="wizard__title">{move || wizard.with(|w| w.current_step().title)}</h2>
            <div class="wizard__fields">
                {move || {
                    let index = step_index.get();
                    let step = wizard.with_untracked(|w| w.flow().steps()[index]);
                    step.fields.iter().map(|spec| view! { <WizardField wizard=wizard spec=spec/> }).collect_view()
                }}
            </div>
            <Show when=move || wizard.with(|w| w.last_error().is_some())>
                <p class="wizard__error" role="alert">
                    {move || wizard.with(|w| w.last_error().unwrap_or_default().to_owned())}
                </p>
            </Show>
            <div class="wizard__actions">
                {on_cancel.map(|cancel| {
                    view! {
                        <button type="button" class="btn" disabled=submitting on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                    }
                })}
                <Show when=can_go_back>
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| {
                            wizard.update(|w| {
                                w.back();
                            });
                        }
                    >
                        "Back"
                    </button>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || wizard.with(|w| primary_label(w, &submit_label))}
                </button>
            </div>
        </form>
    }
}

#[component]
fn WizardField(wizard: RwSignal<Wizard>, spec: &'static FieldSpec) -> impl IntoView {
    let name = spec.name;
    let input_id = format!("field-{name}");
    let error = move || wizard.with(|w| w.error(name).map(str::to_owned));
    let value = move || wizard.with(|w| w.text(name).to_owned());
    let on_text = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        wizard.update(|w| w.set_text(name, normalize_input(spec, &raw)));
    };

    let control = match spec.kind {
        FieldKind::Choice(options) => view! {
            <select id=input_id.clone() class="field__input" prop:value=value on:change=on_text>
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|(option, label)| view! { <option value=*option>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=input_id.clone()
                class="field__input"
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_text
            ></textarea>
        }
        .into_any(),
        FieldKind::File => view! { <FileField wizard=wizard spec=spec input_id=input_id.clone()/> }.into_any(),
        kind => view! {
            <input
                id=input_id.clone()
                class="field__input"
                type=kind.input_type()
                placeholder=spec.placeholder
                inputmode={if kind == FieldKind::Numeric { "numeric" } else { "text" }}
                prop:value=value
                on:input=on_text
            />
        }
        .into_any(),
    };

    view! {
        <div class=move || if error().is_some() { "field field--invalid" } else { "field" }>
            <label class="field__label" for=input_id>
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {control}
            <Show when=move || error().is_some()>
                <p class="field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// File picker that records name/size/type; the file body never leaves the
/// browser from here.
#[component]
fn FileField(wizard: RwSignal<Wizard>, spec: &'static FieldSpec, input_id: String) -> impl IntoView {
    let name = spec.name;
    let selected = move || wizard.with(|w| w.file(name).cloned());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                let picked = file_ref(file.name(), file.size(), file.type_());
                wizard.update(|w| w.set_file(name, picked));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="file-upload">
            <input id=input_id class="file-upload__input" type="file" on:change=on_change/>
            {move || match selected() {
                Some(file) => view! {
                    <div class="file-upload__selected">
                        <span class="file-upload__name">{file.name}</span>
                        <span class="file-upload__size">{file_size(file.size_bytes)}</span>
                        <button
                            type="button"
                            class="btn btn--link"
                            on:click=move |_| wizard.update(|w| w.remove_file(name))
                        >
                            "Remove"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! { <span class="file-upload__empty">"No file selected"</span> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// SUBMIT BRIDGE
// =============================================================================

/// Take the value snapshot, run `call` on the browser event loop, and record
/// the outcome on the wizard. Success runs `on_ok`; failure keeps every
/// value and shows an error toast so the user can retry.
///
/// A wizard already submitting or closed ignores the request, so `on_ok`
/// runs at most once per wizard.
pub fn submit_wizard<T, Fut>(
    wizard: RwSignal<Wizard>,
    toaster: Toaster,
    alive: AliveFlag,
    call: impl FnOnce(FieldValues) -> Fut,
    on_ok: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    submit_wizard_with_field_errors(wizard, toaster, alive, call, on_ok, |_| None);
}

/// [`submit_wizard`], where `field_for` may pin a backend failure on one
/// field (e.g. a taken slug). The wizard then returns to that field's step.
pub fn submit_wizard_with_field_errors<T, Fut>(
    wizard: RwSignal<Wizard>,
    toaster: Toaster,
    alive: AliveFlag,
    call: impl FnOnce(FieldValues) -> Fut,
    on_ok: impl FnOnce(T) + 'static,
    field_for: impl FnOnce(&ApiError) -> Option<&'static str> + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let values = match wizard.try_update(Wizard::begin_submit) {
        Some(Ok(values)) => values,
        Some(Err(e)) => {
            log::debug!("submit refused: {e}");
            return;
        }
        None => return,
    };
    spawn_guarded(alive, call(values), move |result| match result {
        Ok(out) => {
            wizard.update(|w| w.finish_submit(Ok(())));
            on_ok(out);
        }
        Err(e) => {
            let message = e.user_message();
            wizard.update(|w| {
                w.finish_submit(Err(message.clone()));
                if let Some(field) = field_for(&e) {
                    w.reject_field(field, message);
                }
            });
            toaster.api_error(&e);
        }
    });
}
