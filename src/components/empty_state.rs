//! Explicit "nothing to show" panel for empty lists and missing resources.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] message: String,
    /// Optional call to action: `(label, href)`.
    #[prop(optional)]
    action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3 class="empty-state__title">{title}</h3>
            {(!message.is_empty()).then(|| view! { <p class="empty-state__message">{message}</p> })}
            {action.map(|(label, href)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
        </div>
    }
}
