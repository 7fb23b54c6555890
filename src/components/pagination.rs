//! Previous / next pager with a "11-20 of 42" summary.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::list_view::{DEFAULT_PAGE_SIZE, ListQuery, Listable, derive};

/// One rendered page of a client-side list, owned so it can live in a `Memo`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub range: (usize, usize),
}

impl<T: Listable + Clone> PageModel<T> {
    #[must_use]
    pub fn derive(source: &[T], query: &ListQuery) -> Self {
        let view = derive(source, query);
        Self {
            rows: view.visible().iter().map(|item| (*item).clone()).collect(),
            page: view.page,
            pages: view.pages,
            total: view.total(),
            range: view.range(),
        }
    }
}

#[must_use]
pub fn configured_page_size() -> usize {
    use_context::<ClientConfig>().map_or(DEFAULT_PAGE_SIZE, |c| c.page_size)
}

/// Fresh list state using the configured page size.
#[must_use]
pub fn configured_query() -> ListQuery {
    ListQuery::with_page_size(configured_page_size())
}

/// Visible range for a page the server already cut: `shown` rows of page
/// `page` at `limit` per page.
#[must_use]
pub fn server_range(page: usize, limit: usize, shown: usize) -> (usize, usize) {
    if shown == 0 {
        return (0, 0);
    }
    let start = page.saturating_sub(1) * limit + 1;
    (start, start + shown - 1)
}

/// Summary line for a 1-based visible range.
fn summary(range: (usize, usize), total: usize) -> String {
    if total == 0 { "No results".to_owned() } else { format!("{}-{} of {total}", range.0, range.1) }
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] pages: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] range: Signal<(usize, usize)>,
    on_page: Callback<usize>,
) -> impl IntoView {
    let has_prev = move || page.get() > 1;
    let has_next = move || page.get() < pages.get();

    view! {
        <nav class="pagination" aria-label="Pagination">
            <span class="pagination__summary">{move || summary(range.get(), total.get())}</span>
            <button
                class="btn pagination__prev"
                disabled=move || !has_prev()
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pagination__page">{move || format!("Page {} of {}", page.get(), pages.get())}</span>
            <button
                class="btn pagination__next"
                disabled=move || !has_next()
                on:click=move |_| on_page.run(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </nav>
    }
}
