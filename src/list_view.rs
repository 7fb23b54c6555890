//! Search / filter / paginate derivation for in-memory collections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transaction history and invoice lists keep the full source collection in
//! state and call `derive` on every render. The demo backend runs the same
//! derivation server-side and ships the result as a `Paged<T>` envelope, so a
//! page component does not care where filtering ran.
//!
//! DESIGN
//! ======
//! `derive` always starts from the full `source`. There is no cached
//! intermediate result, so clearing search and filter reproduces the source
//! exactly (same elements, same order).

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{Invoice, Product, Storefront, Subscription, Transaction};

/// Filter value meaning "every category".
pub const ALL: &str = "all";

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Records that can be searched, categorized, and sorted by a list view.
pub trait Listable {
    /// Whether the record matches an already-lowercased, trimmed needle.
    fn matches_search(&self, needle: &str) -> bool;

    /// Category compared against the active filter.
    fn category(&self) -> &str;

    /// Key used when a sort direction is requested.
    fn sort_key(&self) -> &str {
        ""
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Keep source order.
    #[default]
    None,
    Asc,
    Desc,
}

/// User-controlled list state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub filter: String,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    #[serde(default)]
    pub sort: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: ALL.to_owned(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortDirection::None,
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), ..Self::default() }
    }

    /// Update the search text; results restart at page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// Update the category filter; results restart at page 1.
    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.filter = category.into();
        self.page = 1;
    }

    /// Request a page. The upper bound is enforced by `derive`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_sort(&mut self, sort: SortDirection) {
        self.sort = sort;
    }

    /// Restore search and filter defaults.
    pub fn clear(&mut self) {
        self.search.clear();
        self.filter = ALL.to_owned();
        self.page = 1;
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || !self.filter_is_all()
    }

    fn filter_is_all(&self) -> bool {
        self.filter.is_empty() || self.filter.eq_ignore_ascii_case(ALL)
    }

    fn matches<T: Listable>(&self, item: &T, needle: &str) -> bool {
        let search_ok = needle.is_empty() || item.matches_search(needle);
        let filter_ok = self.filter_is_all() || item.category().eq_ignore_ascii_case(&self.filter);
        search_ok && filter_ok
    }
}

/// Result of one derivation.
#[derive(Debug)]
pub struct ListView<'a, T> {
    /// Every record matching search and filter, in display order.
    pub filtered: Vec<&'a T>,
    /// Page number actually shown (clamped into `1..=pages`).
    pub page: usize,
    pub pages: usize,
    page_size: usize,
}

impl<'a, T> ListView<'a, T> {
    /// Records on the current page.
    #[must_use]
    pub fn visible(&self) -> &[&'a T] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        self.filtered.get(start..end).unwrap_or(&[])
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// 1-based index range of visible rows, e.g. `(11, 20)` for "11-20 of 42".
    #[must_use]
    pub fn range(&self) -> (usize, usize) {
        if self.filtered.is_empty() {
            return (0, 0);
        }
        let start = (self.page - 1) * self.page_size + 1;
        (start, start + self.visible().len() - 1)
    }
}

impl<T: Clone> ListView<'_, T> {
    /// Clone the visible page into a response envelope.
    #[must_use]
    pub fn to_paged(&self) -> Paged<T> {
        Paged {
            data: self.visible().iter().map(|item| (*item).clone()).collect(),
            total: self.total(),
            pages: self.pages,
        }
    }
}

/// Derive the filtered, sorted, paginated view of `source`.
#[must_use]
pub fn derive<'a, T: Listable>(source: &'a [T], query: &ListQuery) -> ListView<'a, T> {
    let needle = query.search.trim().to_lowercase();
    let mut filtered: Vec<&T> = source.iter().filter(|item| query.matches(*item, &needle)).collect();
    match query.sort {
        SortDirection::None => {}
        SortDirection::Asc => filtered.sort_by(|a, b| a.sort_key().cmp(b.sort_key())),
        SortDirection::Desc => filtered.sort_by(|a, b| b.sort_key().cmp(a.sort_key())),
    }
    let page_size = query.page_size.max(1);
    let pages = filtered.len().div_ceil(page_size).max(1);
    let page = query.page.clamp(1, pages);
    ListView { filtered, page, pages, page_size }
}

/// Paginated response envelope: `{ data, total, pages }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub pages: usize,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self { data: Vec::new(), total: 0, pages: 1 }
    }
}

// =============================================================================
// DTO IMPLEMENTATIONS
// =============================================================================

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Listable for Transaction {
    fn matches_search(&self, needle: &str) -> bool {
        contains(&self.description, needle)
            || contains(&self.id, needle)
            || self.customer.as_deref().is_some_and(|c| contains(c, needle))
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn sort_key(&self) -> &str {
        &self.created_at
    }
}

impl Listable for Invoice {
    fn matches_search(&self, needle: &str) -> bool {
        contains(&self.number, needle) || contains(&self.customer, needle)
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn sort_key(&self) -> &str {
        &self.issued_at
    }
}

impl Listable for Subscription {
    fn matches_search(&self, needle: &str) -> bool {
        contains(&self.customer, needle) || contains(&self.plan, needle) || contains(&self.id, needle)
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn sort_key(&self) -> &str {
        &self.current_period_end
    }
}

impl Listable for Storefront {
    fn matches_search(&self, needle: &str) -> bool {
        contains(&self.name, needle) || contains(&self.slug, needle)
    }

    fn category(&self) -> &str {
        if self.is_active { "active" } else { "inactive" }
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

impl Listable for Product {
    fn matches_search(&self, needle: &str) -> bool {
        contains(&self.name, needle) || self.description.as_deref().is_some_and(|d| contains(d, needle))
    }

    fn category(&self) -> &str {
        if self.active { "active" } else { "inactive" }
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}
