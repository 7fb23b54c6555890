//! Loading / data / error triple for page-level fetches.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// Initial state for a page that fetches on mount.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Mark a (re-)fetch in progress. Existing data stays visible.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch outcome. A failed re-fetch keeps the previous data.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                log::warn!("fetch failed: {e}");
                self.error = Some(e.user_message());
            }
        }
    }

    #[must_use]
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }
}
