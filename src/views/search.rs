use serde::Serialize;

use crate::store::ProfileStore;

pub const SEARCH_PLACEHOLDER: &str = "Search profiles...";

/// What the search input renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub query: String,
    pub placeholder: &'static str,
}

/// Free-text search input. Each input event re-runs the search; there is
/// no debouncing here.
#[derive(Debug, Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            query: self.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
        }
    }

    /// Input change. Returns the number of displayed profiles.
    pub fn on_input(&mut self, store: &mut ProfileStore, text: &str) -> usize {
        self.query = text.to_string();
        store.search(&self.query).len()
    }
}
