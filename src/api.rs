//! # API Facade
//!
//! [`TodoApi`] is the single entry point a presentation layer talks to. It
//! owns the store plus the ephemeral view state (active filter, search text)
//! and exposes mutations, view-state setters, and queries.
//!
//! ## Pull Model
//!
//! The core never pushes updates. Every mutation commits in memory and
//! persists before it returns, so the caller re-reads [`TodoApi::project`]
//! and [`TodoApi::summary`] afterwards and decides render timing and diffing
//! itself. A projection can therefore never observe a stale pre-mutation
//! list.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `TodoApi<FsBackend>`
//! - Testing: `TodoApi<MemBackend>`

use uuid::Uuid;

use crate::error::Result;
use crate::model::{Filter, Summary, Todo, ViewState};
use crate::store::{StorageBackend, TodoStore};
use crate::view;

/// The facade over the todo state engine.
pub struct TodoApi<B: StorageBackend> {
    store: TodoStore<B>,
    view: ViewState,
}

impl<B: StorageBackend> TodoApi<B> {
    /// Opens the engine over a backend, loading any persisted list. View
    /// state starts at its defaults (`Filter::All`, empty search).
    pub fn open(backend: B) -> Self {
        Self {
            store: TodoStore::open(backend),
            view: ViewState::default(),
        }
    }

    // --- Mutations ---

    pub fn add(&mut self, text: &str) -> Result<Todo> {
        self.store.add(text)
    }

    pub fn rename(&mut self, id: Uuid, text: &str) -> Result<()> {
        self.store.rename(id, text)
    }

    pub fn edit(&mut self, id: Uuid, text: &str, completed: Option<bool>) -> Result<()> {
        self.store.edit(id, text, completed)
    }

    pub fn toggle(&mut self, id: Uuid) -> Result<()> {
        self.store.toggle(id)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        self.store.remove(id)
    }

    pub fn clear_completed(&mut self) -> usize {
        self.store.clear_completed()
    }

    /// Merges a completed drag over the current projection back into the
    /// full list. Callers should pass the ids of the projected view in
    /// their post-drag order.
    pub fn reorder(&mut self, visible_ids: &[Uuid]) {
        self.store.reorder(visible_ids);
    }

    // --- View state ---

    pub fn set_filter(&mut self, filter: Filter) {
        self.view.filter = filter;
    }

    pub fn set_search(&mut self, search: &str) {
        self.view.search = search.to_string();
    }

    pub fn filter(&self) -> Filter {
        self.view.filter
    }

    pub fn search(&self) -> &str {
        &self.view.search
    }

    // --- Queries ---

    /// The full authoritative list, ignoring filter and search.
    pub fn list(&self) -> &[Todo] {
        self.store.todos()
    }

    /// The visible subsequence under the current filter and search.
    pub fn project(&self) -> Vec<&Todo> {
        view::project(self.store.todos(), self.view.filter, &self.view.search)
    }

    /// Counts over the full list, unaffected by filter and search.
    pub fn summary(&self) -> Summary {
        view::summary(self.store.todos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    fn api() -> TodoApi<MemBackend> {
        TodoApi::open(MemBackend::new())
    }

    #[test]
    fn test_projection_tracks_view_state() {
        let mut api = api();
        api.add("Eggs").unwrap();
        let milk = api.add("Milk").unwrap();
        api.toggle(milk.id).unwrap();

        api.set_filter(Filter::Completed);
        assert_eq!(api.project().len(), 1);
        assert_eq!(api.project()[0].text, "Milk");

        api.set_filter(Filter::All);
        api.set_search("egg");
        assert_eq!(api.project()[0].text, "Eggs");
    }

    #[test]
    fn test_summary_ignores_view_state() {
        let mut api = api();
        api.add("Eggs").unwrap();
        let milk = api.add("Milk").unwrap();
        api.toggle(milk.id).unwrap();
        api.set_filter(Filter::Pending);
        api.set_search("zzz");

        let counts = api.summary();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.pending, 1);
    }

    #[test]
    fn test_reorder_under_filter_pushes_hidden_after() {
        let mut api = api();
        let a = api.add("A").unwrap();
        let b = api.add("B").unwrap();
        let c = api.add("C").unwrap();
        api.toggle(b.id).unwrap();

        // Visible under Pending: [C, A]; drag A above C.
        api.set_filter(Filter::Pending);
        api.reorder(&[a.id, c.id]);

        let full: Vec<&str> = api.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(full, vec!["A", "C", "B"]);
    }
}
