//! # The Authoritative Todo List
//!
//! [`TodoStore`] is the sole owner of the ordered list. Every mutating call:
//!
//! 1. Validates its input (trim, non-empty, no case-insensitive duplicate).
//! 2. Commits the change in memory.
//! 3. Writes the full list through the backend before returning.
//!
//! The persist step is best-effort: a failed write is logged, not surfaced,
//! because the operation's primary contract (update the list) was already
//! met and the in-memory list stays authoritative for the session.
//!
//! ## Invariants Enforced Here
//!
//! - Ids are unique (fresh v4 per creation; nothing else mints ids).
//! - Text is unique under trimmed, case-insensitive comparison.
//! - Reordering is a permutation: todos are only created by `add` and only
//!   destroyed by `remove`/`clear_completed`.

use uuid::Uuid;

use super::backend::StorageBackend;
use super::persist;
use crate::error::{Result, TodoError};
use crate::model::{text_key, Todo};
use crate::reorder;

/// Sole owner of the ordered todo list, generic over the storage backend.
pub struct TodoStore<B: StorageBackend> {
    backend: B,
    todos: Vec<Todo>,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Opens the store, loading whatever the backend holds. An absent or
    /// malformed record loads as an empty list (see [`persist::load`]).
    pub fn open(backend: B) -> Self {
        let todos = persist::load(&backend);
        Self { backend, todos }
    }

    /// Read-only snapshot of the full list. No side effects.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Creates a todo at the front of the list (most-recent-first).
    pub fn add(&mut self, text: &str) -> Result<Todo> {
        let text = validated(text)?;
        let key = text_key(&text);
        if self.todos.iter().any(|t| text_key(&t.text) == key) {
            return Err(TodoError::Duplicate(text));
        }

        let todo = Todo::new(text);
        self.todos.insert(0, todo.clone());
        self.persist();
        Ok(todo)
    }

    /// Renames a todo in place; position and completion are untouched.
    pub fn rename(&mut self, id: Uuid, text: &str) -> Result<()> {
        self.edit(id, text, None)
    }

    /// The edit flow: new text plus, optionally, a new completion state in
    /// the same action. The duplicate check compares against all *other*
    /// todos, so saving an unchanged text is not a collision with itself.
    pub fn edit(&mut self, id: Uuid, text: &str, completed: Option<bool>) -> Result<()> {
        let text = validated(text)?;
        let pos = self.position(id)?;

        let key = text_key(&text);
        if self
            .todos
            .iter()
            .enumerate()
            .any(|(i, t)| i != pos && text_key(&t.text) == key)
        {
            return Err(TodoError::Duplicate(text));
        }

        let todo = &mut self.todos[pos];
        todo.text = text;
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        self.persist();
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self, id: Uuid) -> Result<()> {
        let pos = self.position(id)?;
        self.todos[pos].completed = !self.todos[pos].completed;
        self.persist();
        Ok(())
    }

    /// Deletes a todo; the order of the remaining items is preserved.
    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let pos = self.position(id)?;
        self.todos.remove(pos);
        self.persist();
        Ok(())
    }

    /// Removes every completed todo in one mutation. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Applies a new order for the currently visible subset. See
    /// [`reorder::reconcile`] for the merge policy when a filter or search
    /// is hiding part of the list.
    pub fn reorder(&mut self, visible_ids: &[Uuid]) {
        self.todos = reorder::reconcile(std::mem::take(&mut self.todos), visible_ids);
        self.persist();
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    fn persist(&self) {
        if let Err(err) = persist::save(&self.backend, &self.todos) {
            log::warn!("failed to persist todo list: {}", err);
        }
    }
}

fn validated(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(trimmed.to_string())
}
