//! # Domain Model: Todos, Filters, and View State
//!
//! This module defines the core data structures: [`Todo`], [`Filter`],
//! [`ViewState`], and [`Summary`].
//!
//! ## The Record Format
//!
//! The persisted record is a JSON array of todo objects:
//!
//! ```text
//! [{ "id": "...", "todo": "Buy milk", "completed": false, "createdAt": 1756339200000 }]
//! ```
//!
//! Field naming is deliberate:
//! - The text lives under `todo` (the original record layout); `text` is
//!   accepted as an alias when loading.
//! - `createdAt` is an integer, milliseconds since the epoch.
//!
//! There is no schema version field. Any payload that is not an array of
//! well-formed objects is treated as absent data by the persistence adapter.
//!
//! ## Text Uniqueness
//!
//! Todo text must be unique across the list under trimmed, case-insensitive
//! comparison. The comparison key is produced by [`text_key`]; enforcement
//! lives in the store, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One list item: text, completion state, identity, and creation time.
///
/// `created_at` is record-keeping only; display order is the list order, not
/// a timestamp sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    #[serde(rename = "todo", alias = "text")]
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a pending todo with a fresh id. Expects already-validated
    /// (trimmed, non-empty, non-duplicate) text; the store guards that.
    pub fn new(text: String) -> Self {
        let now = Utc::now();
        // The record format keeps millisecond precision; truncate up front
        // so a save/load round-trip returns a structurally equal todo.
        let created_at = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at,
        }
    }
}

/// Canonical comparison key for duplicate detection: trimmed and case-folded.
pub fn text_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Status filter applied to the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Pending,
    Completed,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

/// Ephemeral UI state: the active filter and the current search text.
/// Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: Filter,
    pub search: String,
}

/// Counts over the full list, unaffected by filter or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let todo = Todo::new("Buy milk".to_string());
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_new_todos_get_distinct_ids() {
        let a = Todo::new("A".to_string());
        let b = Todo::new("B".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_field_names() {
        let todo = Todo::new("Buy milk".to_string());
        let value = serde_json::to_value(&todo).unwrap();

        assert!(value.get("id").unwrap().is_string());
        assert_eq!(value.get("todo").unwrap(), "Buy milk");
        assert_eq!(value.get("completed").unwrap(), false);
        // Milliseconds since epoch, as an integer
        assert!(value.get("createdAt").unwrap().is_i64());
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let todo = Todo::new("Walk the dog".to_string());
        let json = serde_json::to_string(&todo).unwrap();
        let loaded: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, todo);
    }

    #[test]
    fn test_deserializes_text_alias() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"id": "{}", "text": "Aliased", "completed": true, "createdAt": 1700000000000}}"#,
            id
        );
        let loaded: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.text, "Aliased");
        assert!(loaded.completed);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = format!(r#"{{"id": "{}", "todo": "No flag"}}"#, Uuid::new_v4());
        assert!(serde_json::from_str::<Todo>(&json).is_err());
    }

    #[test]
    fn test_text_key_trims_and_folds() {
        assert_eq!(text_key("  Buy Milk  "), "buy milk");
        assert_eq!(text_key("BUY MILK"), text_key("buy milk"));
        assert_ne!(text_key("buy milk"), text_key("buy bread"));
    }

    #[test]
    fn test_filter_defaults_to_all() {
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(ViewState::default().filter, Filter::All);
        assert!(ViewState::default().search.is_empty());
    }
}
