//! # Reorder Reconciliation
//!
//! Merging a reordered *visible* subset back into the full list.
//!
//! When a drag completes while a filter or search is active, only the visible
//! subsequence carries a new order. The merge policy committed to here:
//!
//! - Visible todos take exactly the supplied order.
//! - Hidden todos keep their prior relative order among themselves, but the
//!   whole hidden block lands *after* the visible block.
//!
//! Hidden todos are not interleaved back at their old absolute positions.
//! That is a deliberate simplification, not an accident, and callers that
//! reorder during an active search must accept it.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::model::Todo;

/// Returns the full list with `visible_ids` applied as the new order of the
/// visible subset.
///
/// Ids in `visible_ids` that are not in `full` are dropped (defensive; a
/// well-behaved caller only passes ids it got from a projection). The result
/// is always a permutation of `full`.
pub fn reconcile(full: Vec<Todo>, visible_ids: &[Uuid]) -> Vec<Todo> {
    let visible: HashSet<Uuid> = visible_ids.iter().copied().collect();

    let mut shown: HashMap<Uuid, Todo> = HashMap::new();
    let mut hidden = Vec::new();
    for todo in full {
        if visible.contains(&todo.id) {
            shown.insert(todo.id, todo);
        } else {
            hidden.push(todo);
        }
    }

    let mut merged: Vec<Todo> = visible_ids
        .iter()
        .filter_map(|id| shown.remove(id))
        .collect();
    merged.extend(hidden);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(texts: &[&str]) -> Vec<Todo> {
        texts.iter().map(|t| Todo::new((*t).to_string())).collect()
    }

    fn ids(todos: &[Todo]) -> Vec<Uuid> {
        todos.iter().map(|t| t.id).collect()
    }

    fn texts(todos: &[Todo]) -> Vec<String> {
        todos.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_reconcile_full_permutation() {
        let full = make_list(&["A", "B", "C"]);
        let new_order = vec![full[2].id, full[0].id, full[1].id];

        let merged = reconcile(full, &new_order);

        assert_eq!(texts(&merged), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reconcile_is_a_permutation() {
        let full = make_list(&["A", "B", "C", "D"]);
        let original_ids: HashSet<Uuid> = ids(&full).into_iter().collect();
        let visible = vec![full[1].id, full[3].id];

        let merged = reconcile(full, &visible);

        assert_eq!(merged.len(), 4);
        let merged_ids: HashSet<Uuid> = ids(&merged).into_iter().collect();
        assert_eq!(merged_ids, original_ids);
    }

    #[test]
    fn test_reconcile_visible_first_hidden_after_in_original_order() {
        // A, C hidden; D, B visible and swapped by the drag.
        let full = make_list(&["A", "B", "C", "D"]);
        let visible = vec![full[3].id, full[1].id];

        let merged = reconcile(full, &visible);

        assert_eq!(texts(&merged), vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_reconcile_unknown_id_is_dropped() {
        let full = make_list(&["A", "B"]);
        let visible = vec![full[1].id, Uuid::new_v4(), full[0].id];

        let merged = reconcile(full, &visible);

        assert_eq!(texts(&merged), vec!["B", "A"]);
    }

    #[test]
    fn test_reconcile_empty_visible_keeps_order() {
        let full = make_list(&["A", "B", "C"]);
        let merged = reconcile(full, &[]);
        assert_eq!(texts(&merged), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reconcile_empty_list() {
        let merged = reconcile(Vec::new(), &[Uuid::new_v4()]);
        assert!(merged.is_empty());
    }
}
