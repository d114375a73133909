//! # View Projection
//!
//! Pure derivation of what the user currently sees. The projector never
//! mutates the list and never touches storage; the presentation layer calls
//! [`project`] after every mutation and decides render timing itself.

use crate::model::{Filter, Summary, Todo};

/// Projects the full list into the visible subsequence.
///
/// Rules, applied in order:
/// 1. `Pending` excludes completed todos; `Completed` excludes pending ones.
/// 2. A non-empty search needle (trimmed, case-folded) keeps only todos whose
///    text contains it as a case-insensitive substring.
/// 3. The relative order of the underlying list is preserved.
pub fn project<'a>(todos: &'a [Todo], filter: Filter, search: &str) -> Vec<&'a Todo> {
    let needle = search.trim().to_lowercase();
    todos
        .iter()
        .filter(|todo| {
            let status_ok = match filter {
                Filter::All => true,
                Filter::Pending => !todo.completed,
                Filter::Completed => todo.completed,
            };
            status_ok && (needle.is_empty() || todo.text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Summary counts over the **full** list, unaffected by filter or search.
pub fn summary(todos: &[Todo]) -> Summary {
    let completed = todos.iter().filter(|t| t.completed).count();
    Summary {
        total: todos.len(),
        completed,
        pending: todos.len() - completed,
    }
}
