//! The persistence adapter: JSON encoding of the full list over a
//! [`StorageBackend`], with a fail-safe load path.

use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Todo;

/// Serializes the full ordered list and overwrites the stored record.
///
/// Failures propagate to the caller; [`super::todo_store::TodoStore`] treats
/// them as non-fatal and logs them.
pub fn save<B: StorageBackend>(backend: &B, todos: &[Todo]) -> Result<()> {
    let raw = serde_json::to_string(todos)?;
    backend.write_record(&raw)
}

/// Loads the stored list.
///
/// An absent record and a structurally invalid one (not an array, or
/// elements missing required fields) both yield an empty list; the invalid
/// case is logged. Starting empty here is a deliberate fail-safe: there is
/// no schema migration, and load never raises to the caller.
pub fn load<B: StorageBackend>(backend: &B) -> Vec<Todo> {
    let raw = match backend.read_record() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("failed to read todo record, starting empty: {}", err);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => todos,
        Err(err) => {
            log::warn!("stored todo record is malformed, starting empty: {}", err);
            Vec::new()
        }
    }
}
