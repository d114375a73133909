use std::cell::RefCell;

use super::backend::StorageBackend;
use crate::error::{Result, TodoError};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the engine is
/// single-threaded. This keeps all `StorageBackend` methods on `&self`
/// without the overhead of a lock.
#[derive(Default)]
pub struct MemBackend {
    record: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Inject a raw record directly, bypassing serialization. Used to test
    /// recovery from malformed payloads.
    pub fn set_raw_record(&self, raw: &str) {
        *self.record.borrow_mut() = Some(raw.to_string());
    }

    /// The current raw record, if any.
    pub fn raw_record(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_record(&self) -> Result<Option<String>> {
        Ok(self.record.borrow().clone())
    }

    fn write_record(&self, raw: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        *self.record.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_before_write_is_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read_record().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let backend = MemBackend::new();
        backend.write_record("[]").unwrap();
        assert_eq!(backend.read_record().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemBackend::new();
        backend.write_record("[]").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.write_record("[1]").is_err());

        // The prior record is untouched
        assert_eq!(backend.read_record().unwrap(), Some("[]".to_string()));
    }
}
