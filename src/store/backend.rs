use crate::error::Result;

/// Abstract interface for raw record I/O.
///
/// A backend stores exactly one opaque record under one well-known key.
/// This trait handles the "where" of storage (filesystem vs memory), while
/// [`super::persist`] handles the "what" (encoding and validation).
pub trait StorageBackend {
    /// Read the serialized record.
    /// Returns `Ok(None)` if no record has ever been written.
    /// Returns `Err` only on actual I/O errors (permissions, disk failure).
    fn read_record(&self) -> Result<Option<String>>;

    /// Overwrite the record.
    /// MUST be atomic for durable backends (e.g. write to tmp then rename)
    /// to avoid a torn record after a crash.
    fn write_record(&self, raw: &str) -> Result<()>;
}
