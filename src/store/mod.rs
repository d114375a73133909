//! # Storage Layer
//!
//! This module holds everything between the in-memory list and durable
//! storage.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: raw record I/O — *where* the bytes go
//!   (filesystem vs memory). One opaque record under one well-known key.
//! - [`persist`]: the persistence adapter — *what* the bytes are (JSON
//!   encoding, structural validation, fail-safe load).
//! - [`todo_store::TodoStore`]: the business layer — the authoritative
//!   ordered list, its invariants, and the persist-after-every-mutation
//!   contract.
//!
//! ## Durability Philosophy
//!
//! The in-memory list is authoritative for the session. Persistence is
//! best-effort: a failed write is logged and the mutation still counts as
//! committed, because the operation's primary contract (update the list) was
//! met. A record that fails structural validation on load yields an empty
//! list rather than an error; there is no schema migration.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production; one JSON file, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod persist;
pub mod todo_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use todo_store::TodoStore;
