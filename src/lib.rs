//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo list core**. It owns the list of record and
//! everything with real invariants — uniqueness, ordering, reconciliation of
//! partial-view reorders, persistence — and leaves rendering and event wiring
//! entirely to the embedding application.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation Layer (external)                              │
//! │  - Renders the projection, captures input and drag gestures │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - Store + ephemeral view state (filter, search)            │
//! │  - Pull model: mutate, then re-read project()/summary()     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/todo_store.rs, view.rs, reorder.rs)            │
//! │  - Authoritative ordered list and its invariants            │
//! │  - Pure projection and reorder reconciliation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/backend.rs, persist.rs, *_backend.rs)       │
//! │  - One opaque record under one key, fail-safe load          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **One logical writer.** Everything is single-threaded and synchronous:
//!   each action validates, mutates, persists, and returns before the next
//!   one can be dispatched. No locking discipline is needed, and a
//!   projection can never observe a pre-mutation list.
//! - **Persistence is best-effort.** Every mutation writes the full list
//!   before returning; a failed write is logged and the in-memory list stays
//!   authoritative for the session. A malformed stored record loads as an
//!   empty list rather than an error.
//! - **Projection is derived, never stored.** Filter and search state live
//!   in the facade and are never persisted; the list of record keeps its own
//!   order, which reordering operations permute explicitly.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`model`]: Core data types (`Todo`, `Filter`, `ViewState`, `Summary`)
//! - [`view`]: Pure projection and summary counts
//! - [`reorder`]: Merging a reordered visible subset into the full list
//! - [`store`]: The authoritative list, storage abstraction, and backends
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod model;
pub mod reorder;
pub mod store;
pub mod view;
