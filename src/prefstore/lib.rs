//! # Prefstore Architecture
//!
//! Prefstore is a **UI-agnostic preference store library**: a hierarchical,
//! schema-reconciling settings document persisted as one JSON file. The CLI
//! binary is just one client of the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, wired by main.rs)                            │
//! │  - Parses arguments, formats output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - get / page / set / reset, one load→mutate→persist cycle  │
//! │  - Returns structured outcomes, never prints, never panics  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (path.rs, merge.rs, schema.rs, model.rs)            │
//! │  - Pure functions over JSON trees, no I/O assumptions       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - StorageAdapter trait                                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Behaviors
//!
//! - **Reconciliation**: every load merges the stored tree against the
//!   Default Schema, so newly introduced defaults appear without touching
//!   stored overrides. See [`merge`].
//! - **Reads never fail**: missing, unreadable, or malformed storage falls
//!   back to a seeded default document; the
//!   [`DocumentSource`](api::DocumentSource) on each snapshot says which.
//! - **Optimistic writes**: a failed persist still returns the mutated
//!   document; the [`WriteOutcome`](api::WriteOutcome) carries the detail.
//! - **Copy-on-write paths**: [`path::assign`] never mutates its input, so
//!   snapshots held by other callers stay valid.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`schema`]: the Default Schema constant and lookups into it
//! - [`model`]: the persisted document and typed per-category views
//! - [`path`]: dotted-path resolve/assign/remove
//! - [`merge`]: recursive defaults reconciliation
//! - [`store`]: storage abstraction and implementations
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod merge;
pub mod model;
pub mod path;
pub mod schema;
pub mod store;
