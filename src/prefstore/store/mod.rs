//! # Storage Layer
//!
//! The [`StorageAdapter`] trait is the persistence boundary: one fixed
//! storage slot holding the serialized settings document as UTF-8 text.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (platform keystores, browser storage)
//!   without changing the engine
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage, one `settings.json`
//!   under a root directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with
//!   injectable read/write failures
//!
//! The adapter guarantees only "last write visible to next read". It is not
//! asked for read-modify-write atomicity; logical consistency between a
//! read and the following write is the engine's job (see [`crate::api`]).

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for settings persistence.
pub trait StorageAdapter {
    /// The last-written serialized document, or `None` if nothing has ever
    /// been stored. "Not found" is a first-class result, never an error.
    fn read_raw(&self) -> Result<Option<String>>;

    /// Durably store the serialized document, overwriting any prior value.
    /// Callers only pass fully-formed documents, never partials.
    fn write_raw(&mut self, raw: &str) -> Result<()>;
}
