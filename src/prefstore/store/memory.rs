use super::StorageAdapter;
use crate::error::{Result, StoreError};

/// In-memory storage for testing and development.
/// Does NOT persist data. Read and write failures can be injected to
/// exercise the engine's fallback paths.
#[derive(Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing raw content, as if written by a prior run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every `read_raw` fail with a storage error.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `write_raw` fail with a storage error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The raw content currently held, for assertions.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl StorageAdapter for InMemoryStore {
    fn read_raw(&self) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(StoreError::Storage("injected read failure".to_string()));
        }
        Ok(self.raw.clone())
    }

    fn write_raw(&mut self, raw: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::Storage("injected write failure".to_string()));
        }
        self.raw = Some(raw.to_string());
        Ok(())
    }
}
