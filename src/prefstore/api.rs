//! # API Facade
//!
//! [`PrefStore`] is the single entry point for all preference operations.
//! It is generic over [`StorageAdapter`] so production code runs on
//! [`FileStore`](crate::store::fs::FileStore) and tests on
//! [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! ## Operation shape
//!
//! Every operation is one synchronous round trip: load-and-reconcile from
//! the adapter, optionally mutate a copy, optionally persist. There is no
//! in-memory cache between calls, so a read never observes stale state at
//! the cost of a full read+merge per call.
//!
//! ## Failure policy
//!
//! Reads never fail: a missing, unreadable, or malformed document is
//! replaced by a freshly seeded default document, and the
//! [`DocumentSource`] on the returned [`Snapshot`] says so. Writes apply
//! the mutation to the returned document even when persistence fails; the
//! [`WriteOutcome`] carries the failure detail for callers that care.
//!
//! ## Write serialization
//!
//! The adapter offers no read-modify-write atomicity, so the store holds it
//! behind a mutex and runs each load→mutate→persist cycle under the lock.
//! Two writers on the same store can no longer silently drop each other's
//! changes; callers sharing one storage location across *processes* still
//! need their own coordination.

use crate::error::Result;
use crate::model::SettingsDocument;
use crate::store::StorageAdapter;
use crate::{merge, path, schema};
use serde_json::{Map, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// How the document in a [`Snapshot`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    /// Deserialized from storage and reconciled against the Default Schema.
    Stored,
    /// Nothing was stored yet; seeded from the Default Schema.
    SeededFirstRun,
    /// Stored bytes failed to parse; seeded from the Default Schema.
    SeededMalformed,
    /// The adapter's read failed; seeded from the Default Schema.
    SeededUnreadable,
}

impl DocumentSource {
    /// True when the document came from defaults rather than storage.
    pub fn is_seeded(&self) -> bool {
        !matches!(self, DocumentSource::Stored)
    }
}

/// A reconciled document plus where it came from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub document: SettingsDocument,
    pub source: DocumentSource,
}

impl Snapshot {
    /// Value at `path`, falling back to the Default Schema. `None` only for
    /// paths absent from both the document and the schema.
    pub fn get(&self, path_str: &str) -> Option<Value> {
        path::resolve(&self.document.settings, path_str)
            .or_else(|| schema::default_value(path_str))
            .cloned()
    }

    /// Mapping at `path`: the stored subtree if it is a mapping, else the
    /// Default Schema's subtree, else an empty mapping.
    pub fn page(&self, path_str: &str) -> Map<String, Value> {
        if let Some(map) =
            path::resolve(&self.document.settings, path_str).and_then(Value::as_object)
        {
            return map.clone();
        }
        schema::default_subtree(path_str)
            .cloned()
            .unwrap_or_default()
    }
}

/// Result of a mutating operation. The mutation is always applied to
/// `document`; `persisted` says whether it also reached storage.
#[derive(Debug)]
pub struct WriteOutcome {
    pub persisted: bool,
    pub storage_error: Option<String>,
    pub document: SettingsDocument,
}

/// The hierarchical preference store.
///
/// Constructed once by the host application and passed by reference to
/// consumers; there is no process-wide singleton.
pub struct PrefStore<S: StorageAdapter> {
    adapter: Mutex<S>,
}

impl<S: StorageAdapter> PrefStore<S> {
    pub fn new(adapter: S) -> Self {
        Self {
            adapter: Mutex::new(adapter),
        }
    }

    /// Load-and-reconcile without mutating anything.
    pub fn snapshot(&self) -> Snapshot {
        let mut adapter = self.lock();
        let (document, source) = load(&mut *adapter);
        Snapshot { document, source }
    }

    /// Single-parameter read with Default Schema fallback.
    pub fn get(&self, path_str: &str) -> Option<Value> {
        self.snapshot().get(path_str)
    }

    /// Page-scoped batch read: every key of the subtree at `path_str`.
    pub fn page(&self, path_str: &str) -> Map<String, Value> {
        self.snapshot().page(path_str)
    }

    /// Write one parameter and persist the whole document.
    pub fn set(&self, path_str: &str, value: Value) -> WriteOutcome {
        let mut adapter = self.lock();
        let (mut document, _) = load(&mut *adapter);
        document.settings = path::assign(&document.settings, path_str, value);
        persist(&mut *adapter, document)
    }

    /// Restore the subtree at `path_str` to its Default Schema value and
    /// persist. A path the schema does not define is removed instead.
    pub fn reset(&self, path_str: &str) -> WriteOutcome {
        let mut adapter = self.lock();
        let (mut document, _) = load(&mut *adapter);
        document.settings = match schema::default_value(path_str) {
            Some(default) => path::assign(&document.settings, path_str, default.clone()),
            None => path::remove(&document.settings, path_str),
        };
        persist(&mut *adapter, document)
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        // A panic mid-operation leaves no partial in-memory state worth
        // protecting: every call re-loads from storage anyway.
        self.adapter.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load<S: StorageAdapter>(adapter: &mut S) -> (SettingsDocument, DocumentSource) {
    match adapter.read_raw() {
        Ok(Some(raw)) => match serde_json::from_str::<SettingsDocument>(&raw) {
            Ok(mut document) => {
                document.settings =
                    merge::reconcile(&document.settings, schema::default_settings());
                (document, DocumentSource::Stored)
            }
            Err(_) => seed(adapter, DocumentSource::SeededMalformed),
        },
        Ok(None) => seed(adapter, DocumentSource::SeededFirstRun),
        Err(_) => seed(adapter, DocumentSource::SeededUnreadable),
    }
}

fn seed<S: StorageAdapter>(adapter: &mut S, source: DocumentSource) -> (SettingsDocument, DocumentSource) {
    let document = SettingsDocument::seeded();
    // Best-effort: a failed seed write is not fatal, the caller still gets
    // a complete default document and the source tells it what happened.
    let _ = write_document(adapter, &document);
    (document, source)
}

fn persist<S: StorageAdapter>(adapter: &mut S, mut document: SettingsDocument) -> WriteOutcome {
    document.touch();
    match write_document(adapter, &document) {
        Ok(()) => WriteOutcome {
            persisted: true,
            storage_error: None,
            document,
        },
        Err(e) => WriteOutcome {
            persisted: false,
            storage_error: Some(e.to_string()),
            document,
        },
    }
}

fn write_document<S: StorageAdapter>(adapter: &mut S, document: &SettingsDocument) -> Result<()> {
    let raw = serde_json::to_string_pretty(document)?;
    adapter.write_raw(&raw)
}
