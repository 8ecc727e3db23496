//! Session persistence: one versioned JSON record in a single key-value slot.

mod kv;
mod record;

pub use kv::{KeyValueStore, MemoryStore};
pub use record::{SessionRecord, RECORD_VERSION};

use crate::models::Session;

/// Well-known slot holding the session record.
pub const STORAGE_KEY: &str = "team-picker-state";

/// Loads and saves the whole session record; no partial updates, no merging.
#[derive(Debug)]
pub struct SessionStore<S> {
    inner: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Open the store and drop whatever an earlier run left behind.
    pub fn boot(inner: S) -> Self {
        let mut store = Self::new(inner);
        store.clear();
        store
    }

    /// Current session. A missing, unparsable or outdated record reads as empty.
    pub fn load(&self) -> Session {
        let Some(bytes) = self.inner.get(STORAGE_KEY) else {
            return Session::Empty;
        };
        match serde_json::from_slice::<SessionRecord>(&bytes) {
            Ok(record) if record.version == RECORD_VERSION => record.into_session(),
            Ok(record) => {
                log::debug!(
                    "Discarding session record with version {} (expected {})",
                    record.version,
                    RECORD_VERSION
                );
                Session::Empty
            }
            Err(e) => {
                log::debug!("Discarding malformed session record: {}", e);
                Session::Empty
            }
        }
    }

    /// Overwrite the slot with `session`. Saving an empty session clears the slot.
    pub fn save(&mut self, session: &Session) -> Result<(), serde_json::Error> {
        match SessionRecord::from_session(session) {
            Some(record) => {
                let bytes = serde_json::to_vec(&record)?;
                self.inner.set(STORAGE_KEY, bytes);
            }
            None => self.inner.delete(STORAGE_KEY),
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inner.delete(STORAGE_KEY);
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}
