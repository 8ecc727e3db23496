//! Key-value slot abstraction over whatever holds the session record.

use std::collections::HashMap;

/// Synchronous, last-writer-wins key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&mut self, key: &str, value: Vec<u8>);
    fn delete(&mut self, key: &str);
}

/// In-process store, used by tests and tooling.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.slots.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) {
        (**self).delete(key)
    }
}
