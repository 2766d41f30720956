use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::BlobStore;

/// In-memory blob store for tests and ephemeral sessions
///
/// No data survives the process; everything else behaves like a persistent
/// backend, including round-tripping blobs byte for byte.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_returns_none() {
        let store = MemoryStore::new();
        assert!(store.read("expenses").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let store = MemoryStore::new();
        store.write("expenses", "[1,2,3]").unwrap();
        assert_eq!(store.read("expenses").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let store = MemoryStore::new();
        store.write("budgets", "{}").unwrap();
        store.write("budgets", r#"{"Food":50.0}"#).unwrap();
        assert_eq!(
            store.read("budgets").unwrap().as_deref(),
            Some(r#"{"Food":50.0}"#)
        );
    }
}
