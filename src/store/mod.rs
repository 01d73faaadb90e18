//! Entry-list persistence
//!
//! The entry list lives in `entries.json` in the blog root as a JSON
//! array, newest entry first. The file is the single source of truth; the
//! in-memory list is rebuilt from it on every run and written back in
//! full after each mutation. No locking and no atomic rename - concurrent
//! invocations can interleave writes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Entry;
use crate::error::Result;

/// Store file name, relative to the blog root
const STORE_FILE: &str = "entries.json";

/// The ordered list of published entries
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Load the entry list from the blog root, or start empty when the
    /// store file does not exist yet. A present-but-malformed file is an
    /// error.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(STORE_FILE);
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    /// Write the full list back to disk, overwriting the store file
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Insert a new entry at the front of the list
    pub fn prepend(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str) -> Entry {
        Entry::new(title.to_string(), format!("body of {}", title), date.to_string())
    }

    #[test]
    fn test_load_missing_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = EntryStore::load(dir.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_prepend_puts_entry_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EntryStore::load(dir.path()).unwrap();
        store.prepend(entry("First", "May 01, 2024"));
        store.prepend(entry("Second", "May 02, 2024"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].title, "Second");
        assert_eq!(store.latest().unwrap().title, "Second");
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EntryStore::load(dir.path()).unwrap();
        store.prepend(entry("Older", "May 01, 2024"));
        store.prepend(entry("Newer", "May 02, 2024"));
        store.save().unwrap();

        let reloaded = EntryStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EntryStore::load(dir.path()).unwrap();
        store.prepend(entry("Only", "May 01, 2024"));
        store.save().unwrap();
        store.save().unwrap();

        let reloaded = EntryStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_malformed_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "{ not json").unwrap();
        assert!(EntryStore::load(dir.path()).is_err());
    }
}
