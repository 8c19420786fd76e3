use std::collections::hash_map::Entry;

use super::storage::{Entries, Error, Storage};

/// The whole "database": a mapping that lives as long as the process does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Entries,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        Self::default()
    }

    pub fn with_seed(key: &str, value: &str) -> MemoryStorage {
        let mut entries = Entries::new();
        entries.insert(key.to_owned(), value.to_owned());

        MemoryStorage { entries }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn entries(&self) -> Entries {
        self.entries.clone()
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(_) => Err(Error::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(value.to_owned());
                Ok(())
            }
        }
    }

    fn replace(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match self.entries.get_mut(key) {
            Some(current) => {
                *current = value.to_owned();
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    fn remove(&mut self, key: &str) -> Result<String, Error> {
        self.entries.remove(key).ok_or(Error::NotFound)
    }

    fn key_count(&self) -> u64 {
        self.entries.len() as u64
    }
}
