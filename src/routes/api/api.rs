use crate::storage::{Entries, Error, Storage};

fn single(key: &str, value: String) -> Entries {
    Entries::from([(key.to_owned(), value)])
}

pub fn read(storage: &dyn Storage, key: Option<&str>) -> Result<Entries, Error> {
    match key {
        Some(key) => storage
            .get(key)
            .map(|value| single(key, value))
            .ok_or(Error::NotFound),
        None => Ok(storage.entries()),
    }
}

pub fn create(storage: &mut dyn Storage, key: &str, value: &str) -> Result<Entries, Error> {
    storage.insert(key, value)?;

    Ok(single(key, value.to_owned()))
}

pub fn update(storage: &mut dyn Storage, key: &str, value: &str) -> Result<Entries, Error> {
    storage.replace(key, value)?;

    Ok(single(key, value.to_owned()))
}

/// Returns what is left in the store after the removal.
pub fn delete(storage: &mut dyn Storage, key: &str) -> Result<Entries, Error> {
    storage.remove(key)?;

    Ok(storage.entries())
}
