use std::collections::HashMap;

use thiserror::Error;

pub type Entries = HashMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Entry already exists.")]
    Conflict,
    #[error("Entry does not exist.")]
    NotFound,
}

pub trait Storage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn entries(&self) -> Entries;
    /// Fails with [`Error::Conflict`] if `key` is already stored.
    fn insert(&mut self, key: &str, value: &str) -> Result<(), Error>;
    /// Fails with [`Error::NotFound`] unless `key` is already stored.
    fn replace(&mut self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&mut self, key: &str) -> Result<String, Error>;
    fn key_count(&self) -> u64;
}
