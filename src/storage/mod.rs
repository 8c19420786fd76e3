pub mod memory;
pub mod storage;

pub use memory::MemoryStorage;
pub use storage::{Entries, Error, Storage};
