//! Cache store adapters

pub mod file;
pub mod memory;

pub use file::FileCacheStore;
pub use memory::InMemoryCacheStore;
