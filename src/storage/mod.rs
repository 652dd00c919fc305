//! Key-value persistence for the conversation log
//!
//! The conversation is mirrored into a single slot of a key-value store. Two backends:
//! - [`FileSlot`]: one JSON file per key in the data directory, written atomically
//! - [`MemorySlot`]: shared in-memory map for tests and ephemeral sessions
//!
//! Data directory location (see [`crate::utils::default_data_dir`]):
//! - macOS: `~/Library/Application Support/askwhy/`
//! - Linux: `~/.local/share/askwhy/`
//! - Windows: `%APPDATA%\askwhy\`

pub mod file;
pub mod memory;

use anyhow::Result;
pub use file::FileSlot;
pub use memory::MemorySlot;

/// Single-key string storage used to persist the conversation log
pub trait KeyValueSlot: Send {
    /// Read a value; `Ok(None)` when the key has never been set or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
