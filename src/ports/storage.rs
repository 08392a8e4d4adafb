//! Storage port: named string slots that survive between sessions.

/// Error type returned by storage adapters.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;

/// Key/value slot storage, the local equivalent of a browser's local storage.
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under that key yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store exists but cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
