//! Browser localStorage binding for the theme preference.
//!
//! In WASM this talks to `window.localStorage`. Elsewhere (native tests) it
//! falls back to an in-memory map so the theme store runs unchanged.
//!
//! # Example
//!
//! ```ignore
//! use backdrop::browser::storage::Storage;
//!
//! let storage = Storage::local();
//! storage.set("theme", "dark")?;
//! assert_eq!(storage.get("theme").as_deref(), Some("dark"));
//! ```

use backdrop_core::PreferenceStorage;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is not available (e.g., blocked by privacy settings)
    #[error("storage not available")]
    NotAvailable,
    /// Storage quota exceeded
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Access denied
    #[error("storage access denied")]
    AccessDenied,
}

/// Origin-scoped persistent key-value storage.
#[derive(Debug, Default)]
pub struct Storage {
    /// In-memory fallback for non-WASM environments
    #[cfg(not(target_arch = "wasm32"))]
    memory: std::sync::Mutex<HashMap<String, String>>,
}

impl Storage {
    /// Create a localStorage handle.
    #[must_use]
    pub fn local() -> Self {
        Self::default()
    }

    /// Get a value from storage. Read failures yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    /// Set a value in storage.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.set_wasm(key, value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Remove a value from storage.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.remove_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .remove(key);
            Ok(())
        }
    }

    // WASM implementations
    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn get_wasm(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn set_wasm(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()
            .ok_or(StorageError::NotAvailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    #[cfg(target_arch = "wasm32")]
    fn remove_wasm(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()
            .ok_or(StorageError::NotAvailable)?
            .remove_item(key)
            .map_err(|_| StorageError::AccessDenied)
    }
}

impl PreferenceStorage for Storage {
    type Error = StorageError;

    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set(key, value)
    }
}
