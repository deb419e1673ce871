//! Float key-value persistence behind the [`SaveProvider`] seam.
//!
//! The race core never touches the disk directly; it talks to a provider that
//! stores one float per string key. `save()` is the flush/commit point.

pub mod file;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub use file::FileSaveProvider;

/// Abstract float key-value store consumed by the high-score service.
///
/// Providers are assumed to succeed synchronously; a provider that can fail
/// internally (e.g. disk I/O) deals with its own failures.
pub trait SaveProvider {
    /// Whether a value exists for `key`.
    fn has_key(&self, key: &str) -> bool;

    /// Read the value for `key`, or `default_value` if absent.
    fn get_float(&self, key: &str, default_value: f32) -> f32;

    /// Set the value for `key` in memory.
    fn set_float(&mut self, key: &str, value: f32);

    /// Flush pending writes to the backing store.
    fn save(&mut self);
}

/// Shared handle to a save provider.
///
/// The provider is shared between the high-score service and whoever else
/// needs to inspect it (composition root, tests).
pub type SharedSaveProvider = Arc<Mutex<dyn SaveProvider + Send>>;

/// Wrap a provider into a shared handle.
pub fn shared<S: SaveProvider + Send + 'static>(provider: S) -> SharedSaveProvider {
    Arc::new(Mutex::new(provider))
}

/// In-memory save provider.
///
/// Backs tests and ephemeral sessions; nothing survives the process. Counts
/// `save()` calls so callers can assert on flush behavior.
#[derive(Debug, Default)]
pub struct MemorySaveProvider {
    values: HashMap<String, f32>,
    save_calls: u32,
}

impl MemorySaveProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save()` has been called.
    pub fn save_calls(&self) -> u32 {
        self.save_calls
    }
}

impl SaveProvider for MemorySaveProvider {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_float(&self, key: &str, default_value: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default_value)
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
    }

    fn save(&mut self) {
        self.save_calls += 1;
    }
}
