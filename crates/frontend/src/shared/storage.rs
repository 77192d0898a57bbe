//! Client-local preference store (view mode per page).

use web_sys::window;

/// String key/value store that survives page reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads and writes are silently skipped when storage
/// is unavailable (private mode, sandboxed frames).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist preference {}", key);
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
