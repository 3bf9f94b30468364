//! LocalStorage access over `web_sys::Storage`.
//!
//! Replaces `gloo-storage`. Only strings are stored here (the session
//! token and the optional API base override), so the interface stays
//! deliberately tiny.

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Returns the stored value, or `None` when the key is missing or
    /// storage is unavailable (private browsing, disabled, ...).
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Stores a value. Returns whether the write went through.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Removes a key. Returns whether the delete went through.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
