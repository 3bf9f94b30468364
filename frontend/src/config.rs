//! Where the API lives.
//!
//! Resolution order: a LocalStorage override (handy when pointing a
//! deployed UI at a staging server), then a compile-time value, then
//! the local dev default.

use crate::web::LocalStorage;

const STORAGE_API_BASE_KEY: &str = "hamlog_api_base";
const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub fn api_base() -> String {
    if let Some(url) = LocalStorage::get(STORAGE_API_BASE_KEY) {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    option_env!("HAMLOG_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
