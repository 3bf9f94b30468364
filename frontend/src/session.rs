//! Session state: the bearer token and nothing else.
//!
//! The token is mirrored to LocalStorage so a reload stays signed in.
//! Routing is decoupled: the router only sees the derived boolean
//! signal, and nothing in here ever navigates. Clearing the session
//! flips the signal and the router takes it from there.

use crate::web::LocalStorage;
use leptos::prelude::*;

const STORAGE_TOKEN_KEY: &str = "hamlog_token";

/// Shared session handle. Copy, so every component and callback can
/// hold one.
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
}

impl SessionContext {
    /// Restores the session from LocalStorage, if one was left there.
    pub fn new() -> Self {
        let (token, set_token) = signal(LocalStorage::get(STORAGE_TOKEN_KEY));
        Self { token, set_token }
    }

    /// Auth signal for injection into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.get().is_some())
    }

    /// Current token for request headers. Untracked: API calls should
    /// not become reactive subscribers of the session.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Stores a fresh token after login.
    pub fn establish(&self, token: String) {
        LocalStorage::set(STORAGE_TOKEN_KEY, &token);
        self.set_token.set(Some(token));
    }

    /// Drops the session, on logout or when the server rejects the
    /// token. The router observes the flip and redirects.
    pub fn clear(&self) {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        self.set_token.set(None);
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
