//! Timer wrappers over the native `setInterval` / `setTimeout` APIs.
//!
//! Replaces `gloo-timers`. Every handle clears its timer on drop, so
//! owning a timer from a component scope is enough to stop it when
//! the component unmounts.

use wasm_bindgen::prelude::*;

/// Repeating timer around `setInterval`.
pub struct Interval {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// # Panics
    /// If the window object is missing or the timer cannot be set.
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("window object should exist");

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("setInterval failed");

        Self { handle, closure }
    }

    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One-shot timer around `setTimeout`. Dropping the handle before the
/// timer fires cancels it; clearing an already-fired id is a no-op.
pub struct Timeout {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// # Panics
    /// If the window object is missing or the timer cannot be set.
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let closure = Closure::once(callback);
        let window = web_sys::window().expect("window object should exist");

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("setTimeout failed");

        Self { handle, closure }
    }

    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Single-slot debouncer: scheduling a new callback cancels the one
/// still pending, so only the last call within the window runs.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debounce<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Replacing the slot drops (and thereby cancels) the old timer
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
