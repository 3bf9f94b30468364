//! Router service - the navigation engine.
//!
//! Wraps the History API so every `window.history` touch lives in this
//! module. Navigation follows a fixed pipeline: request -> guard ->
//! history update -> route signal update. The auth state arrives as an
//! injected signal, keeping the router decoupled from the session
//! module.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects, so the guarded URL never enters the history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router state handle. Copy, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected auth signal; the router never asks the session module
    /// directly.
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // Parse the initial route from the address bar. Guards for the
        // initial load run in the auth-redirect effect below.
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, applying the route guards.
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // Guard 1: the target needs a session and there is none
        if target_route.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            let redirect = AppRoute::auth_failure_redirect();
            if use_push {
                push_history_state(redirect.to_path());
            } else {
                replace_history_state(redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // Guard 2: signed-in visitors skip the login and register pages
        if target_route.should_redirect_when_authenticated() && is_auth {
            web_sys::console::log_1(
                &"[Router] Already authenticated. Redirecting to the log.".into(),
            );
            let redirect = AppRoute::auth_success_redirect();
            if use_push {
                push_history_state(redirect.to_path());
            } else {
                replace_history_state(redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // Guards passed: record the entry and swap the page
        if use_push {
            push_history_state(target_route.to_path());
        } else {
            replace_history_state(target_route.to_path());
        }
        self.set_route.set(target_route);
    }

    /// Back/forward buttons re-enter through here; the same guards
    /// apply, but with `replaceState` so history stays consistent.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = AppRoute::from_path(&path);
            let is_auth = is_authenticated.get_untracked();

            if target_route.requires_auth() && !is_auth {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else if target_route.should_redirect_when_authenticated() && is_auth {
                let redirect = AppRoute::auth_success_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure so the listener stays alive for the app's
        // whole lifetime
        closure.forget();
    }

    /// Re-evaluates the guards whenever the auth state flips: logging
    /// in moves the visitor off the login page, an expired session
    /// moves them off guarded pages. Also runs once at startup, which
    /// covers the initial-load guard.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: signed in, redirecting to the log.".into(),
                    );
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &"[Router] Auth state changed: signed out, redirecting to login.".into(),
                );
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component. Mount once at the top of the app.
#[component]
pub fn Router(
    /// Auth state signal
    is_authenticated: Signal<bool>,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever view the matcher picks for the current route.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app anchor: renders a real `href` but routes through the
/// service on click, so guards run and the page never reloads.
#[component]
pub fn Link(
    /// Target path
    #[prop(into)]
    to: String,
    /// Anchor classes
    #[prop(optional, into)]
    class: String,
    /// Child content
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
