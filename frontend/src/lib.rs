//! HamLog front-end application.
//!
//! Context-driven layering, kept deliberately flat:
//! - `web::route`: the route table (domain model)
//! - `web::router`: the navigation engine and guards
//! - `session`: bearer-token session state
//! - `api`: typed REST client for the log server
//! - `components`: UI layer

mod api;
mod components {
    mod icons;
    pub mod log_list;
    pub mod login;
    pub mod navbar;
    pub mod new_contact;
    mod qso_form;
    pub mod register;
}
mod config;
mod sequence;
mod serde_helper;
mod session;

use crate::api::HamlogApi;
use crate::components::log_list::LogListPage;
use crate::components::login::LoginPage;
use crate::components::navbar::NavBar;
use crate::components::new_contact::NewContactPage;
use crate::components::register::RegisterPage;
use crate::session::SessionContext;

use leptos::prelude::*;

// Native Web API wrappers. Thin layers over the browser APIs instead
// of the gloo-* crates, to keep the WASM binary small.
pub(crate) mod web {
    mod download;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use download::save_file;
    pub use http::{HttpClient, HttpRequestBuilder, HttpResponse};
    pub use storage::LocalStorage;
    pub use timer::{Debouncer, Interval};
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// Maps the current route to its view. Authenticated pages share the
/// navbar shell; the auth pages render bare.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Log => view! {
            <div class="min-h-screen bg-base-200">
                <NavBar />
                <LogListPage />
            </div>
        }
        .into_any(),
        AppRoute::NewContact => view! {
            <div class="min-h-screen bg-base-200">
                <NavBar />
                <NewContactPage />
            </div>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Frequency not found."</p>
                    <Link to="/log" class="btn btn-primary mt-6">"Back to the log"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session first; everything else hangs off it.
    let session = SessionContext::new();
    provide_context(session);

    let api = HamlogApi::new(config::api_base(), session);
    provide_context(api);

    // The router only ever sees this signal, never the session itself.
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
