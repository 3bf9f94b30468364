//! Top bar for the authenticated pages: brand, section links, a live
//! UTC clock (log times are always UTC), and the sign-out button.

use chrono::Utc;
use hamlog_shared::date::utc_clock;
use leptos::prelude::*;

use crate::session::use_session;
use crate::web::Interval;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

use super::icons::{LogOut, Plus, Radio};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let current = router.current_route();

    // Tick once a second while the bar is mounted; dropping the
    // stored handle on unmount clears the interval
    let (now, set_now) = signal(Utc::now().naive_utc());
    let _clock = StoredValue::new_local(Interval::new(1_000, move || {
        set_now.try_set(Utc::now().naive_utc());
    }));

    let link_class = move |route: AppRoute| {
        if current.get() == route {
            "btn btn-sm btn-primary gap-1"
        } else {
            "btn btn-sm btn-ghost gap-1"
        }
    };

    let on_logout = move |_| {
        // No manual navigation: the router watches the auth signal
        // and moves us to the login page
        session.clear();
    };

    view! {
        <div class="navbar bg-base-100 border-b border-base-300 px-4">
            <div class="navbar-start">
                <button
                    class="btn btn-ghost text-lg gap-2"
                    on:click=move |_| router.navigate("/log")
                >
                    <Radio attr:class="h-6 w-6 text-primary" />
                    "HamLog"
                </button>
            </div>
            <div class="navbar-center gap-1">
                <button
                    class=move || link_class(AppRoute::Log)
                    on:click=move |_| router.navigate("/log")
                >
                    "Log"
                </button>
                <button
                    class=move || link_class(AppRoute::NewContact)
                    on:click=move |_| router.navigate("/log/new")
                >
                    <Plus attr:class="h-4 w-4" />
                    "New Contact"
                </button>
            </div>
            <div class="navbar-end gap-3">
                <span class="font-mono text-sm opacity-70">
                    {move || utc_clock(now.get())}
                </span>
                <span class="badge badge-success badge-outline gap-1.5">
                    <span class="h-2 w-2 rounded-full bg-success animate-pulse"></span>
                    "QRV"
                </span>
                <button class="btn btn-outline btn-error btn-sm gap-1" on:click=on_logout>
                    <LogOut attr:class="h-4 w-4" />
                    "De-Auth"
                </button>
            </div>
        </div>
    }
}
