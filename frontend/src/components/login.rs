//! Sign-in page. On success it only establishes the session; the
//! router notices the auth flip and swaps in the log page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::session::use_session;
use crate::web::router::Link;

use super::icons::Radio;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(token) => {
                    // The router watches the auth signal and moves us
                    // to the log once the session exists
                    session.establish(token.access_token);
                }
                Err(e) => {
                    set_error_msg.try_set(Some(e.to_string()));
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Radio attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"HamLog"</h1>
                        <p class="text-base-content/70">"Sign in to your station log"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="op@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "No account yet? "
                            <Link to="/register" class="link link-primary">"Register"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
