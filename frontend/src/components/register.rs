//! Account registration page. Validates locally (matching passwords,
//! minimum length), then hands off to the server and returns to the
//! login page after a short success pause.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::router::{Link, use_router};

use super::icons::Radio;

const MIN_PASSWORD_CHARS: usize = 8;
const REDIRECT_DELAY_MS: u64 = 1500;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (succeeded, set_succeeded) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if password_value != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }
        if password_value.chars().count() < MIN_PASSWORD_CHARS {
            set_error_msg.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.register(email_value, password_value).await {
                Ok(_) => {
                    set_succeeded.try_set(true);
                    set_timeout(
                        move || router.navigate("/login"),
                        Duration::from_millis(REDIRECT_DELAY_MS),
                    );
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
                        <h1 class="text-3xl font-bold">"Join HamLog"</h1>
                        <p class="text-base-content/70">"Create an account for your station"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || succeeded.get()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>"Account created. Taking you to the login page..."</span>
                            </div>
                        </Show>
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
                                placeholder="at least 8 characters"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                placeholder="repeat it"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || succeeded.get()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                } else {
                                    "Create Account".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "Already registered? "
                            <Link to="/login" class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
