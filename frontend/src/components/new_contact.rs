//! The new-contact page.
//!
//! Wires three collaborators around the entry form: the free-text
//! parser (explicit Parse action), the callsign directory (fired when
//! the callsign field blurs with a new value), and the save flow with
//! its brief success flash before returning to the log.

use std::time::Duration;

use chrono::Utc;
use hamlog_shared::confidence::{ConfidenceBand, filled_segments};
use hamlog_shared::date::utc_stamp;
use hamlog_shared::{LOOKUP_SOURCE_NONE, PartialQso, QsoCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::router::use_router;

use super::icons::Sparkles;
use super::qso_form::QsoForm;

/// How long the success flash stays up before returning to the log.
const REDIRECT_DELAY_MS: u64 = 1_200;

#[component]
pub fn NewContactPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (parse_text, set_parse_text) = signal(String::new());
    let (parsing, set_parsing) = signal(false);
    let (parse_error, set_parse_error) = signal(Option::<String>::None);
    let (parsed, set_parsed) = signal(Option::<PartialQso>::None);
    let (confidence, set_confidence) = signal(Option::<f64>::None);

    let (lookup, set_lookup) = signal(Option::<PartialQso>::None);
    // The one callsign we already asked the directory about. Not a
    // cache; it only suppresses the lookup when focus bounces without
    // the value changing.
    let (last_lookup, set_last_lookup) = signal(Option::<String>::None);

    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal(Option::<String>::None);
    let (saved_call, set_saved_call) = signal(Option::<String>::None);

    let run_parse = {
        let api = api.clone();
        move || {
            let text = parse_text.get().trim().to_string();
            if text.is_empty() || parsing.get() {
                return;
            }
            set_parsing.set(true);
            set_parse_error.set(None);
            let api = api.clone();
            spawn_local(async move {
                match api.parse_text(text).await {
                    Ok(result) => {
                        set_confidence.try_set(Some(result.confidence));
                        // Publishing a new parse re-seeds the form below.
                        set_parsed.try_set(Some(result.parsed));
                    }
                    Err(err) => {
                        set_parse_error.try_set(Some(format!("Parse failed: {err}")));
                    }
                }
                set_parsing.try_set(false);
            });
        }
    };

    let on_parse_click = {
        let run_parse = run_parse.clone();
        move |_| run_parse()
    };

    let on_parse_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() && ev.key() == "Enter" {
            ev.prevent_default();
            run_parse();
        }
    };

    let on_call_blur = {
        let api = api.clone();
        move |callsign: String| {
            let callsign = callsign.trim().to_uppercase();
            if callsign.is_empty()
                || last_lookup.get_untracked().as_deref() == Some(callsign.as_str())
            {
                return;
            }
            set_last_lookup.set(Some(callsign.clone()));
            let api = api.clone();
            spawn_local(async move {
                match api.lookup_callsign(&callsign).await {
                    Ok(result) if result.source != LOOKUP_SOURCE_NONE => {
                        set_lookup.try_set(Some(result.into_partial()));
                    }
                    // No match or a failed lookup never touches the form.
                    _ => {}
                }
            });
        }
    };

    let on_save = {
        let api = api.clone();
        move |payload: QsoCreate| {
            set_saving.set(true);
            set_save_error.set(None);
            let api = api.clone();
            spawn_local(async move {
                match api.create_qso(payload).await {
                    Ok(record) => {
                        set_saved_call.try_set(Some(record.call));
                        // Brief success flash, then back to the log.
                        set_timeout(
                            move || router.navigate("/log"),
                            Duration::from_millis(REDIRECT_DELAY_MS),
                        );
                    }
                    Err(err) => {
                        set_save_error.try_set(Some(format!("Failed to save the QSO: {err}")));
                    }
                }
                set_saving.try_set(false);
            });
        }
    };

    let confidence_meter = move || {
        confidence.get().map(|value| {
            let filled = filled_segments(value);
            let color = match ConfidenceBand::of(value) {
                ConfidenceBand::High => "bg-success",
                ConfidenceBand::Medium => "bg-warning",
                ConfidenceBand::Low => "bg-error",
            };
            let segments = (0..10)
                .map(|segment| {
                    let class = if segment < filled {
                        format!("h-2 flex-1 rounded-sm {color}")
                    } else {
                        "h-2 flex-1 rounded-sm bg-base-300".to_string()
                    };
                    view! { <div class=class></div> }
                })
                .collect_view();
            view! {
                <div class="flex items-center gap-3 mt-2">
                    <span class="text-xs text-base-content/50 whitespace-nowrap">
                        "Parser confidence"
                    </span>
                    <div class="flex gap-1 flex-1">{segments}</div>
                    <span class="font-mono text-xs">{format!("{:.0}%", value * 100.0)}</span>
                </div>
            }
        })
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8 space-y-4">
            <div class="flex items-baseline justify-between border-b border-base-300 pb-3">
                <h1 class="text-2xl font-bold">"Log New Contact"</h1>
                <span class="font-mono text-xs text-base-content/50">
                    {utc_stamp(Utc::now().naive_utc())}
                </span>
            </div>

            <Show when=move || saved_call.get().is_some()>
                <div role="alert" class="alert alert-success text-sm py-2">
                    <span>
                        {move || {
                            format!(
                                "QSO with {} logged. Returning to log...",
                                saved_call.get().unwrap_or_default(),
                            )
                        }}
                    </span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-base gap-2">
                        <Sparkles attr:class="h-5 w-5 text-warning" />
                        "Describe the contact"
                    </h2>
                    <p class="text-sm text-base-content/70">
                        "Type it the way you would say it; the parser seeds the form below."
                    </p>
                    <textarea
                        class="textarea textarea-bordered w-full"
                        rows="3"
                        placeholder="Worked W1AW on 20m SSB at 14:30 UTC, he was 59 in Connecticut..."
                        prop:value=parse_text
                        on:input=move |ev| set_parse_text.set(event_target_value(&ev))
                        on:keydown=on_parse_keydown
                    ></textarea>

                    <Show when=move || parse_error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || parse_error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    {confidence_meter}

                    <div class="card-actions justify-end">
                        <button
                            class="btn btn-warning btn-sm gap-2"
                            disabled=move || {
                                parsing.get() || parse_text.with(|text| text.trim().is_empty())
                            }
                            on:click=on_parse_click
                        >
                            {move || {
                                if parsing.get() {
                                    view! {
                                        <span class="loading loading-spinner loading-xs"></span>
                                        "Parsing..."
                                    }
                                        .into_any()
                                } else {
                                    view! { <Sparkles attr:class="h-4 w-4" /> "Parse" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <QsoForm
                        parsed=parsed
                        lookup=lookup
                        on_save=on_save
                        on_call_blur=on_call_blur
                        saving=saving
                        error=save_error
                    />
                </div>
            </div>
        </div>
    }
}
