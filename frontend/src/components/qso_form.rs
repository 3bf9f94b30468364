//! The contact entry form.
//!
//! Field values live in a [`FormState`]; whenever the parse or lookup
//! source changes, the form is re-seeded from scratch with
//! defaults -> parse -> lookup (last writer wins). Machine-filled
//! fields carry an amber highlight until the operator edits them.

use chrono::Utc;
use hamlog_shared::bands::{is_known_band, is_known_mode};
use hamlog_shared::merge::{QsoDraft, merge_sources};
use hamlog_shared::{BANDS, MODES, PartialQso, QsoCreate, QsoField};
use leptos::prelude::*;

mod form_state;

use form_state::FormState;

/// Input classes, amber-tinted while the value is machine-supplied.
fn seeded_input_class(external: Signal<bool>) -> impl Fn() -> &'static str {
    move || {
        if external.get() {
            "input input-bordered w-full border-warning bg-warning/10"
        } else {
            "input input-bordered w-full"
        }
    }
}

fn seeded_select_class(external: Signal<bool>) -> impl Fn() -> &'static str {
    move || {
        if external.get() {
            "select select-bordered w-full border-warning bg-warning/10"
        } else {
            "select select-bordered w-full"
        }
    }
}

#[component]
fn FieldLabel(
    #[prop(into)] for_id: String,
    #[prop(into)] text: String,
    #[prop(optional)] required: bool,
    #[prop(into)] external: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="label" for=for_id>
            <span class="label-text">
                {text}
                {required.then(|| view! { <span class="text-error">" *"</span> })}
            </span>
            <Show when=move || external.get()>
                <span class="badge badge-warning badge-sm">"AI"</span>
            </Show>
        </label>
    }
}

#[component]
pub fn QsoForm(
    #[prop(into)] parsed: Signal<Option<PartialQso>>,
    #[prop(into)] lookup: Signal<Option<PartialQso>>,
    #[prop(into)] on_save: Callback<QsoCreate>,
    #[prop(into)] on_call_blur: Callback<String>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let form = FormState::new();
    let call_input = NodeRef::<leptos::html::Input>::new();

    let ext_call = form.external_signal(QsoField::Call);
    let ext_date = form.external_signal(QsoField::QsoDate);
    let ext_time = form.external_signal(QsoField::TimeOn);
    let ext_band = form.external_signal(QsoField::Band);
    let ext_freq = form.external_signal(QsoField::Freq);
    let ext_mode = form.external_signal(QsoField::Mode);
    let ext_rst_sent = form.external_signal(QsoField::RstSent);
    let ext_rst_rcvd = form.external_signal(QsoField::RstRcvd);
    let ext_name = form.external_signal(QsoField::Name);
    let ext_qth = form.external_signal(QsoField::Qth);
    let ext_grid = form.external_signal(QsoField::Grid);
    let ext_dxcc = form.external_signal(QsoField::Dxcc);
    let ext_notes = form.external_signal(QsoField::Notes);

    // Re-seed the whole form whenever a source arrives. This also runs
    // once on mount and fills in the session defaults.
    Effect::new(move |_| {
        let parsed_fields = parsed.get();
        let lookup_fields = lookup.get();
        let now = Utc::now().naive_utc();
        let defaults = QsoDraft::defaults(now.date(), now.time());

        let mut sources: Vec<&PartialQso> = Vec::new();
        if let Some(fields) = parsed_fields.as_ref() {
            sources.push(fields);
        }
        if let Some(fields) = lookup_fields.as_ref() {
            sources.push(fields);
        }
        form.apply(merge_sources(defaults, &sources));
    });

    Effect::new(move |_| {
        if let Some(input) = call_input.get() {
            let _ = input.focus();
        }
    });

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        if let Some(payload) = form.draft().to_create() {
            on_save.run(payload);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.ctrl_key() && ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let on_blur_call = move |_| {
        let callsign = form.call.get().trim().to_string();
        if !callsign.is_empty() {
            on_call_blur.run(callsign);
        }
    };

    view! {
        <form on:submit=on_submit on:keydown=on_keydown class="space-y-4">
            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="grid grid-cols-2 gap-4">
                <div class="form-control col-span-2">
                    <FieldLabel for_id="call" text="Callsign" required=true external=ext_call />
                    <input
                        id="call"
                        type="text"
                        placeholder="W1AW"
                        node_ref=call_input
                        class=seeded_input_class(ext_call)
                        prop:value=form.call
                        on:input=move |ev| {
                            form.call.set(event_target_value(&ev).to_uppercase());
                            form.mark_touched(QsoField::Call);
                        }
                        on:blur=on_blur_call
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="qso_date" text="Date (UTC)" external=ext_date />
                    <input
                        id="qso_date"
                        type="date"
                        class=seeded_input_class(ext_date)
                        prop:value=form.qso_date
                        on:input=move |ev| {
                            form.qso_date.set(event_target_value(&ev));
                            form.mark_touched(QsoField::QsoDate);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="time_on" text="Time (UTC)" external=ext_time />
                    <input
                        id="time_on"
                        type="time"
                        class=seeded_input_class(ext_time)
                        prop:value=form.time_on
                        on:input=move |ev| {
                            form.time_on.set(event_target_value(&ev));
                            form.mark_touched(QsoField::TimeOn);
                        }
                    />
                </div>
            </div>

            <div class="grid grid-cols-3 gap-4">
                <div class="form-control">
                    <FieldLabel for_id="band" text="Band" external=ext_band />
                    <select
                        id="band"
                        class=seeded_select_class(ext_band)
                        on:change=move |ev| {
                            form.band.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Band);
                        }
                    >
                        <option value="" selected=move || form.band.get().is_empty()>
                            "— select —"
                        </option>
                        // A parse can yield a band outside the fixed list;
                        // keep it selectable instead of silently dropping it.
                        {move || {
                            let current = form.band.get();
                            let unknown = !current.is_empty() && !is_known_band(&current);
                            unknown.then(move || view! {
                                <option value=current.clone() selected=true>{current.clone()}</option>
                            })
                        }}
                        {BANDS
                            .iter()
                            .map(|band| {
                                let value = *band;
                                view! {
                                    <option value=value selected=move || form.band.get() == value>
                                        {value}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-control">
                    <FieldLabel for_id="freq" text="Freq (MHz)" external=ext_freq />
                    <input
                        id="freq"
                        type="number"
                        step="0.001"
                        min="0"
                        max="450000"
                        placeholder="14.205"
                        class=seeded_input_class(ext_freq)
                        prop:value=form.freq
                        on:input=move |ev| {
                            form.freq.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Freq);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="mode" text="Mode" external=ext_mode />
                    <select
                        id="mode"
                        class=seeded_select_class(ext_mode)
                        on:change=move |ev| {
                            form.mode.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Mode);
                        }
                    >
                        <option value="" selected=move || form.mode.get().is_empty()>
                            "— select —"
                        </option>
                        {move || {
                            let current = form.mode.get();
                            let unknown = !current.is_empty() && !is_known_mode(&current);
                            unknown.then(move || view! {
                                <option value=current.clone() selected=true>{current.clone()}</option>
                            })
                        }}
                        {MODES
                            .iter()
                            .map(|mode| {
                                let value = *mode;
                                view! {
                                    <option value=value selected=move || form.mode.get() == value>
                                        {value}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <FieldLabel for_id="rst_sent" text="RST Sent" external=ext_rst_sent />
                    <input
                        id="rst_sent"
                        type="text"
                        maxlength="10"
                        placeholder="59"
                        class=seeded_input_class(ext_rst_sent)
                        prop:value=form.rst_sent
                        on:input=move |ev| {
                            form.rst_sent.set(event_target_value(&ev));
                            form.mark_touched(QsoField::RstSent);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="rst_rcvd" text="RST Rcvd" external=ext_rst_rcvd />
                    <input
                        id="rst_rcvd"
                        type="text"
                        maxlength="10"
                        placeholder="59"
                        class=seeded_input_class(ext_rst_rcvd)
                        prop:value=form.rst_rcvd
                        on:input=move |ev| {
                            form.rst_rcvd.set(event_target_value(&ev));
                            form.mark_touched(QsoField::RstRcvd);
                        }
                    />
                </div>
            </div>

            <div class="divider text-base-content/50 text-xs uppercase tracking-widest">
                "Contact Info (optional)"
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <FieldLabel for_id="op_name" text="Name" external=ext_name />
                    <input
                        id="op_name"
                        type="text"
                        placeholder="John"
                        class=seeded_input_class(ext_name)
                        prop:value=form.name
                        on:input=move |ev| {
                            form.name.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Name);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="qth" text="QTH" external=ext_qth />
                    <input
                        id="qth"
                        type="text"
                        placeholder="Springfield, IL"
                        class=seeded_input_class(ext_qth)
                        prop:value=form.qth
                        on:input=move |ev| {
                            form.qth.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Qth);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="grid" text="Grid" external=ext_grid />
                    <input
                        id="grid"
                        type="text"
                        maxlength="8"
                        placeholder="FN42"
                        class=seeded_input_class(ext_grid)
                        prop:value=form.grid
                        on:input=move |ev| {
                            form.grid.set(event_target_value(&ev).to_uppercase());
                            form.mark_touched(QsoField::Grid);
                        }
                    />
                </div>
                <div class="form-control">
                    <FieldLabel for_id="dxcc" text="DXCC Entity" external=ext_dxcc />
                    <input
                        id="dxcc"
                        type="text"
                        placeholder="United States"
                        class=seeded_input_class(ext_dxcc)
                        prop:value=form.dxcc
                        on:input=move |ev| {
                            form.dxcc.set(event_target_value(&ev));
                            form.mark_touched(QsoField::Dxcc);
                        }
                    />
                </div>
            </div>

            <div class="form-control">
                <FieldLabel for_id="notes" text="Notes" external=ext_notes />
                <textarea
                    id="notes"
                    rows="2"
                    placeholder="Excellent conditions, rag-chewed for 20 min..."
                    class=move || {
                        if ext_notes.get() {
                            "textarea textarea-bordered w-full border-warning bg-warning/10"
                        } else {
                            "textarea textarea-bordered w-full"
                        }
                    }
                    prop:value=form.notes
                    on:input=move |ev| {
                        form.notes.set(event_target_value(&ev));
                        form.mark_touched(QsoField::Notes);
                    }
                ></textarea>
            </div>

            <div class="flex items-center justify-end gap-4 pt-2">
                <span class="text-sm text-base-content/50">"Ctrl+Enter to save"</span>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || saving.get() || form.call.get().trim().is_empty()
                >
                    {move || {
                        if saving.get() {
                            view! { <span class="loading loading-spinner"></span> "Saving..." }
                                .into_any()
                        } else {
                            "Log QSO".into_any()
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
