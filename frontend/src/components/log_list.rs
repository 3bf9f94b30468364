//! The contact log page.
//!
//! Fetching is server-driven: the initial mount and every (debounced)
//! search edit issue a fresh list request, tagged with a sequence
//! ticket so a slow response cannot overwrite a newer one. Sorting is
//! client-side over the loaded page and never mutates the fetched
//! order.

use chrono::Utc;
use hamlog_shared::date::{export_filename, ui_date, ui_time};
use hamlog_shared::sort::{SortColumn, SortDirection, next_sort_state, sort_records};
use hamlog_shared::{QsoRecord, SEARCH_DEBOUNCE_MS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::api::use_api;
use crate::sequence::RequestSequence;
use crate::web::router::Link;
use crate::web::{Debouncer, save_file};

use super::icons::{Download, Plus, Search, Trash2};

fn sort_indicator(state: Option<(SortColumn, SortDirection)>, column: SortColumn) -> &'static str {
    match state {
        Some((active, SortDirection::Ascending)) if active == column => " ▲",
        Some((active, SortDirection::Descending)) if active == column => " ▼",
        _ => "",
    }
}

fn rst_pair(sent: Option<&str>, rcvd: Option<&str>) -> String {
    if sent.is_none() && rcvd.is_none() {
        return "—".to_string();
    }
    format!("{}/{}", sent.unwrap_or("?"), rcvd.unwrap_or("?"))
}

fn cell_text(value: Option<String>) -> String {
    value.unwrap_or_else(|| "—".to_string())
}

#[component]
fn SortableHeader(
    column: SortColumn,
    #[prop(into)] label: String,
    #[prop(into)] sort_state: Signal<Option<(SortColumn, SortDirection)>>,
    #[prop(into)] on_sort: Callback<SortColumn>,
) -> impl IntoView {
    view! {
        <th
            class="cursor-pointer select-none hover:bg-base-200"
            on:click=move |_| on_sort.run(column)
        >
            {label}
            {move || sort_indicator(sort_state.get(), column)}
        </th>
    }
}

#[component]
pub fn LogListPage() -> impl IntoView {
    let api = use_api();

    let (items, set_items) = signal(Vec::<QsoRecord>::new());
    let (total, set_total) = signal(0u64);
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (sort_state, set_sort_state) = signal(Option::<(SortColumn, SortDirection)>::None);
    let (armed_delete, set_armed_delete) = signal(Option::<Uuid>::None);
    let (exporting, set_exporting) = signal(false);

    let sequence = RequestSequence::new();
    let debouncer = StoredValue::new_local(Debouncer::new());

    let fetch_qsos: Callback<String> = Callback::new({
        let api = api.clone();
        let sequence = sequence.clone();
        move |filter: String| {
            let ticket = sequence.next();
            set_loading.set(true);
            set_error_msg.set(None);
            let api = api.clone();
            let sequence = sequence.clone();
            spawn_local(async move {
                let trimmed = filter.trim();
                let call = (!trimmed.is_empty()).then(|| trimmed.to_string());
                match api.list_qsos(call).await {
                    Ok(page) if sequence.is_current(ticket) => {
                        set_items.try_set(page.items);
                        set_total.try_set(page.total);
                        set_loading.try_set(false);
                    }
                    Err(err) if sequence.is_current(ticket) => {
                        set_error_msg.try_set(Some(format!("Failed to load the QSO log: {err}")));
                        set_loading.try_set(false);
                    }
                    // A newer fetch has been issued since; drop this one.
                    _ => {}
                }
            });
        }
    });

    Effect::new(move |_| {
        fetch_qsos.run(String::new());
    });

    on_cleanup({
        let sequence = sequence.clone();
        move || sequence.invalidate()
    });

    let on_search_input = move |ev| {
        let value = event_target_value(&ev).to_uppercase();
        set_search.set(value.clone());
        debouncer.update_value(|debouncer| {
            debouncer.debounce(SEARCH_DEBOUNCE_MS, move || fetch_qsos.run(value));
        });
    };

    let confirm_delete: Callback<Uuid> = Callback::new({
        let api = api.clone();
        move |id: Uuid| {
            let api = api.clone();
            spawn_local(async move {
                match api.delete_qso(id).await {
                    Ok(()) => {
                        set_items.try_update(|items| items.retain(|qso| qso.id != id));
                        set_total.try_update(|total| *total = total.saturating_sub(1));
                    }
                    Err(err) => {
                        set_error_msg.try_set(Some(format!("Failed to delete the QSO: {err}")));
                    }
                }
                set_armed_delete.try_set(None);
            });
        }
    });

    let on_export = {
        let api = api.clone();
        move |_| {
            if exporting.get() || items.with(|items| items.is_empty()) {
                return;
            }
            set_exporting.set(true);
            set_error_msg.set(None);
            let api = api.clone();
            spawn_local(async move {
                match api.export_adif().await {
                    Ok(bytes) => {
                        let filename = export_filename(Utc::now().date_naive());
                        if let Err(err) = save_file(&bytes, &filename, "application/octet-stream") {
                            set_error_msg
                                .try_set(Some(format!("Failed to save the export: {err}")));
                        }
                    }
                    Err(err) => {
                        set_error_msg.try_set(Some(format!("Failed to export the log: {err}")));
                    }
                }
                set_exporting.try_set(false);
            });
        }
    };

    // Sorting works on a copy; the fetched order stays untouched so
    // clearing the sort restores it.
    let visible = Memo::new(move |_| {
        let records = items.get();
        match sort_state.get() {
            Some((column, direction)) => sort_records(&records, column, direction),
            None => records,
        }
    });

    let on_sort = move |column: SortColumn| {
        set_sort_state.update(|state| *state = Some(next_sort_state(*state, column)));
    };

    let counter = move || {
        if loading.get() {
            "Loading...".to_string()
        } else {
            let count = total.get();
            format!("{} QSO{}", count, if count == 1 { "" } else { "s" })
        }
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-4">
            <div class="flex flex-wrap items-center gap-2">
                <h1 class="text-2xl font-bold flex-1">"Contact Log"</h1>
                <button
                    class="btn btn-outline btn-sm gap-2"
                    disabled=move || exporting.get() || items.with(|items| items.is_empty())
                    on:click=on_export
                >
                    {move || {
                        if exporting.get() {
                            view! {
                                <span class="loading loading-spinner loading-xs"></span>
                                "Exporting..."
                            }
                                .into_any()
                        } else {
                            view! { <Download attr:class="h-4 w-4" /> "Export ADIF" }.into_any()
                        }
                    }}
                </button>
                <Link to="/log/new" class="btn btn-primary btn-sm gap-2">
                    <Plus attr:class="h-4 w-4" />
                    "New Contact"
                </Link>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="flex items-center gap-3">
                <label class="input input-bordered input-sm flex items-center gap-2 w-64">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search callsign..."
                        prop:value=search
                        on:input=on_search_input
                    />
                </label>
                <span class="ml-auto font-mono text-sm text-base-content/50">{counter}</span>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <SortableHeader
                                        column=SortColumn::Date
                                        label="Date"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <SortableHeader
                                        column=SortColumn::Time
                                        label="Time (UTC)"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <SortableHeader
                                        column=SortColumn::Call
                                        label="Call"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <SortableHeader
                                        column=SortColumn::Band
                                        label="Band"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <SortableHeader
                                        column=SortColumn::Mode
                                        label="Mode"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <th>"RST S/R"</th>
                                    <SortableHeader
                                        column=SortColumn::Name
                                        label="Name"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <SortableHeader
                                        column=SortColumn::Qth
                                        label="QTH"
                                        sort_state=sort_state
                                        on_sort=on_sort
                                    />
                                    <th>"Notes"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get()>
                                    <tr>
                                        <td colspan="10" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading log..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get() && visible.with(|rows| rows.is_empty())>
                                    <tr>
                                        <td colspan="10" class="text-center py-12 text-base-content/50">
                                            "No contacts logged yet. "
                                            <Link to="/log/new" class="link link-primary">
                                                "Log your first QSO →"
                                            </Link>
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get()>
                                    <For
                                        each=move || visible.get()
                                        key=|qso| qso.id
                                        children=move |qso: QsoRecord| {
                                            let id = qso.id;
                                            let armed = move || armed_delete.get() == Some(id);
                                            let rst = rst_pair(
                                                qso.rst_sent.as_deref(),
                                                qso.rst_rcvd.as_deref(),
                                            );
                                            view! {
                                                <tr class="hover">
                                                    <td class="font-mono text-sm">
                                                        {cell_text(qso.qso_date.map(ui_date))}
                                                    </td>
                                                    <td class="font-mono text-sm">
                                                        {cell_text(qso.time_on.map(ui_time))}
                                                    </td>
                                                    <td class="font-mono text-sm font-bold text-primary">
                                                        {qso.call}
                                                    </td>
                                                    <td>{cell_text(qso.band)}</td>
                                                    <td>{cell_text(qso.mode)}</td>
                                                    <td class="font-mono text-sm">{rst}</td>
                                                    <td>{cell_text(qso.name)}</td>
                                                    <td>{cell_text(qso.qth)}</td>
                                                    <td class="max-w-[200px] truncate text-base-content/70">
                                                        {qso.notes.unwrap_or_default()}
                                                    </td>
                                                    <td class="text-right">
                                                        <Show
                                                            when=armed
                                                            fallback=move || {
                                                                view! {
                                                                    <button
                                                                        class="btn btn-ghost btn-xs text-base-content/40 hover:text-error"
                                                                        on:click=move |_| set_armed_delete.set(Some(id))
                                                                    >
                                                                        <Trash2 attr:class="h-4 w-4" />
                                                                    </button>
                                                                }
                                                            }
                                                        >
                                                            <span class="inline-flex gap-1">
                                                                <button
                                                                    class="btn btn-error btn-xs"
                                                                    on:click=move |_| confirm_delete.run(id)
                                                                >
                                                                    "Confirm"
                                                                </button>
                                                                <button
                                                                    class="btn btn-ghost btn-xs"
                                                                    on:click=move |_| set_armed_delete.set(None)
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            </span>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </Show>
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
