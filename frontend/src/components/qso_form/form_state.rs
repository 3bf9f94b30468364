//! Entry-form state.
//!
//! One `RwSignal` per field so inputs bind directly, bundled in a
//! `Copy` struct that passes freely between closures. Alongside the
//! texts sits the provenance set: which fields currently hold a
//! machine-supplied value (parser or lookup). Editing a field hands
//! it back to the operator and drops it from the set.

use std::collections::HashSet;

use hamlog_shared::QsoField;
use hamlog_shared::merge::{QsoDraft, SeededDraft};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FormState {
    pub call: RwSignal<String>,
    pub qso_date: RwSignal<String>,
    pub time_on: RwSignal<String>,
    pub band: RwSignal<String>,
    pub freq: RwSignal<String>,
    pub mode: RwSignal<String>,
    pub rst_sent: RwSignal<String>,
    pub rst_rcvd: RwSignal<String>,
    pub name: RwSignal<String>,
    pub qth: RwSignal<String>,
    pub grid: RwSignal<String>,
    pub dxcc: RwSignal<String>,
    pub notes: RwSignal<String>,
    /// Fields whose current value came from a parse or lookup.
    pub external: RwSignal<HashSet<QsoField>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            call: RwSignal::new(String::new()),
            qso_date: RwSignal::new(String::new()),
            time_on: RwSignal::new(String::new()),
            band: RwSignal::new(String::new()),
            freq: RwSignal::new(String::new()),
            mode: RwSignal::new(String::new()),
            rst_sent: RwSignal::new(String::new()),
            rst_rcvd: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            qth: RwSignal::new(String::new()),
            grid: RwSignal::new(String::new()),
            dxcc: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            external: RwSignal::new(HashSet::new()),
        }
    }

    /// Replaces the whole form with a freshly merged draft. Any edits
    /// the operator made are gone; the callers re-seed deliberately.
    pub fn apply(&self, seeded: SeededDraft) {
        let SeededDraft { values, external } = seeded;
        self.call.set(values.call);
        self.qso_date.set(values.qso_date);
        self.time_on.set(values.time_on);
        self.band.set(values.band);
        self.freq.set(values.freq);
        self.mode.set(values.mode);
        self.rst_sent.set(values.rst_sent);
        self.rst_rcvd.set(values.rst_rcvd);
        self.name.set(values.name);
        self.qth.set(values.qth);
        self.grid.set(values.grid);
        self.dxcc.set(values.dxcc);
        self.notes.set(values.notes);
        self.external.set(external);
    }

    /// Snapshot of the current field texts.
    pub fn draft(&self) -> QsoDraft {
        QsoDraft {
            call: self.call.get(),
            qso_date: self.qso_date.get(),
            time_on: self.time_on.get(),
            band: self.band.get(),
            freq: self.freq.get(),
            mode: self.mode.get(),
            rst_sent: self.rst_sent.get(),
            rst_rcvd: self.rst_rcvd.get(),
            name: self.name.get(),
            qth: self.qth.get(),
            grid: self.grid.get(),
            dxcc: self.dxcc.get(),
            notes: self.notes.get(),
        }
    }

    /// Reactive "is this field machine-filled" flag for one field.
    pub fn external_signal(&self, field: QsoField) -> Signal<bool> {
        let external = self.external;
        Signal::derive(move || external.with(|fields| fields.contains(&field)))
    }

    /// The operator edited the field; it is theirs now.
    pub fn mark_touched(&self, field: QsoField) {
        self.external.update(|fields| {
            fields.remove(&field);
        });
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
