//! Seeding the contact-entry form from several sources at once.
//!
//! A draft starts from session defaults (today's date, current UTC
//! time, favorite band and mode, 59/59 reports). On top of that the
//! parser result and then the callsign-lookup result are layered, with
//! later sources winning shared keys. The merge also records which
//! fields were driven by a source so the form can flag machine-filled
//! values until the operator touches them.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::date::{parse_ui_date, parse_ui_time, ui_date, ui_time};
use crate::{DEFAULT_BAND, DEFAULT_MODE, DEFAULT_RST, PartialQso, QsoCreate, QsoField};

#[cfg(test)]
mod tests;

/// The entry form's working copy: every field as editable text.
#[derive(Debug, Clone, PartialEq)]
pub struct QsoDraft {
    pub call: String,
    pub qso_date: String,
    pub time_on: String,
    pub band: String,
    pub freq: String,
    pub mode: String,
    pub rst_sent: String,
    pub rst_rcvd: String,
    pub name: String,
    pub qth: String,
    pub grid: String,
    pub dxcc: String,
    pub notes: String,
}

/// A draft plus the set of fields that came from a machine source
/// rather than from defaults or the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededDraft {
    pub values: QsoDraft,
    pub external: HashSet<QsoField>,
}

impl QsoDraft {
    /// Fresh draft for a new contact at the given UTC moment.
    pub fn defaults(today: NaiveDate, now: NaiveTime) -> Self {
        Self {
            call: String::new(),
            qso_date: ui_date(today),
            time_on: ui_time(now),
            band: DEFAULT_BAND.to_string(),
            freq: String::new(),
            mode: DEFAULT_MODE.to_string(),
            rst_sent: DEFAULT_RST.to_string(),
            rst_rcvd: DEFAULT_RST.to_string(),
            name: String::new(),
            qth: String::new(),
            grid: String::new(),
            dxcc: String::new(),
            notes: String::new(),
        }
    }

    pub fn get(&self, field: QsoField) -> &str {
        match field {
            QsoField::Call => &self.call,
            QsoField::QsoDate => &self.qso_date,
            QsoField::TimeOn => &self.time_on,
            QsoField::Band => &self.band,
            QsoField::Freq => &self.freq,
            QsoField::Mode => &self.mode,
            QsoField::RstSent => &self.rst_sent,
            QsoField::RstRcvd => &self.rst_rcvd,
            QsoField::Name => &self.name,
            QsoField::Qth => &self.qth,
            QsoField::Grid => &self.grid,
            QsoField::Dxcc => &self.dxcc,
            QsoField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: QsoField, value: String) {
        let slot = match field {
            QsoField::Call => &mut self.call,
            QsoField::QsoDate => &mut self.qso_date,
            QsoField::TimeOn => &mut self.time_on,
            QsoField::Band => &mut self.band,
            QsoField::Freq => &mut self.freq,
            QsoField::Mode => &mut self.mode,
            QsoField::RstSent => &mut self.rst_sent,
            QsoField::RstRcvd => &mut self.rst_rcvd,
            QsoField::Name => &mut self.name,
            QsoField::Qth => &mut self.qth,
            QsoField::Grid => &mut self.grid,
            QsoField::Dxcc => &mut self.dxcc,
            QsoField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// Converts the draft into a request payload.
    ///
    /// Returns `None` when the callsign is blank; everything else is
    /// best-effort. Values that fail to parse (frequency, date, time)
    /// are sent as unset rather than blocking the save. Callsign and
    /// grid are uppercased, all fields trimmed, blanks become `None`.
    pub fn to_create(&self) -> Option<QsoCreate> {
        let call = self.call.trim().to_uppercase();
        if call.is_empty() {
            return None;
        }
        Some(QsoCreate {
            call,
            qso_date: parse_ui_date(&self.qso_date),
            time_on: parse_ui_time(&self.time_on),
            band: non_blank(&self.band),
            freq: self.freq.trim().parse::<f64>().ok(),
            mode: non_blank(&self.mode),
            rst_sent: non_blank(&self.rst_sent),
            rst_rcvd: non_blank(&self.rst_rcvd),
            name: non_blank(&self.name),
            qth: non_blank(&self.qth),
            grid: non_blank(&self.grid).map(|g| g.to_uppercase()),
            dxcc: non_blank(&self.dxcc),
            notes: non_blank(&self.notes),
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Layers `sources` over `defaults`, in order, later sources winning.
/// Only populated, non-blank source fields contribute; the returned
/// `external` set holds exactly the fields a source drove.
pub fn merge_sources(defaults: QsoDraft, sources: &[&PartialQso]) -> SeededDraft {
    let mut values = defaults;
    let mut external = HashSet::new();
    for source in sources {
        for (field, text) in source.present_fields() {
            values.set(field, text);
            external.insert(field);
        }
    }
    SeededDraft { values, external }
}
