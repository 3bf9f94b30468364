use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod bands;
pub mod confidence;
pub mod date;
pub mod merge;
pub mod protocol;
pub mod sort;

// =========================================================
// Constants
// =========================================================

/// Amateur bands the UI knows about, ordered by wavelength.
/// The position in this table doubles as the band sort rank.
pub const BANDS: [&str; 13] = [
    "160m", "80m", "60m", "40m", "30m", "20m", "17m", "15m", "12m", "10m", "6m", "2m", "70cm",
];

/// Operating modes offered by the entry form.
pub const MODES: [&str; 10] = [
    "SSB", "CW", "FT8", "FT4", "RTTY", "PSK31", "AM", "FM", "DIGI", "OTHER",
];

pub const DEFAULT_BAND: &str = "20m";
pub const DEFAULT_MODE: &str = "SSB";
pub const DEFAULT_RST: &str = "59";

/// How many QSOs a single list request fetches.
pub const PAGE_LIMIT: u32 = 200;

/// Quiet period after the last keystroke before the search fires.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Lookup responses with this source carry no usable data.
pub const LOOKUP_SOURCE_NONE: &str = "none";

// =========================================================
// Domain models
// =========================================================

/// One logged contact as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QsoRecord {
    pub id: Uuid,
    pub call: String,
    pub qso_date: Option<NaiveDate>,
    pub time_on: Option<NaiveTime>,
    pub band: Option<String>,
    pub freq: Option<f64>,
    pub mode: Option<String>,
    pub rst_sent: Option<String>,
    pub rst_rcvd: Option<String>,
    pub name: Option<String>,
    pub qth: Option<String>,
    pub grid: Option<String>,
    pub dxcc: Option<String>,
    pub notes: Option<String>,
}

/// Payload for logging a new contact. Unset fields serialize as
/// explicit nulls so the server treats them as absent, not as "".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QsoCreate {
    pub call: String,
    pub qso_date: Option<NaiveDate>,
    pub time_on: Option<NaiveTime>,
    pub band: Option<String>,
    pub freq: Option<f64>,
    pub mode: Option<String>,
    pub rst_sent: Option<String>,
    pub rst_rcvd: Option<String>,
    pub name: Option<String>,
    pub qth: Option<String>,
    pub grid: Option<String>,
    pub dxcc: Option<String>,
    pub notes: Option<String>,
}

/// A sparse set of QSO fields, as produced by the natural-language
/// parser or a callsign lookup. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialQso {
    pub call: Option<String>,
    pub qso_date: Option<NaiveDate>,
    pub time_on: Option<NaiveTime>,
    pub band: Option<String>,
    pub freq: Option<f64>,
    pub mode: Option<String>,
    pub rst_sent: Option<String>,
    pub rst_rcvd: Option<String>,
    pub name: Option<String>,
    pub qth: Option<String>,
    pub grid: Option<String>,
    pub dxcc: Option<String>,
    pub notes: Option<String>,
}

/// Identifies one field of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QsoField {
    Call,
    QsoDate,
    TimeOn,
    Band,
    Freq,
    Mode,
    RstSent,
    RstRcvd,
    Name,
    Qth,
    Grid,
    Dxcc,
    Notes,
}

impl QsoField {
    pub const ALL: [QsoField; 13] = [
        QsoField::Call,
        QsoField::QsoDate,
        QsoField::TimeOn,
        QsoField::Band,
        QsoField::Freq,
        QsoField::Mode,
        QsoField::RstSent,
        QsoField::RstRcvd,
        QsoField::Name,
        QsoField::Qth,
        QsoField::Grid,
        QsoField::Dxcc,
        QsoField::Notes,
    ];
}

impl PartialQso {
    /// Renders every populated field as UI text, keyed by form field.
    /// Blank strings do not count as populated.
    pub fn present_fields(&self) -> Vec<(QsoField, String)> {
        let mut out = Vec::new();
        push_text(&mut out, QsoField::Call, &self.call);
        if let Some(qso_date) = self.qso_date {
            out.push((QsoField::QsoDate, date::ui_date(qso_date)));
        }
        if let Some(time_on) = self.time_on {
            out.push((QsoField::TimeOn, date::ui_time(time_on)));
        }
        push_text(&mut out, QsoField::Band, &self.band);
        if let Some(freq) = self.freq {
            out.push((QsoField::Freq, freq.to_string()));
        }
        push_text(&mut out, QsoField::Mode, &self.mode);
        push_text(&mut out, QsoField::RstSent, &self.rst_sent);
        push_text(&mut out, QsoField::RstRcvd, &self.rst_rcvd);
        push_text(&mut out, QsoField::Name, &self.name);
        push_text(&mut out, QsoField::Qth, &self.qth);
        push_text(&mut out, QsoField::Grid, &self.grid);
        push_text(&mut out, QsoField::Dxcc, &self.dxcc);
        push_text(&mut out, QsoField::Notes, &self.notes);
        out
    }
}

fn push_text(out: &mut Vec<(QsoField, String)>, field: QsoField, value: &Option<String>) {
    if let Some(text) = value {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push((field, trimmed.to_string()));
        }
    }
}
