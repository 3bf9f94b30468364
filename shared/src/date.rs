//! Conversions between chrono types and the text the UI shows.
//!
//! Two different shapes are in play:
//! - Wire values are typed (`NaiveDate` / `NaiveTime`) and serialize as
//!   `2025-06-15` / `14:30:00` via chrono's serde support.
//! - Form inputs are plain text; times are shown without seconds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const UI_DATE_FORMAT: &str = "%Y-%m-%d";
const UI_TIME_FORMAT: &str = "%H:%M";
const WIRE_TIME_FORMAT: &str = "%H:%M:%S";

pub fn ui_date(date: NaiveDate) -> String {
    date.format(UI_DATE_FORMAT).to_string()
}

/// Times are edited and displayed without seconds.
pub fn ui_time(time: NaiveTime) -> String {
    time.format(UI_TIME_FORMAT).to_string()
}

pub fn parse_ui_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), UI_DATE_FORMAT).ok()
}

/// Accepts `HH:MM:SS` as well as the `HH:MM` the form produces.
pub fn parse_ui_time(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, WIRE_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, UI_TIME_FORMAT))
        .ok()
}

/// Download name for an ADIF export, e.g. `hamlog_20250615.adi`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("hamlog_{}.adi", date.format("%Y%m%d"))
}

/// Compact clock readout for the navbar, e.g. `14:30:05 UTC`.
pub fn utc_clock(now: NaiveDateTime) -> String {
    format!("{} UTC", now.format("%H:%M:%S"))
}

/// Page-header timestamp, e.g. `2025-06-15 14:30 UTC`.
pub fn utc_stamp(now: NaiveDateTime) -> String {
    format!("{} UTC", now.format("%Y-%m-%d %H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn formats_for_the_ui() {
        assert_eq!(ui_date(date()), "2025-06-15");
        let time = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
        assert_eq!(ui_time(time), "14:30");
    }

    #[test]
    fn parses_ui_date() {
        assert_eq!(parse_ui_date(" 2025-06-15 "), Some(date()));
        assert_eq!(parse_ui_date("15/06/2025"), None);
        assert_eq!(parse_ui_date(""), None);
    }

    #[test]
    fn parses_times_with_and_without_seconds() {
        assert_eq!(
            parse_ui_time("14:30"),
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        );
        assert_eq!(
            parse_ui_time("14:30:45"),
            Some(NaiveTime::from_hms_opt(14, 30, 45).unwrap())
        );
        assert_eq!(parse_ui_time("25:00"), None);
        assert_eq!(parse_ui_time("soon"), None);
    }

    #[test]
    fn export_filename_embeds_the_date() {
        assert_eq!(export_filename(date()), "hamlog_20250615.adi");
    }

    #[test]
    fn clock_and_stamp_read_as_utc() {
        let now = date().and_hms_opt(14, 30, 5).unwrap();
        assert_eq!(utc_clock(now), "14:30:05 UTC");
        assert_eq!(utc_stamp(now), "2025-06-15 14:30 UTC");
    }
}
