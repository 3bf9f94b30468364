//! Client-side ordering of the contact list.
//!
//! Sorting never mutates the fetched page; the table renders a sorted
//! copy so clearing the sort falls back to the server's order (newest
//! first) untouched.

use std::cmp::Ordering;

use crate::QsoRecord;
use crate::bands::band_rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Time,
    Call,
    Band,
    Mode,
    Name,
    Qth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Next sort state after a header click: a repeat click flips the
/// direction, a new column always starts ascending.
pub fn next_sort_state(
    current: Option<(SortColumn, SortDirection)>,
    clicked: SortColumn,
) -> (SortColumn, SortDirection) {
    match current {
        Some((column, direction)) if column == clicked => (clicked, direction.toggle()),
        _ => (clicked, SortDirection::Ascending),
    }
}

/// Returns a sorted copy of `records`. The sort is stable, so rows
/// that compare equal keep their fetched order.
pub fn sort_records(
    records: &[QsoRecord],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<QsoRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &QsoRecord, b: &QsoRecord, column: SortColumn) -> Ordering {
    match column {
        // Bands order by wavelength rank, not alphabetically, so 160m
        // comes before 10m. Unknown and missing bands go last.
        SortColumn::Band => rank_of(a).cmp(&rank_of(b)),
        // Option ordering puts absent values first when ascending.
        SortColumn::Date => a.qso_date.cmp(&b.qso_date),
        SortColumn::Time => a.time_on.cmp(&b.time_on),
        SortColumn::Call => a.call.cmp(&b.call),
        SortColumn::Mode => text(&a.mode).cmp(text(&b.mode)),
        SortColumn::Name => text(&a.name).cmp(text(&b.name)),
        SortColumn::Qth => text(&a.qth).cmp(text(&b.qth)),
    }
}

fn rank_of(record: &QsoRecord) -> usize {
    record
        .band
        .as_deref()
        .map(band_rank)
        .unwrap_or(usize::MAX)
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn record(n: u128, call: &str, band: Option<&str>) -> QsoRecord {
        QsoRecord {
            id: Uuid::from_u128(n),
            call: call.to_string(),
            qso_date: None,
            time_on: None,
            band: band.map(str::to_string),
            freq: None,
            mode: None,
            rst_sent: None,
            rst_rcvd: None,
            name: None,
            qth: None,
            grid: None,
            dxcc: None,
            notes: None,
        }
    }

    fn calls(records: &[QsoRecord]) -> Vec<&str> {
        records.iter().map(|r| r.call.as_str()).collect()
    }

    #[test]
    fn band_sorts_by_wavelength_rank() {
        let rows = vec![
            record(1, "A", Some("10m")),
            record(2, "B", Some("160m")),
            record(3, "C", Some("UNKNOWN")),
            record(4, "D", Some("40m")),
        ];
        let sorted = sort_records(&rows, SortColumn::Band, SortDirection::Ascending);
        assert_eq!(calls(&sorted), ["B", "D", "A", "C"]);
    }

    #[test]
    fn missing_band_sorts_with_unknown_at_the_end() {
        let rows = vec![
            record(1, "A", None),
            record(2, "B", Some("20m")),
            record(3, "C", Some("23cm")),
        ];
        let sorted = sort_records(&rows, SortColumn::Band, SortDirection::Ascending);
        // Known band first; unknown and absent tie and keep fetch order
        assert_eq!(calls(&sorted), ["B", "A", "C"]);
    }

    #[test]
    fn descending_reverses_ascending() {
        let rows = vec![
            record(1, "K1ABC", Some("20m")),
            record(2, "AA1X", Some("40m")),
            record(3, "W1AW", Some("10m")),
        ];
        let ascending = sort_records(&rows, SortColumn::Call, SortDirection::Ascending);
        let descending = sort_records(&rows, SortColumn::Call, SortDirection::Descending);
        assert_eq!(calls(&ascending), ["AA1X", "K1ABC", "W1AW"]);
        assert_eq!(calls(&descending), ["W1AW", "K1ABC", "AA1X"]);
    }

    #[test]
    fn absent_dates_come_first_ascending() {
        let mut with_date = record(1, "A", None);
        with_date.qso_date = NaiveDate::from_ymd_opt(2025, 6, 15);
        let without_date = record(2, "B", None);
        let mut earlier = record(3, "C", None);
        earlier.qso_date = NaiveDate::from_ymd_opt(2024, 1, 1);

        let rows = vec![with_date, without_date, earlier];
        let sorted = sort_records(&rows, SortColumn::Date, SortDirection::Ascending);
        assert_eq!(calls(&sorted), ["B", "C", "A"]);
    }

    #[test]
    fn absent_times_come_first_ascending() {
        let mut late = record(1, "A", None);
        late.time_on = NaiveTime::from_hms_opt(23, 0, 0);
        let none = record(2, "B", None);
        let mut early = record(3, "C", None);
        early.time_on = NaiveTime::from_hms_opt(1, 30, 0);

        let rows = vec![late, none, early];
        let sorted = sort_records(&rows, SortColumn::Time, SortDirection::Ascending);
        assert_eq!(calls(&sorted), ["B", "C", "A"]);
    }

    #[test]
    fn text_columns_treat_absent_as_empty() {
        let mut named = record(1, "A", None);
        named.name = Some("Zed".to_string());
        let anonymous = record(2, "B", None);
        let mut also_named = record(3, "C", None);
        also_named.name = Some("Ann".to_string());

        let rows = vec![named, anonymous, also_named];
        let sorted = sort_records(&rows, SortColumn::Name, SortDirection::Ascending);
        assert_eq!(calls(&sorted), ["B", "C", "A"]);
    }

    #[test]
    fn sorting_does_not_touch_the_input() {
        let rows = vec![record(1, "B", None), record(2, "A", None)];
        let _ = sort_records(&rows, SortColumn::Call, SortDirection::Ascending);
        assert_eq!(calls(&rows), ["B", "A"]);
    }

    #[test]
    fn repeat_sort_is_deterministic() {
        let rows = vec![
            record(1, "C", Some("20m")),
            record(2, "A", Some("20m")),
            record(3, "B", Some("40m")),
        ];
        let once = sort_records(&rows, SortColumn::Band, SortDirection::Ascending);
        let twice = sort_records(&once, SortColumn::Band, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn header_clicks_cycle_direction() {
        let first = next_sort_state(None, SortColumn::Call);
        assert_eq!(first, (SortColumn::Call, SortDirection::Ascending));

        let second = next_sort_state(Some(first), SortColumn::Call);
        assert_eq!(second, (SortColumn::Call, SortDirection::Descending));

        let third = next_sort_state(Some(second), SortColumn::Call);
        assert_eq!(third, (SortColumn::Call, SortDirection::Ascending));

        // Switching columns always restarts ascending
        let switched = next_sort_state(Some(second), SortColumn::Band);
        assert_eq!(switched, (SortColumn::Band, SortDirection::Ascending));
    }
}
