use super::*;

fn defaults() -> QsoDraft {
    QsoDraft::defaults(
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
    )
}

#[test]
fn defaults_fill_session_values() {
    let draft = defaults();
    assert_eq!(draft.call, "");
    assert_eq!(draft.qso_date, "2025-06-15");
    assert_eq!(draft.time_on, "14:30");
    assert_eq!(draft.band, "20m");
    assert_eq!(draft.mode, "SSB");
    assert_eq!(draft.rst_sent, "59");
    assert_eq!(draft.rst_rcvd, "59");
    assert_eq!(draft.freq, "");
    assert_eq!(draft.notes, "");
}

#[test]
fn merge_without_sources_keeps_defaults_untagged() {
    let seeded = merge_sources(defaults(), &[]);
    assert_eq!(seeded.values, defaults());
    assert!(seeded.external.is_empty());
}

#[test]
fn source_fields_override_defaults_and_get_tagged() {
    let parsed = PartialQso {
        call: Some("W1AW".to_string()),
        band: Some("40m".to_string()),
        rst_sent: Some("57".to_string()),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&parsed]);
    assert_eq!(seeded.values.call, "W1AW");
    assert_eq!(seeded.values.band, "40m");
    assert_eq!(seeded.values.rst_sent, "57");
    assert_eq!(
        seeded.external,
        HashSet::from([QsoField::Call, QsoField::Band, QsoField::RstSent])
    );
}

#[test]
fn untouched_fields_keep_defaults_and_stay_untagged() {
    let parsed = PartialQso {
        call: Some("W1AW".to_string()),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&parsed]);
    assert_eq!(seeded.values.band, "20m");
    assert_eq!(seeded.values.rst_rcvd, "59");
    assert!(!seeded.external.contains(&QsoField::Band));
    assert!(!seeded.external.contains(&QsoField::RstRcvd));
}

#[test]
fn later_source_wins_shared_keys() {
    let parsed = PartialQso {
        name: Some("John".to_string()),
        qth: Some("Newington".to_string()),
        ..Default::default()
    };
    let lookup = PartialQso {
        name: Some("John H".to_string()),
        grid: Some("FN31".to_string()),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&parsed, &lookup]);
    assert_eq!(seeded.values.name, "John H");
    assert_eq!(seeded.values.qth, "Newington");
    assert_eq!(seeded.values.grid, "FN31");
    assert_eq!(
        seeded.external,
        HashSet::from([QsoField::Name, QsoField::Qth, QsoField::Grid])
    );
}

#[test]
fn blank_source_fields_do_not_contribute() {
    let parsed = PartialQso {
        name: Some(String::new()),
        qth: Some("   ".to_string()),
        mode: Some("CW".to_string()),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&parsed]);
    assert_eq!(seeded.values.name, "");
    assert_eq!(seeded.values.qth, "");
    assert_eq!(seeded.values.mode, "CW");
    assert_eq!(seeded.external, HashSet::from([QsoField::Mode]));
}

#[test]
fn typed_source_fields_render_as_ui_text() {
    let parsed = PartialQso {
        qso_date: NaiveDate::from_ymd_opt(2025, 1, 2),
        time_on: NaiveTime::from_hms_opt(9, 5, 30),
        freq: Some(14.225),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&parsed]);
    assert_eq!(seeded.values.qso_date, "2025-01-02");
    assert_eq!(seeded.values.time_on, "09:05");
    assert_eq!(seeded.values.freq, "14.225");
}

#[test]
fn merge_follows_last_writer_formula() {
    // For every field: second source, else first source, else default.
    let first = PartialQso {
        call: Some("K1ABC".to_string()),
        name: Some("Ann".to_string()),
        ..Default::default()
    };
    let second = PartialQso {
        name: Some("Anne".to_string()),
        qth: Some("Boston".to_string()),
        ..Default::default()
    };
    let seeded = merge_sources(defaults(), &[&first, &second]);
    for field in QsoField::ALL {
        let expected = second
            .present_fields()
            .into_iter()
            .chain(first.present_fields())
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text)
            .unwrap_or_else(|| defaults().get(field).to_string());
        assert_eq!(seeded.values.get(field), expected, "field {field:?}");
    }
}

// =========================================================
// Draft -> request payload
// =========================================================

#[test]
fn to_create_requires_a_callsign() {
    let mut draft = defaults();
    assert_eq!(draft.to_create(), None);
    draft.call = "   ".to_string();
    assert_eq!(draft.to_create(), None);
}

#[test]
fn to_create_normalizes_call_and_grid() {
    let mut draft = defaults();
    draft.call = "  w1aw/2 ".to_string();
    draft.grid = "fn31pr".to_string();
    let payload = draft.to_create().unwrap();
    assert_eq!(payload.call, "W1AW/2");
    assert_eq!(payload.grid.as_deref(), Some("FN31PR"));
}

#[test]
fn to_create_parses_numeric_and_temporal_fields() {
    let mut draft = defaults();
    draft.call = "W1AW".to_string();
    draft.freq = " 14.225 ".to_string();
    draft.time_on = "14:30".to_string();
    let payload = draft.to_create().unwrap();
    assert_eq!(payload.freq, Some(14.225));
    assert_eq!(payload.qso_date, NaiveDate::from_ymd_opt(2025, 6, 15));
    assert_eq!(payload.time_on, NaiveTime::from_hms_opt(14, 30, 0));
}

#[test]
fn to_create_drops_unparseable_values_instead_of_failing() {
    let mut draft = defaults();
    draft.call = "W1AW".to_string();
    draft.freq = "fourteen".to_string();
    draft.qso_date = "June 15th".to_string();
    draft.time_on = "later".to_string();
    let payload = draft.to_create().unwrap();
    assert_eq!(payload.freq, None);
    assert_eq!(payload.qso_date, None);
    assert_eq!(payload.time_on, None);
}

#[test]
fn to_create_turns_blanks_into_none() {
    let mut draft = defaults();
    draft.call = "W1AW".to_string();
    draft.band = String::new();
    draft.rst_sent = "  ".to_string();
    let payload = draft.to_create().unwrap();
    assert_eq!(payload.band, None);
    assert_eq!(payload.rst_sent, None);
    assert_eq!(payload.name, None);
    assert_eq!(payload.notes, None);
    // Untouched defaults still come through
    assert_eq!(payload.mode.as_deref(), Some("SSB"));
    assert_eq!(payload.rst_rcvd.as_deref(), Some("59"));
}

// =========================================================
// Wire shape
// =========================================================

#[test]
fn unset_fields_serialize_as_explicit_nulls() {
    let mut draft = defaults();
    draft.call = "W1AW".to_string();
    draft.band = String::new();
    let payload = draft.to_create().unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value.get("band"), Some(&serde_json::Value::Null));
    assert_eq!(value.get("freq"), Some(&serde_json::Value::Null));
    assert_eq!(value.get("name"), Some(&serde_json::Value::Null));
}

#[test]
fn temporal_fields_use_iso_wire_formats() {
    let mut draft = defaults();
    draft.call = "W1AW".to_string();
    let payload = draft.to_create().unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["qso_date"], "2025-06-15");
    // Seconds are restored even though the form edits HH:MM
    assert_eq!(value["time_on"], "14:30:00");
}
