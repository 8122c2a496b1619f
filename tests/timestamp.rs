//! Tests for multi-timezone timestamp rendering.

use chrono::{TimeZone, Utc};
use clearlog::Error;
use clearlog::fmt::timestamp::render_instant;

fn parts(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

#[test]
fn renders_one_line_per_timezone() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    let rendered = render_instant(
        at,
        &parts(&["%Z", "%H:%M"]),
        &parts(&["UTC", "America/New_York"]),
    )
    .unwrap();

    assert_eq!(rendered, "UTC 12:30\nEST 07:30");
}

#[test]
fn columns_align_on_the_widest_value() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    let rendered = render_instant(
        at,
        &parts(&["%Z", "%H:%M"]),
        &parts(&["UTC", "Australia/Sydney"]),
    )
    .unwrap();

    // "UTC" pads out to the width of "AEDT"
    assert_eq!(rendered, "UTC  12:30\nAEDT 23:30");
}

#[test]
fn an_empty_format_part_widens_the_gap() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    let rendered =
        render_instant(at, &parts(&["%H:%M", "", "%:z"]), &parts(&["UTC"])).unwrap();

    assert_eq!(rendered, "12:30  +00:00");
}

#[test]
fn date_formats_render_in_the_target_timezone() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();

    let rendered =
        render_instant(at, &parts(&["%Y-%m-%d"]), &parts(&["Australia/Sydney"])).unwrap();

    assert_eq!(rendered, "2024-03-02");
}

#[test]
fn unknown_timezones_are_rejected() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    let err = render_instant(at, &parts(&["%H:%M"]), &parts(&["Mars/Olympus"])).unwrap_err();

    assert_eq!(err, Error::InvalidTimezone("Mars/Olympus".to_string()));
}

#[test]
fn no_timezones_render_to_nothing() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    assert_eq!(render_instant(at, &parts(&["%H:%M"]), &[]).unwrap(), "");
}
