//! Tests for the output accumulator's reuse, reservation and merge rules.

use clearlog::{Error, ReportOutput};

#[test]
fn adjacent_table_contributors_share_one_fragment() {
    let mut out = ReportOutput::new();
    out.reuse_table_or_new(true).row("a", "1");
    out.reuse_table_or_new(true).row("b", "2");

    assert_eq!(out.fragment_count(), 1);
    assert_eq!(out.combined().unwrap(), "a  1\nb  2");
}

#[test]
fn sealed_table_is_not_reused() {
    let mut out = ReportOutput::new();
    out.new_table(false).row("a", "1");
    out.reuse_table_or_new(true).row("b", "2");

    assert_eq!(out.fragment_count(), 2);
    assert_eq!(out.combined().unwrap(), "a  1\n\nb  2");
}

#[test]
fn reuse_does_not_change_reusability() {
    let mut out = ReportOutput::new();
    out.new_table(true).row("a", "1");
    // asks for a sealed table but reuses the open one instead
    out.reuse_table_or_new(false).row("b", "2");
    out.reuse_table_or_new(true).row("c", "3");

    assert_eq!(out.fragment_count(), 1);
}

#[test]
fn kind_mismatch_starts_a_new_fragment() {
    let mut out = ReportOutput::new();
    out.new_text(true).line("HEADER:");
    out.reuse_table_or_new(true).row("a", "1");

    assert_eq!(out.fragment_count(), 2);
    assert_eq!(out.combined().unwrap(), "HEADER:\n\na  1");
}

#[test]
fn reserved_fragments_keep_their_position() {
    let mut out = ReportOutput::new();
    let header = out.reserve_text();
    out.reuse_table_or_new(true).row("a", "1");

    out.text_at(header)
        .expect("reserved text slot")
        .line("HEADER:");

    assert_eq!(out.combined().unwrap(), "HEADER:\n\na  1");
}

#[test]
fn unfilled_reservations_render_to_nothing() {
    let mut out = ReportOutput::new();
    let _header = out.reserve_text();
    let _table = out.reserve_table();
    out.new_text(true).line("only this");

    assert_eq!(out.combined().unwrap(), "only this");
}

#[test]
fn empty_accumulator_combines_to_empty_string() {
    let out = ReportOutput::new();
    assert_eq!(out.combined().unwrap(), "");
}

#[test]
fn data_fragments_merge_with_later_keys_winning() {
    let mut out = ReportOutput::new();
    out.new_data(false).entry("a", 1).entry("b", 2);
    out.new_data(false).entry("b", 3);

    assert_eq!(out.combined().unwrap(), r#"{"a":1,"b":3}"#);
}

#[test]
fn mixed_text_and_data_is_an_error() {
    let mut out = ReportOutput::new();
    out.new_text(true).line("words");
    out.new_data(false).entry("a", 1);

    let err = out.combined().unwrap_err();
    assert_eq!(err, Error::MixedOutputKinds(vec!["text", "data"]));
}

#[test]
fn empty_fragments_do_not_count_towards_mixing() {
    let mut out = ReportOutput::new();
    out.new_text(true);
    out.new_data(false).entry("a", 1);

    assert_eq!(out.combined().unwrap(), r#"{"a":1}"#);
}
