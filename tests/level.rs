//! Tests for reporting level parsing and display.

use clearlog::{Error, Level};

#[test]
fn every_level_roundtrips_through_its_name() {
    for level in Level::ALL {
        assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn exactly_eight_levels_exist() {
    assert_eq!(Level::ALL.len(), 8);
}

#[test]
fn names_are_not_case_folded() {
    assert_eq!(
        "WARNING".parse::<Level>(),
        Err(Error::InvalidLevel("WARNING".to_string()))
    );
    assert!("Info".parse::<Level>().is_err());
}

#[test]
fn aliases_are_rejected() {
    assert!("warn".parse::<Level>().is_err());
    assert!("err".parse::<Level>().is_err());
    assert!("fatal".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn invalid_level_error_names_the_offender() {
    let err = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "invalid reporting level: \"loud\"");
}

#[test]
fn display_uses_the_lowercase_name() {
    assert_eq!(Level::Emergency.to_string(), "emergency");
}

#[test]
fn upper_form_matches_the_prefix_token_substitution() {
    assert_eq!(Level::Error.as_upper_str(), "ERROR");
    assert_eq!(Level::Debug.as_upper_str(), "DEBUG");
}

#[test]
fn levels_order_from_least_to_most_urgent() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Error < Level::Emergency);
}
