use std::io::Cursor;
use worktrack::core::track::TrackAction;
use worktrack::errors::AppError;
use worktrack::ui::menu::{MENU, MenuAction, input_box, quick_pick};
use worktrack::utils::time::{parse_hhmm, parse_time_on};

mod common;
use common::{ms_at, test_day};

#[test]
fn hhmm_takes_the_first_two_components() {
    assert_eq!(parse_hhmm("09:30").unwrap(), Some((9, 30)));
    assert_eq!(parse_hhmm(" 7:05 ").unwrap(), Some((7, 5)));
    assert_eq!(parse_hhmm("23:59:59").unwrap(), Some((23, 59)));
}

#[test]
fn blank_input_is_a_cancel() {
    assert_eq!(parse_hhmm("").unwrap(), None);
    assert_eq!(parse_hhmm("   ").unwrap(), None);
    assert_eq!(parse_time_on(None, test_day()).unwrap(), None);
}

#[test]
fn malformed_input_is_rejected() {
    for bad in ["9", "ab:cd", "24:00", "12:60", "12:", ":30"] {
        let err = parse_hhmm(bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)), "{bad} should fail");
    }
}

#[test]
fn time_resolves_on_the_given_day() {
    assert_eq!(
        parse_time_on(Some("08:15"), test_day()).unwrap(),
        Some(ms_at(8, 15))
    );
}

#[test]
fn quick_pick_maps_numbers_to_actions() {
    let mut out = Vec::new();

    let picked = quick_pick(&mut Cursor::new("1\n"), &mut out).unwrap();
    assert_eq!(picked, Some(MenuAction::Track(TrackAction::Arrival)));

    let picked = quick_pick(&mut Cursor::new("7\n"), &mut out).unwrap();
    assert_eq!(picked, Some(MenuAction::ShowStatus));

    let listing = String::from_utf8(out).unwrap();
    for (label, _) in MENU {
        assert!(listing.contains(label));
    }
}

#[test]
fn quick_pick_cancels_on_blank_eof_or_unknown_choice() {
    let mut out = Vec::new();

    assert_eq!(quick_pick(&mut Cursor::new("\n"), &mut out).unwrap(), None);
    assert_eq!(quick_pick(&mut Cursor::new(""), &mut out).unwrap(), None);
    assert_eq!(quick_pick(&mut Cursor::new("0\n"), &mut out).unwrap(), None);
    assert_eq!(quick_pick(&mut Cursor::new("42\n"), &mut out).unwrap(), None);
}

#[test]
fn input_box_returns_the_trimmed_answer() {
    let mut out = Vec::new();

    let answer = input_box("Enter your arrival time (HH:MM)", &mut Cursor::new("08:30 \n"), &mut out)
        .unwrap();
    assert_eq!(answer.as_deref(), Some("08:30"));
    assert!(String::from_utf8(out).unwrap().starts_with("Enter your arrival time"));

    let mut out = Vec::new();
    assert_eq!(input_box("x", &mut Cursor::new("\n"), &mut out).unwrap(), None);
}

#[test]
fn break_actions_take_no_time() {
    assert!(TrackAction::Arrival.takes_time());
    assert!(TrackAction::LunchEnd.takes_time());
    assert!(!TrackAction::BreakStart.takes_time());
    assert!(!TrackAction::BreakEnd.takes_time());
}
