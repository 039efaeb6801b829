//! Integration tests for `--set` day edits.

use ghcal_cli::edit::DayEdit;

#[test]
fn parses_full_edit() {
    let edit: DayEdit = "MARCH/12=Ann|Ben|Cid|Dee|Eve|Fay".parse().unwrap();
    assert_eq!(edit.month, "MARCH");
    assert_eq!(edit.day, "12");
    assert_eq!(
        edit.rooms,
        ["Ann", "Ben", "Cid", "Dee", "Eve", "Fay"].map(String::from)
    );
}

#[test]
fn rejects_missing_equals() {
    let error = "MARCH/12".parse::<DayEdit>().unwrap_err();
    insta::assert_snapshot!(error, @"expected MONTH/DAY=ROOMS, got 'MARCH/12'");
}

#[test]
fn rejects_short_room_list() {
    let error = "MARCH/12=Ann|Ben".parse::<DayEdit>().unwrap_err();
    assert_eq!(error, "expected 6 room values separated by '|', got 2");
}
