//! Integration tests for the export steps on the built-in sample.

use std::fs;

use ghcal_cli::edit::DayEdit;
use ghcal_cli::export::{ExportOutcome, ExportRequest, ExportTarget, export_session};
use ghcal_core::Session;
use ghcal_ingest::SAMPLE_CSV;
use ghcal_map::{MappingSelection, load_mapping};
use ghcal_model::ColumnMapping;

fn sample_session() -> Session {
    let mut session = Session::new().with_skip_rows(1);
    session.load_text(SAMPLE_CSV).unwrap();
    let selection = session.default_selection();
    session.confirm_mapping(&selection).unwrap();
    session
}

fn request<'a>(
    edits: &'a [DayEdit],
    month_order: &'a [String],
    target: ExportTarget,
) -> ExportRequest<'a> {
    ExportRequest {
        edits,
        month_order,
        org: "lakeside",
        target,
        save_mapping: None,
    }
}

#[test]
fn edits_and_order_are_written_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = sample_session();
    let edits = vec!["JANUARY/02=Zoe| |||| ".parse::<DayEdit>().unwrap()];
    let order = vec!["FEBRUARY".to_string(), " JANUARY ".to_string()];

    let outcome = export_session(
        &mut session,
        &request(&edits, &order, ExportTarget::Path(dir.path().to_path_buf())),
    )
    .unwrap();

    let path = dir.path().join("lakeside_export.csv");
    assert_eq!(outcome, ExportOutcome::Written(path.clone()));
    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r"
    Months,Date,Room 01,Room 02,Room 03,Room 04,Room 05,Room 06
    FEBRUARY,1,,,,,,
    ,2,Alice,Bob,,,,
    JANUARY,1,John Doe,Mary,,Alex,,
    ,2,Zoe,,,,,
    ,3,John Doe,,Peter,,Anna,Tom
    ");
}

#[test]
fn stdout_target_returns_csv_without_writing() {
    let mut session = sample_session();
    let outcome = export_session(&mut session, &request(&[], &[], ExportTarget::Stdout)).unwrap();
    let ExportOutcome::Printed(csv) = outcome else {
        panic!("expected printed CSV, got {outcome:?}");
    };
    assert!(csv.starts_with("Months,Date,Room 01"));
    assert!(csv.contains("\nJANUARY,1,John Doe,Mary,,Alex,,\n"));
    assert!(csv.ends_with(",2,Alice,Bob,,,,"));
}

#[test]
fn save_mapping_writes_confirmed_columns() {
    let dir = tempfile::tempdir().unwrap();
    let mapping_path = dir.path().join("mapping.json");
    let mut session = sample_session();
    let mut export = request(&[], &[], ExportTarget::Stdout);
    export.save_mapping = Some(mapping_path.as_path());

    export_session(&mut session, &export).unwrap();

    let saved = load_mapping(&mapping_path).unwrap();
    assert_eq!(saved, MappingSelection::from(ColumnMapping::default()));
}

#[test]
fn edit_for_unknown_day_stops_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = sample_session();
    let edits = vec!["FEBRUARY/9=a|b|c|d|e|f".parse::<DayEdit>().unwrap()];

    let error = export_session(
        &mut session,
        &request(&edits, &[], ExportTarget::Path(dir.path().to_path_buf())),
    )
    .unwrap_err();

    assert!(format!("{error:#}").contains("unknown day '9' in FEBRUARY"), "{error:#}");
    assert!(!dir.path().join("lakeside_export.csv").exists());
}

#[test]
fn unknown_month_in_order_is_rejected() {
    let mut session = sample_session();
    let order = vec!["MARCH".to_string()];
    let error =
        export_session(&mut session, &request(&[], &order, ExportTarget::Stdout)).unwrap_err();
    assert!(format!("{error:#}").contains("unknown month 'MARCH'"), "{error:#}");
}
