//! Tests for mapping files.

use std::fs;

use ghcal_map::{MappingError, MappingSelection, load_mapping, save_mapping, validate_selection};
use ghcal_model::ColumnMapping;

#[test]
fn saved_mapping_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.json");
    let selection = MappingSelection::from(ColumnMapping {
        month: 1,
        date: 0,
        rooms: [7, 6, 5, 4, 3, 2],
    });

    save_mapping(&path, &selection).unwrap();
    let loaded = load_mapping(&path).unwrap();

    assert_eq!(loaded, selection);
    let mapping = validate_selection(&loaded, Some(8)).unwrap();
    assert_eq!(mapping.rooms, [7, 6, 5, 4, 3, 2]);
}

#[test]
fn hand_written_mapping_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.json");
    fs::write(
        &path,
        r#"{ "month": 0, "date": 1, "rooms": [3, 4, 5, 6, 7, 8] }"#,
    )
    .unwrap();

    let loaded = load_mapping(&path).unwrap();
    let err = validate_selection(&loaded, Some(8)).unwrap_err();
    assert!(matches!(
        err,
        MappingError::ColumnOutOfRange { index: 8, columns: 8, .. }
    ));
}

#[test]
fn malformed_mapping_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mapping.json");
    fs::write(&path, "{ month: 0 ").unwrap();
    let err = load_mapping(&path).unwrap_err();
    assert!(matches!(err, MappingError::Json { .. }));
}

#[test]
fn missing_mapping_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_mapping(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MappingError::Io { .. }));
}
