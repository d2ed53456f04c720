//! Catalog file loading, checksums, malformed-record isolation, and the
//! reloadable catalog store.

use std::io::Write;

use spots_rust::models::catalog::{load_catalog, parse_catalog_json_str, CatalogStore};
use spots_rust::models::time::TimeOfDay;
use spots_rust::services::aggregate;

const REPO_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");

fn write_temp_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp catalog");
    file
}

#[test]
fn test_load_repo_catalog_fixture() {
    let catalog = load_catalog(REPO_CATALOG).expect("Failed to load repository catalog fixture");

    assert_eq!(catalog.buildings.len(), 2);
    assert_eq!(catalog.checksum.len(), 64);

    let main = &catalog.buildings[0];
    assert_eq!(main.code.as_deref(), Some("MAIN"));
    assert_eq!(main.rooms.len(), 2);

    let position = main.position().expect("Fixture coordinates should be usable");
    assert!((position.latitude - 43.0642).abs() < 1e-9);
    assert!((position.longitude + 91.8036).abs() < 1e-9);
}

#[test]
fn test_repo_catalog_monday_morning() {
    let catalog = load_catalog(REPO_CATALOG).unwrap();
    let now = TimeOfDay::from_hms(9, 15, 0).unwrap();

    let results = aggregate(&catalog, now, "MON");

    // Science Center has no Monday schedule
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].building_code, "MAIN");
    // 112 open 09:00-10:00, 201 open 08:00-09:30
    assert_eq!(results[0].rooms.len(), 2);
}

#[test]
fn test_load_missing_file_fails() {
    let result = load_catalog("/nonexistent/catalog.json");
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read catalog file"));
}

#[test]
fn test_load_invalid_json_fails() {
    let file = write_temp_catalog("not valid json {");
    assert!(load_catalog(file.path()).is_err());
}

#[test]
fn test_load_missing_data_key_fails() {
    let file = write_temp_catalog(r#"{"features": []}"#);
    let result = load_catalog(file.path());
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Missing required 'data' field"));
}

#[test]
fn test_checksum_changes_with_content() {
    let a = parse_catalog_json_str(r#"{"data": {"features": []}}"#).unwrap();
    let b = parse_catalog_json_str(r#"{"data": { "features": []}}"#).unwrap();
    assert_ne!(a.checksum, b.checksum);
}

#[test]
fn test_malformed_feature_does_not_poison_catalog() {
    let file = write_temp_catalog(
        r#"{
        "data": {
            "features": [
                { "properties": {}, "geometry": {} },
                {
                    "properties": {
                        "buildingName": "Good Hall",
                        "buildingCode": "GOOD",
                        "openClassroomSlots": {
                            "data": [
                                {
                                    "roomNumber": "7",
                                    "Schedule": [
                                        {
                                            "Weekday": "MON",
                                            "Slots": [
                                                { "StartTime": "09:00:00", "EndTime": "10:00:00" }
                                            ]
                                        }
                                    ]
                                }
                            ]
                        }
                    },
                    "geometry": { "coordinates": [0.0, 0.0] }
                }
            ]
        }
    }"#,
    );

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.buildings.len(), 2);

    // The identity-less feature is isolated at aggregation time
    let now = TimeOfDay::from_hms(9, 30, 0).unwrap();
    let results = aggregate(&catalog, now, "MON");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].building_code, "GOOD");
}

#[test]
fn test_store_reload_from_disk() {
    let initial = write_temp_catalog(r#"{"data": {"features": []}}"#);
    let store = CatalogStore::new(load_catalog(initial.path()).unwrap());
    assert!(store.current().buildings.is_empty());

    let replacement = write_temp_catalog(
        r#"{
        "data": {
            "features": [
                {
                    "properties": { "buildingName": "New", "buildingCode": "NEW",
                                    "openClassroomSlots": { "data": [] } },
                    "geometry": { "coordinates": [0.0, 0.0] }
                }
            ]
        }
    }"#,
    );

    store.reload_from(replacement.path()).unwrap();
    assert_eq!(store.current().buildings.len(), 1);
}

#[test]
fn test_store_reload_failure_keeps_previous_catalog() {
    let initial = write_temp_catalog(REPO_CATALOG_STUB);
    let store = CatalogStore::new(load_catalog(initial.path()).unwrap());
    let before = store.current().checksum.clone();

    assert!(store.reload_from("/nonexistent/catalog.json").is_err());
    assert_eq!(store.current().checksum, before);
}

const REPO_CATALOG_STUB: &str = r#"{"data": {"features": []}}"#;
