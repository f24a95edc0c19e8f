//! Tests for InventoryFile
//!
//! These tests verify:
//! - Missing / blank file loads as an empty inventory
//! - Save then load round-trips every field, order and non-ASCII text
//! - Legacy records without total_cost are repaired
//! - Records that cannot be coerced load with total 0.0 and a warning
//! - Malformed documents and unwritable targets surface as errors

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use stocktake::store::{Inventory, InventoryFile};
use stocktake::StockError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.json");
    (temp_dir, path)
}

fn write_document(path: &PathBuf, json: &str) {
    fs::write(path, json).unwrap();
}

// =============================================================================
// Missing / Empty File Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let (inventory, report) = file.load().unwrap();

    assert!(inventory.is_empty());
    assert!(!report.file_found);
    assert!(report.is_clean());
    assert!(!path.exists());
}

#[test]
fn test_load_blank_file_is_empty() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, "  \n");

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert!(inventory.is_empty());
    assert!(report.file_found);
}

#[test]
fn test_load_empty_object() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, "{}");

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert!(inventory.is_empty());
    assert_eq!(report.records_loaded, 0);
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let mut inventory = Inventory::new();
    inventory.add("A1", "Widget", "5", "2.0").unwrap();
    inventory.add("B2", "Gadget", "3", "0.1").unwrap();
    inventory.add("C3", "Шуруп «М4»", "1000", "0.07").unwrap();

    file.save(&inventory).unwrap();
    let (loaded, report) = file.load().unwrap();

    assert_eq!(loaded, inventory);
    assert!(report.is_clean());
    assert_eq!(report.records_loaded, 3);
}

#[test]
fn test_round_trip_preserves_order() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let mut inventory = Inventory::new();
    for id in ["zeta", "alpha", "mu", "beta"] {
        inventory.add(id, id, "1", "1").unwrap();
    }

    file.save(&inventory).unwrap();
    let (loaded, _) = file.load().unwrap();

    let ids: Vec<&str> = loaded.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mu", "beta"]);
}

#[test]
fn test_save_writes_utf8_not_escapes() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let mut inventory = Inventory::new();
    inventory.add("R1", "Гвозди", "10", "1.5").unwrap();
    file.save(&inventory).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Гвозди"));
    assert!(!contents.contains("\\u"));
}

#[test]
fn test_save_document_layout() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let mut inventory = Inventory::new();
    inventory.add("A1", "Widget", "5", "2").unwrap();
    file.save(&inventory).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let expected = "{\n    \"A1\": {\n        \"name\": \"Widget\",\n        \"quantity\": 5,\n        \"price\": 2.0,\n        \"total_cost\": 10.0\n    }\n}\n";
    assert_eq!(contents, expected);
}

#[test]
fn test_save_overwrites_previous_document() {
    let (_temp, path) = setup_temp_file();
    let file = InventoryFile::new(&path, 4);

    let mut inventory = Inventory::new();
    inventory.add("A1", "Widget", "5", "2").unwrap();
    inventory.add("B2", "Gadget", "1", "1").unwrap();
    file.save(&inventory).unwrap();

    inventory.remove("A1").unwrap();
    file.save(&inventory).unwrap();

    let (loaded, _) = file.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains("B2"));
    assert!(!path.with_file_name("inventory.json.tmp").exists());
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("stock.json");
    let file = InventoryFile::new(&path, 2);

    file.save(&Inventory::new()).unwrap();

    assert!(path.exists());
}

#[test]
fn test_save_to_directory_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("occupied");
    fs::create_dir_all(target.join("child")).unwrap();
    let file = InventoryFile::new(&target, 4);

    let mut inventory = Inventory::new();
    inventory.add("A1", "Widget", "5", "2").unwrap();
    let before = inventory.clone();

    let err = file.save(&inventory).unwrap_err();

    assert!(matches!(err, StockError::Io(_)));
    assert_eq!(inventory, before);
}

// =============================================================================
// Legacy Repair Tests
// =============================================================================

#[test]
fn test_load_legacy_record_derives_total() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, r#"{"A1": {"name":"Widget","quantity":"5","price":"2.0"}}"#);

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    let item = inventory.get("A1").unwrap();
    assert_eq!(item.quantity(), 5);
    assert_eq!(item.unit_price(), 2.0);
    assert_eq!(item.total_cost(), 10.0);
    assert_eq!(report.records_repaired, 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_load_legacy_numeric_fields() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, r#"{"A1": {"name":"Widget","quantity":4,"price":2.5}}"#);

    let (inventory, _) = InventoryFile::new(&path, 4).load().unwrap();

    assert_eq!(inventory.get("A1").unwrap().total_cost(), 10.0);
}

#[test]
fn test_load_bad_quantity_warns_and_continues() {
    let (_temp, path) = setup_temp_file();
    write_document(
        &path,
        r#"{
            "A1": {"name":"Widget","quantity":"lots","price":"2.0"},
            "B2": {"name":"Gadget","quantity":"3","price":"1.5"}
        }"#,
    );

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert_eq!(inventory.len(), 2);
    let bad = inventory.get("A1").unwrap();
    assert_eq!(bad.total_cost(), 0.0);
    assert_eq!(bad.name(), "Widget");
    assert_eq!(inventory.get("B2").unwrap().total_cost(), 4.5);

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].id, "A1");
    assert!(report.warnings[0].reason.contains("quantity"));
}

#[test]
fn test_load_bad_price_keeps_good_quantity() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, r#"{"A1": {"name":"Widget","quantity":"7","price":"n/a"}}"#);

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    let item = inventory.get("A1").unwrap();
    assert_eq!(item.quantity(), 7);
    assert_eq!(item.unit_price(), 0.0);
    assert_eq!(item.total_cost(), 0.0);
    assert!(report.warnings[0].reason.contains("price"));
}

#[test]
fn test_load_missing_fields_warns() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, r#"{"A1": {"name":"Widget"}}"#);

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert_eq!(inventory.get("A1").unwrap().total_cost(), 0.0);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_load_non_object_record_warns() {
    let (_temp, path) = setup_temp_file();
    write_document(
        &path,
        r#"{"A1": 42, "B2": {"name":"Gadget","quantity":1,"price":1.0,"total_cost":1.0}}"#,
    );

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.get("A1").unwrap().name(), "");
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].id, "A1");
}

#[test]
fn test_load_stale_total_is_recomputed() {
    let (_temp, path) = setup_temp_file();
    write_document(
        &path,
        r#"{"A1": {"name":"Widget","quantity":5,"price":2.0,"total_cost":99.0}}"#,
    );

    let (inventory, report) = InventoryFile::new(&path, 4).load().unwrap();

    assert_eq!(inventory.get("A1").unwrap().total_cost(), 10.0);
    assert_eq!(report.records_repaired, 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_load_repaired_document_saves_clean() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, r#"{"A1": {"name":"Widget","quantity":"5","price":"2.0"}}"#);
    let file = InventoryFile::new(&path, 4);

    let (inventory, _) = file.load().unwrap();
    file.save(&inventory).unwrap();
    let (_, report) = file.load().unwrap();

    assert!(report.is_clean());
}

// =============================================================================
// Malformed Document Tests
// =============================================================================

#[test]
fn test_load_invalid_json_is_serialization_error() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, "{ not json");

    let err = InventoryFile::new(&path, 4).load().unwrap_err();

    assert!(matches!(err, StockError::Serialization(_)));
}

#[test]
fn test_load_top_level_array_is_serialization_error() {
    let (_temp, path) = setup_temp_file();
    write_document(&path, "[1, 2, 3]");

    let err = InventoryFile::new(&path, 4).load().unwrap_err();

    assert!(matches!(err, StockError::Serialization(_)));
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_save_load_round_trip(
        entries in prop::collection::vec(
            ("[A-Za-z0-9]{1,8}", "\\PC{0,16}", 0u64..1_000_000, 0.0f64..1_000_000.0),
            0..12,
        )
    ) {
        let (_temp, path) = setup_temp_file();
        let file = InventoryFile::new(&path, 4);

        let mut inventory = Inventory::new();
        for (id, name, quantity, price) in &entries {
            // Duplicate ids are rejected; that is fine here
            let _ = inventory.add(id, name, &quantity.to_string(), &price.to_string());
        }

        file.save(&inventory).unwrap();
        let (loaded, report) = file.load().unwrap();

        prop_assert_eq!(loaded, inventory);
        prop_assert!(report.is_clean());
    }
}
