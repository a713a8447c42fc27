/// Export round-trip tests
///
/// Listings written out as CSV or JSON must load back unchanged, including
/// duplicate keys through the JSON pair-array shape.
use kv_cli::data::entry::Entry;
use kv_cli::data::exporter::DataExporter;
use kv_cli::data::list::KeyValueList;
use kv_cli::data::loaders::{load_csv_entries, load_json_entries};
use kv_cli::data::value::Value;
use tempfile::tempdir;

fn sample_list() -> KeyValueList {
    let mut list = KeyValueList::new();
    list.push(Entry::new("CHAINLINK_DEV", Value::Bool(true)));
    list.push(Entry::new("DATABASE_TIMEOUT", Value::Number(1000.0)));
    list.push(Entry::new("NODE_NAME", "boson"));
    list.push(Entry::new("UNSET", Value::Null));
    list
}

#[test]
fn csv_round_trip_preserves_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let message = DataExporter::export_to_csv(&sample_list(), &path).unwrap();
    assert!(message.contains("✓ Exported 4 entries"));

    let loaded = load_csv_entries(&path, true).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded.entries()[0].value(), &Value::Bool(true));
    assert_eq!(loaded.entries()[1].value(), &Value::Number(1000.0));
    assert_eq!(
        loaded.entries()[2].value(),
        &Value::Text("boson".to_string())
    );
    assert!(loaded.entries()[3].value().is_null());
}

#[test]
fn json_round_trip_keeps_duplicates_and_types() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut list = sample_list();
    list.push(Entry::new("CHAINLINK_DEV", Value::Bool(false)));

    DataExporter::export_to_json(&list, &path).unwrap();
    let loaded = load_json_entries(&path).unwrap();

    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded.entries()[0].key(), "CHAINLINK_DEV");
    assert_eq!(loaded.entries()[4].key(), "CHAINLINK_DEV");
    assert_eq!(loaded.entries()[4].value(), &Value::Bool(false));
    assert_eq!(loaded.entries()[1].value(), &Value::Number(1000.0));
    assert!(loaded.entries()[3].value().is_null());
}

#[test]
fn empty_listing_refuses_to_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.csv");

    assert!(DataExporter::export_to_csv(&KeyValueList::new(), &path).is_err());
    assert!(DataExporter::export_to_json(&KeyValueList::new(), &path).is_err());
    assert!(!path.exists());
}

#[test]
fn export_message_names_count_and_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("named.json");

    let message = DataExporter::export_to_json(&sample_list(), &path).unwrap();
    assert!(message.contains("4 entries"));
    assert!(message.contains("named.json"));
}

#[test]
fn export_into_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    assert!(DataExporter::export_to_csv(&sample_list(), &path).is_err());
}
