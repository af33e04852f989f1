use forcemap_model::{Attributes, ID_FIELD, Record};
use serde_json::json;

#[test]
fn new_record_is_empty() {
    let record = Record::new();
    assert!(record.is_empty());
    assert_eq!(record.id(), None);
}

#[test]
fn with_id_sets_identity() {
    let record = Record::with_id("123");
    assert_eq!(record.id(), Some("123"));
    assert_eq!(record.len(), 1);
}

#[test]
fn insert_and_get() {
    let mut record = Record::new();
    record.insert("Name", json!("John Doe"));

    assert_eq!(record.get("Name"), Some(&json!("John Doe")));
    assert_eq!(record.get("Email"), None);
}

#[test]
fn contains_counts_null_values() {
    let mut record = Record::new();
    record.insert("Name", json!(null));

    assert!(record.contains("Name"));
    assert!(!record.contains("Email"));
    assert_eq!(record.get("Name"), Some(&json!(null)));
}

#[test]
fn id_requires_string_value() {
    let mut record = Record::new();
    record.insert(ID_FIELD, json!(123));
    assert_eq!(record.id(), None);
}

#[test]
fn deserializes_from_raw_json_row() {
    let record: Record = serde_json::from_value(json!({
        "Id": "0031t00000XyZzAAA",
        "Name": "John Doe",
    }))
    .unwrap();

    assert_eq!(record.id(), Some("0031t00000XyZzAAA"));
    assert_eq!(record.get("Name"), Some(&json!("John Doe")));
}

#[test]
fn converts_to_and_from_attributes() {
    let mut attrs = Attributes::new();
    attrs.insert("Name".to_string(), json!("John Doe"));

    let record = Record::from(attrs.clone());
    assert_eq!(record.get("Name"), Some(&json!("John Doe")));
    assert_eq!(Attributes::from(record), attrs);
}

#[test]
fn iterates_every_field() {
    let mut record = Record::with_id("1");
    record.insert("Name", json!("John Doe"));
    record.insert("Email", json!("johndoe@example.org"));

    let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys.len(), 3);
    for key in ["Id", "Name", "Email"] {
        assert!(keys.contains(&key));
    }
}
