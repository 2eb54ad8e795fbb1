use crate::client::error::ClientError;
use crate::client::query::*;
use serde_json::{Map, Value, json};

fn bag(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("query bag must be an object"),
    }
}

fn validation_message(err: ClientError) -> String {
    match err {
        ClientError::Validation { message } => message,
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_update_query_from_bag() {
    let query = UpdateQuery::try_from(&bag(json!({"where": "e1", "set": {"name": "Ada"}}))).unwrap();
    assert_eq!(query, UpdateQuery::new("e1", json!({"name": "Ada"})));
}

#[test]
fn test_update_query_reports_all_missing_keys() {
    let err = UpdateQuery::try_from(&bag(json!({}))).unwrap_err();
    let message = validation_message(err);
    assert!(message.contains("where"));
    assert!(message.contains("set"));
}

#[test]
fn test_update_query_missing_set() {
    let err = UpdateQuery::try_from(&bag(json!({"where": "e1"}))).unwrap_err();
    let message = validation_message(err);
    assert!(message.contains("set"));
    assert!(!message.contains("where"));
}

#[test]
fn test_null_counts_as_missing() {
    let err = DeleteQuery::try_from(&bag(json!({"where": null}))).unwrap_err();
    assert!(validation_message(err).contains("where"));
}

#[test]
fn test_delete_and_entry_queries_from_bag() {
    let delete = DeleteQuery::try_from(&bag(json!({"where": "e2"}))).unwrap();
    assert_eq!(delete.entry_id, "e2");

    let entry = EntryQuery::try_from(&bag(json!({"where": "e3", "extra": 1}))).unwrap();
    assert_eq!(entry.entry_id, "e3");
}

#[test]
fn test_entry_query_missing_where() {
    let err = EntryQuery::try_from(&bag(json!({"get": "name"}))).unwrap_err();
    assert!(validation_message(err).contains("where"));
}

#[test]
fn test_field_query_from_bag() {
    let query = FieldQuery::try_from(&bag(json!({"where": "e1", "get": "email"}))).unwrap();
    assert_eq!(query, FieldQuery::new("e1", "email"));
}

#[test]
fn test_field_query_missing_get() {
    let err = FieldQuery::try_from(&bag(json!({"where": "e1"}))).unwrap_err();
    assert!(validation_message(err).contains("get"));
}

#[test]
fn test_field_query_rejects_non_string_field() {
    let err = FieldQuery::try_from(&bag(json!({"where": "e1", "get": 3}))).unwrap_err();
    assert!(validation_message(err).contains("'get' must be a string"));
}

#[test]
fn test_entries_query_from_bag() {
    let query = EntriesQuery::try_from(&bag(json!({"where": "age", "is": 42}))).unwrap();
    assert_eq!(query, EntriesQuery::new("age", 42));
}

#[test]
fn test_entries_query_missing_is() {
    let err = EntriesQuery::try_from(&bag(json!({"where": "age"}))).unwrap_err();
    assert!(validation_message(err).ends_with(": is"));
}

#[test]
fn test_entries_query_allows_false_value() {
    let query = EntriesQuery::try_from(&bag(json!({"where": "active", "is": false}))).unwrap();
    assert_eq!(query.value, json!(false));
}
