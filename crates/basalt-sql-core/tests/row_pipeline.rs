//! Tests for the row pipeline: required-column enforcement, storage
//! coercion, reverse coercion, and shape preservation.

use basalt_sql_core::{
    insert, post_select, pre_insert, ColumnType, Error, Record, Rows, TableSchema, Value,
};

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (String::from(*k), v.clone()))
        .collect()
}

fn users_schema() -> TableSchema {
    TableSchema::new()
        .column("name", ColumnType::Other("text".into()))
        .column("active", ColumnType::Boolean)
        .column("settings", ColumnType::Json)
        .require("name")
}

#[test]
fn missing_required_column_names_the_key() {
    let rows = Rows::Single(record(&[("active", Value::Bool(true))]));
    let before = rows.clone();

    let err = pre_insert(&rows, &users_schema()).unwrap_err();
    assert_eq!(err, Error::MissingRequiredColumn("name".into()));
    assert_eq!(err.to_string(), "missing required column: name");
    assert_eq!(rows, before);
}

#[test]
fn required_column_must_be_non_null() {
    let rows = Rows::Single(record(&[("name", Value::Null)]));
    assert_eq!(
        pre_insert(&rows, &users_schema()),
        Err(Error::MissingRequiredColumn("name".into()))
    );
}

#[test]
fn multi_row_required_check_covers_every_record() {
    let rows = Rows::Many(vec![
        record(&[("name", Value::Text("a".into()))]),
        record(&[("active", Value::Bool(false))]),
    ]);
    assert_eq!(
        pre_insert(&rows, &users_schema()),
        Err(Error::MissingRequiredColumn("name".into()))
    );
}

#[test]
fn pre_insert_coerces_for_storage() {
    let settings = serde_json::json!({"theme": "dark", "tabs": 4});
    let rows = Rows::Single(record(&[
        ("name", Value::Text("Bob".into())),
        ("active", Value::Bool(true)),
        ("settings", Value::Json(settings.clone())),
    ]));

    let Rows::Single(coerced) = pre_insert(&rows, &users_schema()).unwrap() else {
        panic!("single record must stay single");
    };
    assert_eq!(coerced["active"], Value::Int(1));
    assert_eq!(coerced["settings"], Value::Text(settings.to_string()));
}

#[test]
fn pre_insert_feeds_statement_bindings() {
    let rows = Rows::Single(record(&[
        ("name", Value::Text("Bob".into())),
        ("active", Value::Bool(true)),
    ]));
    let prepared = pre_insert(&rows, &users_schema()).unwrap();
    let stmt = insert("users", &prepared).unwrap();

    assert_eq!(
        stmt.sql,
        "insert into users (name, active) values(:name, :active)"
    );
    assert_eq!(stmt.bindings[0]["active"], Value::Int(1));
}

#[test]
fn post_select_single_returns_single() {
    let row = Rows::Single(record(&[
        ("name", Value::Text("Bob".into())),
        ("active", Value::Int(0)),
    ]));
    let Rows::Single(host) = post_select(row, &users_schema()) else {
        panic!("single row must come back as a single record, not a sequence");
    };
    assert_eq!(host["active"], Value::Bool(false));
}

#[test]
fn post_select_sequence_keeps_length_and_order() {
    let rows = Rows::Many(vec![
        record(&[("name", Value::Text("a".into())), ("active", Value::Int(1))]),
        record(&[("name", Value::Text("b".into())), ("active", Value::Int(0))]),
    ]);
    let Rows::Many(host) = post_select(rows, &users_schema()) else {
        panic!("sequence must come back as a sequence");
    };
    assert_eq!(host.len(), 2);
    assert_eq!(host[0]["name"], Value::Text("a".into()));
    assert_eq!(host[0]["active"], Value::Bool(true));
    assert_eq!(host[1]["name"], Value::Text("b".into()));
    assert_eq!(host[1]["active"], Value::Bool(false));
}

#[test]
fn storage_round_trip_restores_host_values() {
    let settings = serde_json::json!({"flags": [1, 2, 3]});
    let rows = Rows::Single(record(&[
        ("name", Value::Text("Bob".into())),
        ("active", Value::Bool(false)),
        ("settings", Value::Json(settings)),
    ]));

    let stored = pre_insert(&rows, &users_schema()).unwrap();
    assert_eq!(post_select(stored, &users_schema()), rows);
}

#[test]
fn unknown_columns_pass_through() {
    let row = Rows::Single(record(&[
        ("name", Value::Text("Bob".into())),
        ("score", Value::Float(9.5)),
    ]));
    let Rows::Single(host) = post_select(row, &users_schema()) else {
        panic!("shape changed");
    };
    assert_eq!(host["score"], Value::Float(9.5));
}
