//! Row pipeline: record preparation before insert, coercion after select.
//!
//! Both directions are schema-driven. The caller supplies a
//! [`TableSchema`]; columns the schema does not mention pass through
//! untouched.

use tracing::debug;

use crate::error::{Error, Result};
use crate::row::{Record, Rows};
use crate::schema::{ColumnType, TableSchema};
use crate::value::Value;

/// Prepares records for insertion.
///
/// Every column the schema marks required must be present and non-null in
/// every record; otherwise the offending key is reported and the input is
/// left untouched. Present values are storage-coerced, and structured
/// values of JSON-typed columns are encoded to text.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredColumn`] naming the first missing key.
pub fn pre_insert(rows: &Rows, schema: &TableSchema) -> Result<Rows> {
    for record in rows.iter() {
        for required in &schema.required {
            match record.get(required) {
                None | Some(Value::Null) => {
                    return Err(Error::MissingRequiredColumn(required.clone()));
                }
                Some(_) => {}
            }
        }
    }
    debug!(rows = rows.len(), "coercing records for insert");
    let coerce = |record: &Record| -> Record {
        record
            .iter()
            .map(|(column, value)| {
                let value = match (schema.column_type(column), value) {
                    (Some(ColumnType::Json), Value::Json(json)) => Value::Text(json.to_string()),
                    _ => value.clone(),
                };
                (column.clone(), value.to_storage())
            })
            .collect()
    };
    Ok(match rows {
        Rows::Single(record) => Rows::Single(coerce(record)),
        Rows::Many(records) => Rows::Many(records.iter().map(coerce).collect()),
    })
}

/// Coerces retrieved rows back to host values.
///
/// The input shape is preserved: a single row yields a single record, a
/// sequence yields a sequence of the same length and order. The shape
/// polymorphism is part of the contract, not an accident.
#[must_use]
pub fn post_select(rows: Rows, schema: &TableSchema) -> Rows {
    let coerce = |record: Record| -> Record {
        record
            .into_iter()
            .map(|(column, value)| {
                let value = match schema.column_type(&column) {
                    Some(ty) => value.to_host(ty),
                    None => value,
                };
                (column, value)
            })
            .collect()
    };
    match rows {
        Rows::Single(record) => Rows::Single(coerce(record)),
        Rows::Many(records) => Rows::Many(records.into_iter().map(coerce).collect()),
    }
}
