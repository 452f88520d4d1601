//! Column, values, and set clause formatters.

use crate::row::Record;
use crate::value::Value;

/// Formats the parenthesized column list of an insert: `(a, b, c)`.
///
/// Column order follows the record's key order. The values clause built from
/// the same record enumerates placeholders in exactly this order, which is
/// what keeps columns and placeholders positionally aligned.
pub(crate) fn columns_clause(record: &Record) -> String {
    let columns: Vec<&str> = record.keys().map(String::as_str).collect();
    format!("({})", columns.join(", "))
}

/// Formats the named-placeholder list of an insert: `values(:a, :b)`.
///
/// A [`Value::Expr`] entry is inlined verbatim instead of bound, so SQL
/// function calls can bypass binding.
pub(crate) fn values_clause(record: &Record) -> String {
    let parts: Vec<String> = record
        .iter()
        .map(|(column, value)| match value {
            Value::Expr(raw) => raw.clone(),
            _ => format!(":{column}"),
        })
        .collect();
    format!("values({})", parts.join(", "))
}

/// Formats the assignment list of an update: `set a = 1, b = 'x'`.
///
/// Assignments are always rendered as inline literals, never as positional
/// placeholders.
pub(crate) fn set_clause(assignments: &Record) -> String {
    if assignments.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = assignments
        .iter()
        .map(|(column, value)| format!("{column} = {}", value.to_literal()))
        .collect();
    format!("set {}", parts.join(", "))
}
