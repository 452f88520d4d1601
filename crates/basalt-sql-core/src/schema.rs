//! Schema descriptors consumed by the row pipeline.
//!
//! The engine does not produce or validate schemas; callers supply one per
//! table so the pipeline knows which columns need boolean or JSON coercion
//! and which must be present on insert. Both types derive serde traits so
//! callers can persist their registrations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared type tag for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Stored as `1`/`0`, surfaced as a host boolean.
    Boolean,
    /// Stored as JSON-encoded text, surfaced as a structured value.
    Json,
    /// Any other SQL type; values pass through untouched.
    Other(String),
}

/// Column type tags plus the required-column list for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Column name to declared type, in declaration order.
    pub columns: IndexMap<String, ColumnType>,
    /// Columns that must be present and non-null on insert.
    pub required: Vec<String>,
}

impl TableSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a column with its type tag.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.insert(name.into(), ty);
        self
    }

    /// Marks a column as required on insert.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Returns the declared type for a column, if any.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<&ColumnType> {
        self.columns.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup() {
        let schema = TableSchema::new()
            .column("active", ColumnType::Boolean)
            .column("payload", ColumnType::Json)
            .require("payload");

        assert_eq!(schema.column_type("active"), Some(&ColumnType::Boolean));
        assert_eq!(schema.column_type("missing"), None);
        assert_eq!(schema.required, vec!["payload".to_string()]);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = TableSchema::new()
            .column("b", ColumnType::Other("text".into()))
            .column("a", ColumnType::Other("integer".into()));

        let names: Vec<&String> = schema.columns.keys().collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
