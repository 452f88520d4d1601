//! Inner-join clause formatting.

use crate::error::{Error, Result};

/// A two-table inner-join description.
///
/// Each entry pairs a table with the column it joins on. Exactly one entry
/// must name the statement's primary table; the other entry is the join
/// target. Join support is deliberately binary and inner-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSpec {
    pairs: Vec<(String, String)>,
}

impl JoinSpec {
    /// Creates an empty join description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one table/column entry.
    #[must_use]
    pub fn on(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.pairs.push((table.into(), column.into()));
        self
    }
}

/// Formats `inner join <other> on <table>.<colA> = <other>.<colB>`.
///
/// A description without exactly two entries, or without exactly one entry
/// for the primary table, is rejected rather than rendered into malformed
/// SQL.
pub(crate) fn join_clause(table: &str, spec: &JoinSpec) -> Result<String> {
    if spec.pairs.len() != 2 {
        return Err(Error::InvalidJoinSpec(format!(
            "expected exactly two tables, got {}",
            spec.pairs.len()
        )));
    }
    let own = spec.pairs.iter().find(|(t, _)| t == table);
    let target = spec.pairs.iter().find(|(t, _)| t != table);
    match (own, target) {
        (Some((_, own_column)), Some((other, other_column))) => Ok(format!(
            "inner join {other} on {table}.{own_column} = {other}.{other_column}"
        )),
        _ => Err(Error::InvalidJoinSpec(format!(
            "exactly one entry must reference the primary table {table}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_join() {
        let spec = JoinSpec::new().on("users", "id").on("orders", "user_id");
        assert_eq!(
            join_clause("users", &spec).unwrap(),
            "inner join orders on users.id = orders.user_id"
        );
    }

    #[test]
    fn test_entry_order_does_not_matter() {
        let spec = JoinSpec::new().on("orders", "user_id").on("users", "id");
        assert_eq!(
            join_clause("users", &spec).unwrap(),
            "inner join orders on users.id = orders.user_id"
        );
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let spec = JoinSpec::new().on("users", "id");
        assert!(matches!(
            join_clause("users", &spec),
            Err(Error::InvalidJoinSpec(_))
        ));
    }

    #[test]
    fn test_rejects_missing_primary_table() {
        let spec = JoinSpec::new().on("orders", "user_id").on("items", "id");
        assert!(matches!(
            join_clause("users", &spec),
            Err(Error::InvalidJoinSpec(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_primary_table() {
        let spec = JoinSpec::new().on("users", "id").on("users", "other_id");
        assert!(matches!(
            join_clause("users", &spec),
            Err(Error::InvalidJoinSpec(_))
        ));
    }
}
