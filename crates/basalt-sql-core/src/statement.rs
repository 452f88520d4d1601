//! Statement assembly.
//!
//! Each operation builds its prefix, then appends clauses in one fixed
//! order — join (select only), columns, values, set, where, order-by,
//! limit — keeping only the non-empty ones and joining the parts with
//! single spaces. No trailing statement terminator is emitted.
//!
//! Table names are used verbatim: the caller owns that trust boundary.

use tracing::debug;

use crate::clause::{
    column_def_clause, columns_clause, join_clause, limit_clause, order_by_clause, set_clause,
    values_clause, where_clause, ColumnSpec, JoinSpec, LimitSpec, OrderBySpec, WhereSpec,
};
use crate::error::{Error, Result};
use crate::row::{Record, Rows};
use crate::value::ToValue;

/// The output of statement assembly: SQL text plus named bindings.
///
/// `bindings` holds one map per input row; the caller binds each map
/// against the statement's `:name` placeholders before execution.
/// Statements without placeholders carry no bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The SQL text.
    pub sql: String,
    /// Named-placeholder values, one record per row, storage-coerced.
    pub bindings: Vec<Record>,
}

/// Options for a select statement.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    columns: Option<Vec<String>>,
    distinct: bool,
    where_spec: Option<WhereSpec>,
    join: Option<JoinSpec>,
    order_by: Option<OrderBySpec>,
    limit: Option<LimitSpec>,
}

impl SelectOptions {
    /// Creates empty options; they select `*`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the given columns instead of `*`.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Selects distinct rows.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Restricts the selected rows.
    #[must_use]
    pub fn filter(mut self, spec: WhereSpec) -> Self {
        self.where_spec = Some(spec);
        self
    }

    /// Joins a second table.
    #[must_use]
    pub fn join(mut self, spec: JoinSpec) -> Self {
        self.join = Some(spec);
        self
    }

    /// Orders the selected rows.
    #[must_use]
    pub fn order_by(mut self, spec: OrderBySpec) -> Self {
        self.order_by = Some(spec);
        self
    }

    /// Caps the number of selected rows.
    #[must_use]
    pub fn limit(mut self, spec: LimitSpec) -> Self {
        self.limit = Some(spec);
        self
    }
}

/// Options for an update statement.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    set: Record,
    where_spec: Option<WhereSpec>,
}

impl UpdateOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one assignment; assignments render as literals.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: impl ToValue) -> Self {
        self.set.insert(column.into(), value.to_value());
        self
    }

    /// Restricts the rows to update.
    #[must_use]
    pub fn filter(mut self, spec: WhereSpec) -> Self {
        self.where_spec = Some(spec);
        self
    }
}

/// Options for a delete statement.
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    where_spec: Option<WhereSpec>,
}

impl DeleteOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the rows to delete; without a filter every row goes.
    #[must_use]
    pub fn filter(mut self, spec: WhereSpec) -> Self {
        self.where_spec = Some(spec);
        self
    }
}

/// Options for a create-table statement.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    columns: Vec<(String, ColumnSpec)>,
    if_not_exists: bool,
}

impl CreateOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a column; declaration order is emission order.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, spec: ColumnSpec) -> Self {
        self.columns.push((name.into(), spec));
        self
    }

    /// Emits `create table if not exists`.
    ///
    /// A statement option, kept apart from the column definitions.
    #[must_use]
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// Builds a select statement.
///
/// # Errors
///
/// Returns [`Error::InvalidJoinSpec`] when a join is present but does not
/// name exactly two tables, one of them `table`.
pub fn select(table: &str, opts: &SelectOptions) -> Result<String> {
    let projection = opts
        .columns
        .as_ref()
        .map_or_else(|| String::from("*"), |columns| columns.join(", "));
    let keyword = if opts.distinct {
        "select distinct"
    } else {
        "select"
    };
    let mut parts = vec![format!("{keyword} {projection} from {table}")];
    let joined = opts.join.is_some();
    if let Some(join) = &opts.join {
        parts.push(join_clause(table, join)?);
    }
    push_nonempty(&mut parts, where_clause(table, opts.where_spec.as_ref(), joined));
    push_nonempty(&mut parts, order_by_clause(opts.order_by.as_ref()));
    push_nonempty(&mut parts, limit_clause(opts.limit.as_ref()));
    let sql = parts.join(" ");
    debug!(sql = %sql, "assembled select");
    Ok(sql)
}

/// Builds an insert statement with named placeholders.
///
/// The first record's key order defines both the column list and the
/// placeholder list; the remaining records are expected to share that key
/// set. `Expr` values are inlined into the values clause and never appear
/// in the bindings.
///
/// # Errors
///
/// Returns [`Error::EmptyRows`] when given a sequence with no records.
pub fn insert(table: &str, rows: &Rows) -> Result<Statement> {
    let first = rows.first_record().ok_or(Error::EmptyRows)?;
    let sql = format!(
        "insert into {table} {} {}",
        columns_clause(first),
        values_clause(first)
    );
    let bindings = rows
        .iter()
        .map(|record| {
            record
                .iter()
                .filter(|(_, value)| !value.is_expr())
                .map(|(column, value)| (column.clone(), value.clone().to_storage()))
                .collect()
        })
        .collect();
    debug!(sql = %sql, rows = rows.len(), "assembled insert");
    Ok(Statement { sql, bindings })
}

/// Builds an update statement; assignments render as literals.
#[must_use]
pub fn update(table: &str, opts: &UpdateOptions) -> String {
    let mut parts = vec![format!("update {table}")];
    push_nonempty(&mut parts, set_clause(&opts.set));
    push_nonempty(&mut parts, where_clause(table, opts.where_spec.as_ref(), false));
    let sql = parts.join(" ");
    debug!(sql = %sql, "assembled update");
    sql
}

/// Builds a delete statement.
#[must_use]
pub fn delete(table: &str, opts: &DeleteOptions) -> String {
    let mut parts = vec![format!("delete from {table}")];
    push_nonempty(&mut parts, where_clause(table, opts.where_spec.as_ref(), false));
    let sql = parts.join(" ");
    debug!(sql = %sql, "assembled delete");
    sql
}

/// Builds a create-table statement.
#[must_use]
pub fn create(table: &str, opts: &CreateOptions) -> String {
    let defs: Vec<String> = opts
        .columns
        .iter()
        .map(|(name, spec)| column_def_clause(name, spec))
        .collect();
    let prefix = if opts.if_not_exists {
        "create table if not exists"
    } else {
        "create table"
    };
    let sql = format!("{prefix} {table}({})", defs.join(", "));
    debug!(sql = %sql, "assembled create");
    sql
}

/// Builds a drop-table statement.
#[must_use]
pub fn drop(table: &str) -> String {
    format!("drop table {table}")
}

fn push_nonempty(parts: &mut Vec<String>, clause: String) {
    if !clause.is_empty() {
        parts.push(clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn test_select_default() {
        assert_eq!(
            select("users", &SelectOptions::new()).unwrap(),
            "select * from users"
        );
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let sql = select(
            "users",
            &SelectOptions::new()
                .limit(LimitSpec::Count(5))
                .filter(WhereSpec::new().eq("active", true))
                .order_by(OrderBySpec::new().asc(["name"])),
        )
        .unwrap();
        assert_eq!(
            sql,
            "select * from users where active = 1 order by name asc limit 5"
        );
    }

    #[test]
    fn test_insert_binds_storage_values() {
        let stmt = insert(
            "users",
            &Rows::Single(record(&[
                ("name", Value::Text("Bob".into())),
                ("active", Value::Bool(true)),
            ])),
        )
        .unwrap();
        assert_eq!(
            stmt.sql,
            "insert into users (name, active) values(:name, :active)"
        );
        assert_eq!(stmt.bindings.len(), 1);
        assert_eq!(stmt.bindings[0]["name"], Value::Text("Bob".into()));
        assert_eq!(stmt.bindings[0]["active"], Value::Int(1));
    }

    #[test]
    fn test_insert_empty_sequence() {
        assert_eq!(insert("users", &Rows::Many(vec![])), Err(Error::EmptyRows));
    }

    #[test]
    fn test_update_literals() {
        let sql = update(
            "users",
            &UpdateOptions::new()
                .set("age", 30)
                .filter(WhereSpec::new().eq("id", 5)),
        );
        assert_eq!(sql, "update users set age = 30 where id = 5");
    }

    #[test]
    fn test_drop() {
        assert_eq!(drop("t"), "drop table t");
    }
}
