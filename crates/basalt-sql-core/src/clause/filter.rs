//! Where-clause formatting: equality tests, OR-groups, and pattern matches.

use crate::value::{ToValue, Value};

/// The value side of one where condition.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereValue {
    /// A single equality test: `col = value`.
    Scalar(Value),
    /// An OR-group of equality tests on one column:
    /// `(col = a or col = b)`.
    Any(Vec<Value>),
}

/// A declarative filter.
///
/// Equality conditions are conjoined with AND; an OR-group counts as one
/// condition. Pattern matches are declared per column, with multiple
/// patterns for one column disjoined with OR. Condition order follows
/// declaration order.
///
/// # Example
///
/// ```rust
/// use basalt_sql_core::WhereSpec;
///
/// let spec = WhereSpec::new()
///     .eq("deleted", false)
///     .any("role", vec!["admin", "moderator"]);
/// assert!(!spec.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereSpec {
    conditions: Vec<(String, WhereValue)>,
    contains: Vec<(String, Vec<Value>)>,
}

impl WhereSpec {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl ToValue) -> Self {
        self.conditions
            .push((column.into(), WhereValue::Scalar(value.to_value())));
        self
    }

    /// Adds an OR-group: the column must equal any of the given values.
    #[must_use]
    pub fn any<V: ToValue>(mut self, column: impl Into<String>, values: Vec<V>) -> Self {
        let values = values.into_iter().map(ToValue::to_value).collect();
        self.conditions.push((column.into(), WhereValue::Any(values)));
        self
    }

    /// Adds a pattern match on a column.
    ///
    /// Repeated calls for the same column are disjoined with OR; distinct
    /// columns are conjoined with AND like every other condition.
    #[must_use]
    pub fn contains(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        let column = column.into();
        let pattern = Value::Text(pattern.into());
        if let Some((_, patterns)) = self.contains.iter_mut().find(|(c, _)| *c == column) {
            patterns.push(pattern);
        } else {
            self.contains.push((column, vec![pattern]));
        }
        self
    }

    /// Returns true when neither conditions nor patterns are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.contains.is_empty()
    }
}

/// Formats the `where ...` clause, or an empty string without input.
///
/// Column names are qualified with the table name only while a join is in
/// effect, where an unqualified name would be ambiguous.
pub(crate) fn where_clause(table: &str, spec: Option<&WhereSpec>, joined: bool) -> String {
    let Some(spec) = spec else {
        return String::new();
    };
    if spec.is_empty() {
        return String::new();
    }

    let qualify = |column: &str| {
        if joined {
            format!("{table}.{column}")
        } else {
            column.to_string()
        }
    };

    let mut fragments = Vec::new();
    for (column, value) in &spec.conditions {
        let column = qualify(column);
        match value {
            WhereValue::Scalar(v) => {
                fragments.push(format!("{column} = {}", v.to_literal()));
            }
            WhereValue::Any(values) => {
                let tests: Vec<String> = values
                    .iter()
                    .map(|v| format!("{column} = {}", v.to_literal()))
                    .collect();
                fragments.push(format!("({})", tests.join(" or ")));
            }
        }
    }
    for (column, patterns) in &spec.contains {
        let column = qualify(column);
        let tests: Vec<String> = patterns
            .iter()
            .map(|pattern| format!("{column} like {}", pattern.to_literal()))
            .collect();
        if tests.len() == 1 {
            fragments.push(tests.join(" or "));
        } else {
            fragments.push(format!("({})", tests.join(" or ")));
        }
    }
    format!("where {}", fragments.join(" and "))
}
