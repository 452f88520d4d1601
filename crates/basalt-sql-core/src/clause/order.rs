//! Order-by and limit/offset clause formatting.

use std::fmt;

/// Sort direction for an order-by group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Ordered groups of columns per direction.
///
/// Each group's columns are all emitted with the group's direction, and
/// groups appear in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBySpec {
    groups: Vec<(Direction, Vec<String>)>,
}

impl OrderBySpec {
    /// Creates an empty ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends columns sorted ascending.
    #[must_use]
    pub fn asc<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group(Direction::Asc, columns)
    }

    /// Appends columns sorted descending.
    #[must_use]
    pub fn desc<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group(Direction::Desc, columns)
    }

    /// Appends one direction group.
    #[must_use]
    pub fn group<I, S>(mut self, direction: Direction, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .push((direction, columns.into_iter().map(Into::into).collect()));
        self
    }

    /// Returns true when no group was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A row-count cap, optionally with an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSpec {
    /// `limit N`.
    Count(u64),
    /// `limit N offset M`, always in that order.
    CountOffset(u64, u64),
}

/// Formats `order by col1 dir1, col2 dir1, col3 dir2, ...`.
pub(crate) fn order_by_clause(spec: Option<&OrderBySpec>) -> String {
    let Some(spec) = spec else {
        return String::new();
    };
    if spec.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = spec
        .groups
        .iter()
        .flat_map(|(direction, columns)| {
            columns
                .iter()
                .map(move |column| format!("{column} {direction}"))
        })
        .collect();
    format!("order by {}", parts.join(", "))
}

/// Formats `limit N` or `limit N offset M`.
pub(crate) fn limit_clause(spec: Option<&LimitSpec>) -> String {
    match spec {
        None => String::new(),
        Some(LimitSpec::Count(count)) => format!("limit {count}"),
        Some(LimitSpec::CountOffset(count, offset)) => {
            format!("limit {count} offset {offset}")
        }
    }
}
