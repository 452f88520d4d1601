//! Create-table column definitions.

use crate::value::Value;

/// Referential action for a foreign key constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict the update or deletion.
    Restrict,
    /// Cascade the operation to referencing rows.
    Cascade,
    /// Set the referencing column to null.
    SetNull,
    /// Set the referencing column to its default.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL fragment for the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "no action",
            Self::Restrict => "restrict",
            Self::Cascade => "cascade",
            Self::SetNull => "set null",
            Self::SetDefault => "set default",
        }
    }
}

/// A full column definition with optional constraints.
///
/// Nullable by default; absence of an explicit [`ColumnDef::not_null`] call
/// means the column accepts nulls.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    type_name: String,
    unique: bool,
    nullable: bool,
    primary_key: bool,
    default: Option<Value>,
    reference: Option<String>,
    on_update: Option<ForeignKeyAction>,
    on_delete: Option<ForeignKeyAction>,
}

impl ColumnDef {
    /// Creates a definition with the given SQL type.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            unique: false,
            nullable: true,
            primary_key: false,
            default: None,
            reference: None,
            on_update: None,
            on_delete: None,
        }
    }

    /// Marks the column unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the column not null.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets a default value, rendered as a literal.
    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// References another table's column, given as `"table.column"`.
    #[must_use]
    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.reference = Some(target.into());
        self
    }

    /// Sets the action taken when the referenced row is updated.
    #[must_use]
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Sets the action taken when the referenced row is deleted.
    #[must_use]
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}

/// One column in a create-table description.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSpec {
    /// Shorthand for `integer not null primary key`.
    IntegerPrimaryKey,
    /// A bare SQL type, emitted as `<name> <type>`.
    Type(String),
    /// A full definition with constraints.
    Def(ColumnDef),
}

/// Formats one column definition of a create-table statement.
///
/// Constraint fragments keep a fixed order: type, unique, not-null,
/// primary-key, default, references, on-update, on-delete.
pub(crate) fn column_def_clause(name: &str, spec: &ColumnSpec) -> String {
    match spec {
        ColumnSpec::IntegerPrimaryKey => format!("{name} integer not null primary key"),
        ColumnSpec::Type(type_name) => format!("{name} {type_name}"),
        ColumnSpec::Def(def) => {
            let mut fragments = vec![name.to_string(), def.type_name.clone()];
            if def.unique {
                fragments.push(String::from("unique"));
            }
            if !def.nullable {
                fragments.push(String::from("not null"));
            }
            if def.primary_key {
                fragments.push(String::from("primary key"));
            }
            if let Some(default) = &def.default {
                fragments.push(format!("default {}", default.to_literal()));
            }
            if let Some(reference) = &def.reference {
                fragments.push(format!("references {}", reference_target(reference)));
            }
            if let Some(action) = def.on_update {
                fragments.push(format!("on update {}", action.as_sql()));
            }
            if let Some(action) = def.on_delete {
                fragments.push(format!("on delete {}", action.as_sql()));
            }
            fragments.join(" ")
        }
    }
}

/// Rewrites a `table.column` target into `table(column)`.
fn reference_target(target: &str) -> String {
    match target.split_once('.') {
        Some((table, column)) => format!("{table}({column})"),
        None => target.to_string(),
    }
}
