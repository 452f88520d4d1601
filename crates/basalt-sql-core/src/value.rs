//! Host values and their SQL-facing representations.
//!
//! Values travel in two directions: into a statement, where a value becomes
//! either a bound parameter or inline literal text, and out of a result row,
//! where the stored representation is mapped back to the host model using
//! the column's declared type.
//!
//! Storage follows the SQLite convention: booleans are stored as `1`/`0`
//! integers, structured values as JSON-encoded text.

use crate::schema::ColumnType;

/// A host-side value travelling into or out of a SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; renders as the literal `null`.
    Null,
    /// Boolean value; stored as `1`/`0`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Structured value; JSON-encoded when it crosses into storage.
    Json(serde_json::Value),
    /// Raw SQL fragment, inlined verbatim and never bound or quoted.
    ///
    /// Callers tag expressions such as `julianday('now')` explicitly with
    /// this variant; the engine performs no shape detection on strings.
    Expr(String),
}

impl Value {
    /// Converts a host value to its storage representation.
    ///
    /// Booleans become `1`/`0` integers; every other value passes through
    /// unchanged. `Null` stays `Null` and renders as the literal `null`.
    #[must_use]
    pub fn to_storage(self) -> Self {
        match self {
            Self::Bool(b) => Self::Int(i64::from(b)),
            other => other,
        }
    }

    /// Converts a stored value back to the host representation for `ty`.
    ///
    /// A `Json` column decodes stored text into a structured value
    /// (undecodable text passes through unchanged). A `Boolean` column maps
    /// `0` to `false` and any other present value to `true`; `Null` stays
    /// `Null` rather than inventing a boolean. Every other column type
    /// passes values through.
    #[must_use]
    pub fn to_host(self, ty: &ColumnType) -> Self {
        match ty {
            ColumnType::Boolean => match self {
                Self::Int(0) => Self::Bool(false),
                Self::Null => Self::Null,
                _ => Self::Bool(true),
            },
            ColumnType::Json => match self {
                Self::Text(text) => serde_json::from_str(&text)
                    .map_or_else(|_| Self::Text(text), Self::Json),
                other => other,
            },
            ColumnType::Other(_) => self,
        }
    }

    /// Renders the value as inline literal SQL text.
    ///
    /// Strings are wrapped in single quotes, or in double quotes when the
    /// text already contains a single quote. This is best-effort formatting
    /// for trusted input, not an escaping guarantee; values from untrusted
    /// sources must go through bound parameters instead.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(b) => String::from(if *b { "1" } else { "0" }),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => quote_text(s),
            Self::Json(json) => quote_text(&json.to_string()),
            Self::Expr(raw) => raw.clone(),
        }
    }

    /// Returns true when the value is inlined verbatim rather than bound.
    #[must_use]
    pub const fn is_expr(&self) -> bool {
        matches!(self, Self::Expr(_))
    }
}

fn quote_text(text: &str) -> String {
    if text.contains('\'') {
        format!("\"{text}\"")
    } else {
        format!("'{text}'")
    }
}

/// Trait for types that convert into a [`Value`].
pub trait ToValue {
    /// Converts the value to a [`Value`].
    fn to_value(self) -> Value;
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl ToValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ToValue for i64 {
    fn to_value(self) -> Value {
        Value::Int(self)
    }
}

impl ToValue for i32 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for i16 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for i8 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u32 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u16 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u8 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl ToValue for f32 {
    fn to_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToValue for serde_json::Value {
    fn to_value(self) -> Value {
        Value::Json(self)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}
