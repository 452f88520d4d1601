//! Stateless clause formatters.
//!
//! One formatter per clause kind, each a pure function over its slice of the
//! statement options. A formatter given absent input returns an empty
//! string, which the assembler reads as "omit this clause".

mod column_def;
mod filter;
mod join;
mod order;
mod row;

pub use column_def::{ColumnDef, ColumnSpec, ForeignKeyAction};
pub use filter::{WhereSpec, WhereValue};
pub use join::JoinSpec;
pub use order::{Direction, LimitSpec, OrderBySpec};

pub(crate) use column_def::column_def_clause;
pub(crate) use filter::where_clause;
pub(crate) use join::join_clause;
pub(crate) use order::{limit_clause, order_by_clause};
pub(crate) use row::{columns_clause, set_clause, values_clause};
