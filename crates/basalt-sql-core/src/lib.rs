//! # basalt-sql-core
//!
//! A SQL statement synthesis engine: a declarative description of an
//! operation in, SQL text and named bindings out.
//!
//! The crate turns a table name plus an options structure into one
//! statement per operation kind (select, insert, update, delete, create,
//! drop), and ships a value-coercion layer that maps host values to a SQL
//! engine's storage representation and back: booleans become `1`/`0`,
//! structured values become JSON-encoded text.
//!
//! Everything here is a pure, synchronous transformation over immutable
//! inputs. Nothing executes SQL, opens connections, or checks that tables
//! and columns exist — that is the calling layer's job.
//!
//! ## Building statements
//!
//! ```rust
//! use basalt_sql_core::{select, SelectOptions, WhereSpec};
//!
//! let sql = select(
//!     "users",
//!     &SelectOptions::new()
//!         .columns(["id", "name"])
//!         .filter(WhereSpec::new().eq("id", 1)),
//! )?;
//! assert_eq!(sql, "select id, name from users where id = 1");
//! # Ok::<(), basalt_sql_core::Error>(())
//! ```
//!
//! ## Inserting with named bindings
//!
//! Insert values travel as named placeholders; the returned bindings are
//! already storage-coerced and ready to bind against the statement.
//!
//! ```rust
//! use basalt_sql_core::{insert, Record, Rows, Value};
//!
//! let mut row = Record::new();
//! row.insert("name".into(), Value::Text("Bob".into()));
//! row.insert("active".into(), Value::Bool(true));
//!
//! let stmt = insert("users", &Rows::Single(row))?;
//! assert_eq!(stmt.sql, "insert into users (name, active) values(:name, :active)");
//! assert_eq!(stmt.bindings[0]["active"], Value::Int(1));
//! # Ok::<(), basalt_sql_core::Error>(())
//! ```
//!
//! ## Literal rendering
//!
//! Where conditions and update assignments render their values as inline
//! literals, with best-effort quoting only (a string containing a single
//! quote flips to double quotes). That is a documented limitation: route
//! untrusted input through insert bindings, never through literals.

pub mod clause;
pub mod error;
pub mod pipeline;
pub mod row;
pub mod schema;
pub mod statement;
pub mod value;

pub use clause::{
    ColumnDef, ColumnSpec, Direction, ForeignKeyAction, JoinSpec, LimitSpec, OrderBySpec,
    WhereSpec, WhereValue,
};
pub use error::{Error, Result};
pub use pipeline::{post_select, pre_insert};
pub use row::{Record, Rows};
pub use schema::{ColumnType, TableSchema};
pub use statement::{
    create, delete, drop, insert, select, update, CreateOptions, DeleteOptions, SelectOptions,
    Statement, UpdateOptions,
};
pub use value::{ToValue, Value};
