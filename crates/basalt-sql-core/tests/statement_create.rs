//! Tests for create-table and drop-table assembly: column shorthand,
//! constraint ordering, foreign keys, and the if-not-exists option.

use basalt_sql_core::{
    create, drop, ColumnDef, ColumnSpec, CreateOptions, ForeignKeyAction, Value,
};

#[test]
fn create_with_shorthand_columns() {
    let sql = create(
        "t",
        &CreateOptions::new()
            .column("id", ColumnSpec::IntegerPrimaryKey)
            .column("name", ColumnSpec::Type("text".into())),
    );
    assert_eq!(
        sql,
        "create table t(id integer not null primary key, name text)"
    );
}

#[test]
fn create_if_not_exists() {
    let sql = create(
        "t",
        &CreateOptions::new()
            .if_not_exists()
            .column("id", ColumnSpec::IntegerPrimaryKey),
    );
    assert_eq!(
        sql,
        "create table if not exists t(id integer not null primary key)"
    );
}

#[test]
fn create_with_constraints_in_fixed_order() {
    let sql = create(
        "users",
        &CreateOptions::new()
            .column("id", ColumnSpec::IntegerPrimaryKey)
            .column(
                "email",
                ColumnSpec::Def(ColumnDef::new("text").unique().not_null()),
            )
            .column(
                "role",
                ColumnSpec::Def(
                    ColumnDef::new("text").default_value(Value::Text("guest".into())),
                ),
            ),
    );
    assert_eq!(
        sql,
        "create table users(id integer not null primary key, \
         email text unique not null, role text default 'guest')"
    );
}

#[test]
fn create_with_foreign_key_actions() {
    let sql = create(
        "posts",
        &CreateOptions::new()
            .column("id", ColumnSpec::IntegerPrimaryKey)
            .column(
                "author_id",
                ColumnSpec::Def(
                    ColumnDef::new("integer")
                        .not_null()
                        .references("users.id")
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::SetNull),
                ),
            ),
    );
    assert_eq!(
        sql,
        "create table posts(id integer not null primary key, \
         author_id integer not null references users(id) \
         on update cascade on delete set null)"
    );
}

#[test]
fn drop_table() {
    assert_eq!(drop("t"), "drop table t");
}
