//! Statement templates.
//!
//! Each template is a plain formatter over positional string arguments. The
//! formatters never inspect their inputs: table names, predicates and values
//! are spliced in verbatim, so callers are responsible for escaping.
//!
//! # Example
//!
//! ```rust
//! use sqlfill::fill;
//!
//! let sql = fill::select(&["id, name", "users", "id = 1"]).unwrap();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE id = 1;");
//!
//! // Wrong argument count is an error, never a partial statement.
//! assert!(fill::delete(&["users"]).is_err());
//! ```

use crate::arity::Arity;
use crate::error::{FillError, FillResult};
use crate::kind::StatementKind;
use crate::trace;

/// A formatter over arguments already known to satisfy its arity.
pub type Filler = fn(&[&str]) -> String;

/// Run `filler` if `values` satisfies `arity`, otherwise report the violation.
pub(crate) fn fill_request<S: AsRef<str>>(
    kind: StatementKind,
    arity: Arity,
    filler: Filler,
    values: &[S],
) -> FillResult<String> {
    if !arity.accepts(values.len()) {
        trace::rejected(kind, arity, values.len());
        return Err(FillError::arity(kind, arity, values.len()));
    }

    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    let sql = filler(&values);
    trace::rendered(kind, values.len(), &sql);
    Ok(sql)
}

/// Append each item as `{prefix}{item}{suffix}`, keeping input order.
fn push_joined(out: &mut String, items: &[&str], prefix: &str, suffix: &str) {
    for item in items {
        out.push_str(prefix);
        out.push_str(item);
        out.push_str(suffix);
    }
}

// ==================== Formatters ====================

pub(crate) fn fill_open(values: &[&str]) -> String {
    match values {
        [user, password, host, port, db_name] => {
            format!("{user}:{password}@tcp({host}:{port})/{db_name}")
        }
        _ => String::new(),
    }
}

pub(crate) fn fill_select(values: &[&str]) -> String {
    match values {
        [expr, table] => format!("SELECT {expr} FROM {table};"),
        [expr, table, cond] => format!("SELECT {expr} FROM {table} WHERE {cond};"),
        _ => String::new(),
    }
}

pub(crate) fn fill_create_table(values: &[&str]) -> String {
    let [name, first, columns @ .., engine] = values else {
        return String::new();
    };

    let mut sql = format!("CREATE TABLE IF NOT EXISTS {name}({first}");
    push_joined(&mut sql, columns, ", ", "");
    sql.push_str(") ENGINE=");
    sql.push_str(engine);
    sql.push(';');
    sql
}

pub(crate) fn fill_drop_table(values: &[&str]) -> String {
    let [first, tables @ ..] = values else {
        return String::new();
    };

    let mut sql = format!("DROP TABLE IF EXISTS {first}");
    push_joined(&mut sql, tables, ", ", "");
    sql.push(';');
    sql
}

pub(crate) fn fill_insert_into(values: &[&str]) -> String {
    let [table, columns, first, rows @ ..] = values else {
        return String::new();
    };

    let mut sql = format!("INSERT INTO {table}({columns}) VALUES({first})");
    push_joined(&mut sql, rows, ", (", ")");
    sql.push(';');
    sql
}

pub(crate) fn fill_delete(values: &[&str]) -> String {
    match values {
        [table, cond] => format!("DELETE FROM {table} WHERE {cond};"),
        _ => String::new(),
    }
}

pub(crate) fn fill_as(values: &[&str]) -> String {
    match values {
        [query, alias] => {
            let query = query.strip_suffix(';').unwrap_or(*query);
            format!("({query}) AS {alias};")
        }
        _ => String::new(),
    }
}

pub(crate) fn fill_and(values: &[&str]) -> String {
    match values {
        [lhs, rhs] => format!("({lhs} AND {rhs})"),
        _ => String::new(),
    }
}

pub(crate) fn fill_or(values: &[&str]) -> String {
    match values {
        [lhs, rhs] => format!("({lhs} OR {rhs})"),
        _ => String::new(),
    }
}

pub(crate) fn fill_not(values: &[&str]) -> String {
    match values {
        [operand] => format!("(NOT {operand})"),
        _ => String::new(),
    }
}

pub(crate) fn fill_regexp(values: &[&str]) -> String {
    match values {
        [expr, pattern] => format!("({expr} REGEXP {pattern})"),
        _ => String::new(),
    }
}

pub(crate) fn fill_set(values: &[&str]) -> String {
    match values {
        [expr] => format!("SET {expr};"),
        _ => String::new(),
    }
}

pub(crate) fn fill_update(values: &[&str]) -> String {
    match values {
        [table, expr] => format!("UPDATE {table} SET {expr};"),
        _ => String::new(),
    }
}

/// Formatter for `kind`.
pub(crate) fn filler(kind: StatementKind) -> Filler {
    match kind {
        StatementKind::Open => fill_open,
        StatementKind::Select => fill_select,
        StatementKind::CreateTable => fill_create_table,
        StatementKind::DropTable => fill_drop_table,
        StatementKind::InsertInto => fill_insert_into,
        StatementKind::Delete => fill_delete,
        StatementKind::As => fill_as,
        StatementKind::And => fill_and,
        StatementKind::Or => fill_or,
        StatementKind::Not => fill_not,
        StatementKind::Regexp => fill_regexp,
        StatementKind::Set => fill_set,
        StatementKind::Update => fill_update,
    }
}

// ==================== Public builders ====================

fn fill_kind<S: AsRef<str>>(kind: StatementKind, values: &[S]) -> FillResult<String> {
    fill_request(kind, kind.arity(), filler(kind), values)
}

/// Data source for the Go-MySQL-Driver.
///
/// values: `[user, password, host, port, db_name]`
///
/// result: `user:password@tcp(host:port)/db_name`
pub fn open<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Open, values)
}

/// Basic SELECT statement.
///
/// values: `[select_expr, table_reference]` or
/// `[select_expr, table_reference, where_condition]`
pub fn select<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Select, values)
}

/// CREATE TABLE statement.
///
/// values: `[table_name, column1, ..., columnN, engine_name]` (at least one column)
///
/// result: `CREATE TABLE IF NOT EXISTS table_name(column1, ..., columnN) ENGINE=engine_name;`
pub fn create_table<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::CreateTable, values)
}

/// DROP TABLE statement over one or more tables.
pub fn drop_table<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::DropTable, values)
}

/// INSERT INTO statement with one or more value tuples.
///
/// values: `[table_name, columns, values1, ..., valuesN]`
///
/// result: `INSERT INTO table_name(columns) VALUES(values1), ..., (valuesN);`
pub fn insert_into<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::InsertInto, values)
}

/// `DELETE FROM table WHERE cond;`
pub fn delete<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Delete, values)
}

/// Alias a sub-query: `(query) AS alias;`.
///
/// A single trailing `;` on the query is dropped before wrapping.
pub fn as_alias<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::As, values)
}

pub fn and<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::And, values)
}

pub fn or<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Or, values)
}

pub fn not<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Not, values)
}

pub fn regexp<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Regexp, values)
}

pub fn set<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Set, values)
}

/// `UPDATE table SET expr;`
pub fn update<S: AsRef<str>>(values: &[S]) -> FillResult<String> {
    fill_kind(StatementKind::Update, values)
}

#[cfg(test)]
mod tests;
