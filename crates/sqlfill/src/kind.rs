//! Statement kinds.
//!
//! [`StatementKind`] names one of the thirteen templates. The canonical name
//! is the upper-case form used in MySQL (`CREATE_TABLE`, `INSERT_INTO`, ...).

use crate::arity::Arity;
use crate::error::{FillError, FillResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which template a builder applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementKind {
    /// Go-MySQL-Driver data source: `user:password@tcp(host:port)/db`
    Open,
    /// `SELECT expr FROM table [WHERE cond];`
    Select,
    /// `CREATE TABLE IF NOT EXISTS name(cols...) ENGINE=engine;`
    CreateTable,
    /// `DROP TABLE IF EXISTS tables...;`
    DropTable,
    /// `INSERT INTO table(columns) VALUES(...), ...;`
    InsertInto,
    /// `DELETE FROM table WHERE cond;`
    Delete,
    /// `(query) AS alias;`
    As,
    /// `(op1 AND op2)`
    And,
    /// `(op1 OR op2)`
    Or,
    /// `(NOT op)`
    Not,
    /// `(expr REGEXP pattern)`
    Regexp,
    /// `SET expr;`
    Set,
    /// `UPDATE table SET expr;`
    Update,
}

impl StatementKind {
    /// All kinds, in declaration order.
    pub const ALL: [StatementKind; 13] = [
        StatementKind::Open,
        StatementKind::Select,
        StatementKind::CreateTable,
        StatementKind::DropTable,
        StatementKind::InsertInto,
        StatementKind::Delete,
        StatementKind::As,
        StatementKind::And,
        StatementKind::Or,
        StatementKind::Not,
        StatementKind::Regexp,
        StatementKind::Set,
        StatementKind::Update,
    ];

    /// Canonical upper-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            StatementKind::Open => "OPEN",
            StatementKind::Select => "SELECT",
            StatementKind::CreateTable => "CREATE_TABLE",
            StatementKind::DropTable => "DROP_TABLE",
            StatementKind::InsertInto => "INSERT_INTO",
            StatementKind::Delete => "DELETE",
            StatementKind::As => "AS",
            StatementKind::And => "AND",
            StatementKind::Or => "OR",
            StatementKind::Not => "NOT",
            StatementKind::Regexp => "REGEXP",
            StatementKind::Set => "SET",
            StatementKind::Update => "UPDATE",
        }
    }

    /// Argument-count contract of this kind.
    pub const fn arity(&self) -> Arity {
        match self {
            StatementKind::Open => Arity::exactly(5),
            StatementKind::Select => Arity::between(2, 3),
            StatementKind::CreateTable => Arity::at_least(3),
            StatementKind::DropTable => Arity::at_least(1),
            StatementKind::InsertInto => Arity::at_least(3),
            StatementKind::Delete => Arity::exactly(2),
            StatementKind::As => Arity::exactly(2),
            StatementKind::And => Arity::exactly(2),
            StatementKind::Or => Arity::exactly(2),
            StatementKind::Not => Arity::exactly(1),
            StatementKind::Regexp => Arity::exactly(2),
            StatementKind::Set => Arity::exactly(1),
            StatementKind::Update => Arity::exactly(2),
        }
    }

    /// Render this kind through the global registry.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> FillResult<String> {
        crate::registry::Registry::global().render(*self, values)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatementKind {
    type Err = FillError;

    /// Case-insensitive; `-` and spaces are accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        StatementKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| FillError::UnknownKind(s.to_string()))
    }
}
