//! # sqlfill
//!
//! Arity-checked MySQL statement templates.
//!
//! ## Features
//!
//! - **Positional templates**: SELECT, CREATE TABLE, DROP TABLE, INSERT INTO,
//!   DELETE, UPDATE, SET, sub-query aliases, and the AND/OR/NOT/REGEXP predicates
//! - **Arity checks**: every template declares how many arguments it takes;
//!   a wrong count is a [`FillError::Arity`], never a half-built statement
//! - **Connection strings**: OPEN renders a Go-MySQL-Driver data source,
//!   [`DataSource`] is its typed, deserializable form
//! - **No parsing, no escaping**: arguments are spliced in verbatim, so the
//!   caller owns quoting and injection safety
//!
//! ## Usage
//!
//! ```rust
//! use sqlfill::{StatementKind, fill, render};
//!
//! let cond = fill::and(&["age > 18", "active = 1"])?;
//! let sql = fill::select(&["id, name", "users", cond.as_str()])?;
//! assert_eq!(sql, "SELECT id, name FROM users WHERE (age > 18 AND active = 1);");
//!
//! let sql = render(StatementKind::CreateTable, &["users", "id INT", "name TEXT", "InnoDB"])?;
//! assert_eq!(sql, "CREATE TABLE IF NOT EXISTS users(id INT, name TEXT) ENGINE=InnoDB;");
//! # Ok::<(), sqlfill::FillError>(())
//! ```

pub mod arity;
pub mod datasource;
pub mod error;
pub mod fill;
pub mod kind;
pub mod registry;

mod trace;

pub use arity::Arity;
pub use datasource::DataSource;
pub use error::{FillError, FillResult};
pub use fill::Filler;
pub use kind::StatementKind;
pub use registry::{Builder, Registry, render};
