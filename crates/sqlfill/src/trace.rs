//! `tracing` events for rendered statements.
//!
//! Enable via the crate feature: `sqlfill = { features = ["tracing"] }`.
//! Without it these hooks are empty and compile away.

use crate::arity::Arity;
use crate::kind::StatementKind;
use std::borrow::Cow;

/// Rendered SQL longer than this (in bytes) is truncated in log events.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) const MAX_SQL_LOG_LENGTH: usize = 200;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// SQL as it appears in log events: at most `MAX_SQL_LOG_LENGTH` bytes, with
/// `...` appended when anything was cut.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn log_sql(sql: &str) -> Cow<'_, str> {
    let truncated = truncate_sql_bytes(sql, MAX_SQL_LOG_LENGTH);
    if truncated.len() < sql.len() {
        Cow::Owned(format!("{truncated}..."))
    } else {
        Cow::Borrowed(sql)
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(kind: StatementKind, arg_count: usize, sql: &str) {
    if !tracing::enabled!(target: "sqlfill.sql", tracing::Level::DEBUG) {
        return;
    }
    tracing::debug!(target: "sqlfill.sql", kind = %kind, arg_count, sql = %log_sql(sql));
}

#[cfg(feature = "tracing")]
pub(crate) fn rejected(kind: StatementKind, expected: Arity, got: usize) {
    tracing::warn!(
        target: "sqlfill.sql",
        kind = %kind,
        expected = %expected,
        got,
        "arity violation, nothing rendered"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn rendered(_kind: StatementKind, _arg_count: usize, _sql: &str) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn rejected(_kind: StatementKind, _expected: Arity, _got: usize) {}
