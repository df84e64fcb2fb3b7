//! Statement builder registry.
//!
//! [`Registry`] maps every [`StatementKind`] to its [`Builder`]: the arity
//! contract plus the formatter. The process-wide instance is built once on
//! first use and never mutated afterwards, so it can be shared freely across
//! threads.
//!
//! # Example
//!
//! ```rust
//! use sqlfill::{Registry, StatementKind};
//!
//! let registry = Registry::global();
//! let sql = registry
//!     .render(StatementKind::DropTable, &["a", "b", "c"])
//!     .unwrap();
//! assert_eq!(sql, "DROP TABLE IF EXISTS a, b, c;");
//!
//! // Callers relying on the empty-string convention:
//! assert_eq!(registry.render_or_empty(StatementKind::Not, &["a", "b"]), "");
//! ```

use crate::arity::Arity;
use crate::error::FillResult;
use crate::fill::{self, Filler};
use crate::kind::StatementKind;
use std::fmt;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// One template: its kind, arity contract and formatter.
#[derive(Clone, Copy)]
pub struct Builder {
    pub kind: StatementKind,
    pub arity: Arity,
    filler: Filler,
}

impl Builder {
    pub fn new(kind: StatementKind, arity: Arity, filler: Filler) -> Self {
        Self {
            kind,
            arity,
            filler,
        }
    }

    /// Check the argument count and render.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> FillResult<String> {
        fill::fill_request(self.kind, self.arity, self.filler, values)
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("kind", &self.kind)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from statement kind to builder.
#[derive(Debug, Clone)]
pub struct Registry {
    builders: [Builder; 13],
}

impl Registry {
    /// Build a registry holding the standard MySQL templates.
    pub fn new() -> Self {
        Self {
            builders: StatementKind::ALL
                .map(|kind| Builder::new(kind, kind.arity(), fill::filler(kind))),
        }
    }

    /// The shared process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Builder for `kind`.
    pub fn get(&self, kind: StatementKind) -> &Builder {
        // `builders` is laid out in `StatementKind::ALL` order.
        &self.builders[kind as usize]
    }

    /// All builders, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Builder> {
        self.builders.iter()
    }

    /// Render `kind` with `values`.
    pub fn render<S: AsRef<str>>(&self, kind: StatementKind, values: &[S]) -> FillResult<String> {
        self.get(kind).render(values)
    }

    /// Render `kind` with `values`, returning empty text on an arity violation.
    ///
    /// No valid rendering is ever empty, so `""` unambiguously means the call
    /// was malformed. Prefer [`Registry::render`] in new code.
    pub fn render_or_empty<S: AsRef<str>>(&self, kind: StatementKind, values: &[S]) -> String {
        self.render(kind, values).unwrap_or_default()
    }

    /// Render a kind given by name (see [`StatementKind`]'s `FromStr`).
    pub fn render_named<S: AsRef<str>>(&self, name: &str, values: &[S]) -> FillResult<String> {
        let kind: StatementKind = name.parse()?;
        self.render(kind, values)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `kind` with `values` through the global registry.
pub fn render<S: AsRef<str>>(kind: StatementKind, values: &[S]) -> FillResult<String> {
    Registry::global().render(kind, values)
}
