//! Argument-count contracts.
//!
//! Every statement template declares how many positional arguments it
//! accepts. [`Arity`] holds the inclusive lower bound and an optional
//! inclusive upper bound; `None` means the template is variadic.

use std::fmt;

/// Inclusive `[min, max]` range of accepted argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    /// Exactly `n` arguments.
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// Between `min` and `max` arguments (both inclusive).
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// At least `min` arguments, no upper bound.
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    /// Upper bound, `None` when unbounded.
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    pub const fn is_variadic(&self) -> bool {
        self.max.is_none()
    }

    /// Whether `len` arguments satisfy this contract.
    pub const fn accepts(&self, len: usize) -> bool {
        if len < self.min {
            return false;
        }
        match self.max {
            Some(max) => len <= max,
            None => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}
