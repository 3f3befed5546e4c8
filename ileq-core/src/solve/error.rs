use thiserror::Error;

use crate::{Case, Interval};

/// The inputs fall outside the domain the closed-form formulas cover.
///
/// Only `A > 0` and `b >= 0` are solved.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnsupportedDomain {
    #[error(
        "[A] = {a} contains zero; the solution may be unbounded or a union of intervals, \
         which is not handled here"
    )]
    CoefficientContainsZero { a: Interval },

    #[error(
        "only A > 0 and b >= 0 are supported, got [A] = {a} and [b] = {b}; \
         other sign combinations are not handled here"
    )]
    NegativeBounds { a: Interval, b: Interval },
}

/// A case-specific infeasibility: the solution set is empty.
///
/// Each variant carries the improper bounds its case formula produced.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EmptySolution {
    #[error("empty solution set: the tolerance formula gives the improper interval [{lower}, {upper}]")]
    ImproperTolerance { lower: f64, upper: f64 },

    #[error("empty solution set: no x covers all of [b] (control bounds [{lower}, {upper}])")]
    NoControl { lower: f64, upper: f64 },

    #[error(
        "empty solution set: ontic equality is too strict \
         (tolerance bounds {tolerance:?} differ from control bounds {control:?})"
    )]
    StrictEquality {
        tolerance: [f64; 2],
        control: [f64; 2],
    },
}

impl EmptySolution {
    /// Returns the case whose formula produced this outcome.
    #[must_use]
    pub fn case(&self) -> Case {
        match self {
            Self::ImproperTolerance { .. } => Case::Robust,
            Self::NoControl { .. } => Case::Control,
            Self::StrictEquality { .. } => Case::Classical,
        }
    }
}

/// Errors that can occur when solving an interval equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolveError {
    #[error("unsupported domain: {0}")]
    Unsupported(#[from] UnsupportedDomain),

    #[error(transparent)]
    Empty(#[from] EmptySolution),

    #[error("solution bounds [{lower}, {upper}] are not finite")]
    NonFinite { lower: f64, upper: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
