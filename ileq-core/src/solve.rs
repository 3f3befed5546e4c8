//! Closed-form solutions of `[A]x = [b]` for positive coefficients.
//!
//! Case 1 assumes inclusion semantics, `[A]x ⊆ [b]`: every `a` in `[A]` must
//! satisfy `b_min <= a·x <= b_max`, giving `[b_min/a_min, b_max/a_max]`.
//! The cited paper's exact convention for this case is uncertain; the bounds
//! follow from the inclusion reading rather than from its printed formula.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::{EmptySolution, SolveError, UnsupportedDomain};
pub use solution::{Formula, Solution};

use crate::{Case, Interval};

/// Solves `a·x = b` under the reading selected by `case`.
///
/// # Errors
///
/// Returns [`SolveError::Unsupported`] unless `a_min > 0` and `b_min >= 0`,
/// [`SolveError::Empty`] when the case admits no solution,
/// [`SolveError::NonFinite`] if a quotient overflows,
/// and [`SolveError::InvalidConfig`] if the config is invalid.
pub fn solve(
    a: Interval,
    b: Interval,
    case: Case,
    config: &Config,
) -> Result<Solution, SolveError> {
    config
        .validate()
        .map_err(|reason| SolveError::InvalidConfig { reason })?;

    check_domain(a, b)?;

    match case {
        Case::Robust => {
            let [lower, upper] = finite(candidate(a, b, Case::Robust))?;
            if lower > upper {
                return Err(EmptySolution::ImproperTolerance { lower, upper }.into());
            }
            Ok(Solution {
                interval: ordered(lower, upper)?,
                formula: Formula::Tolerance,
            })
        }
        Case::Control => {
            let [lower, upper] = finite(candidate(a, b, Case::Control))?;
            if lower > upper {
                return Err(EmptySolution::NoControl { lower, upper }.into());
            }
            Ok(Solution {
                interval: ordered(lower, upper)?,
                formula: Formula::Control,
            })
        }
        Case::Classical => {
            let tolerance = finite(candidate(a, b, Case::Robust))?;
            let control = finite(candidate(a, b, Case::Control))?;

            let coincide = config.coincide(tolerance[0], control[0])
                && config.coincide(tolerance[1], control[1]);
            if !coincide {
                return Err(EmptySolution::StrictEquality { tolerance, control }.into());
            }

            // Within tolerance the tolerance bounds may still be slightly improper.
            let [x, y] = tolerance;
            Ok(Solution {
                interval: ordered(x.min(y), x.max(y))?,
                formula: Formula::Point,
            })
        }
        Case::United => {
            let [lower, upper] = finite(candidate(a, b, Case::United))?;
            Ok(Solution {
                interval: ordered(lower, upper)?,
                formula: Formula::United,
            })
        }
    }
}

/// Returns the raw `[lower, upper]` bounds a case formula produces.
///
/// The result may be improper (`lower > upper`). Case 3 has no formula of
/// its own and reports the Case 1 bounds.
#[must_use]
pub fn candidate(a: Interval, b: Interval, case: Case) -> [f64; 2] {
    let [a_min, a_max] = a.as_array();
    let [b_min, b_max] = b.as_array();

    match case {
        Case::Robust | Case::Classical => [b_min / a_min, b_max / a_max],
        Case::Control => [b_max / a_max, b_min / a_min],
        Case::United => [b_min / a_max, b_max / a_min],
    }
}

/// Checks the sign preconditions shared by every case.
///
/// # Errors
///
/// Returns an [`UnsupportedDomain`] describing the first violated condition.
pub fn check_domain(a: Interval, b: Interval) -> Result<(), UnsupportedDomain> {
    if a.contains_zero() {
        return Err(UnsupportedDomain::CoefficientContainsZero { a });
    }
    if a.lower() <= 0.0 || b.lower() < 0.0 {
        return Err(UnsupportedDomain::NegativeBounds { a, b });
    }
    Ok(())
}

fn finite(bounds: [f64; 2]) -> Result<[f64; 2], SolveError> {
    let [lower, upper] = bounds;
    if lower.is_finite() && upper.is_finite() {
        Ok(bounds)
    } else {
        Err(SolveError::NonFinite { lower, upper })
    }
}

/// Builds an interval from bounds already known to be finite and ordered.
fn ordered(lower: f64, upper: f64) -> Result<Interval, SolveError> {
    Interval::new(lower, upper).map_err(|_| SolveError::NonFinite { lower, upper })
}
