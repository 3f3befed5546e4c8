use std::fmt;

use thiserror::Error;

use crate::{
    Bounds, Case, Geometry, Interval, IntervalError, Tag, classify,
    solve::{self, Config, Solution, SolveError},
};

/// Names one of the two intervals of `[A]x = [b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operand::A => "[A]",
            Operand::B => "[b]",
        })
    }
}

/// An input interval is malformed; nothing is computed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("invalid interval {operand}: {source}")]
pub struct InputError {
    pub operand: Operand,
    #[source]
    pub source: IntervalError,
}

/// The full input tuple of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Input {
    pub a: Bounds,
    pub b: Bounds,
    pub tag_a: Tag,
    pub tag_b: Tag,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            a: Bounds::new(1.0, 2.0),
            b: Bounds::new(4.0, 6.0),
            tag_a: Tag::Epistemic,
            tag_b: Tag::Ontic,
        }
    }
}

/// The result of evaluating one [`Input`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    pub a: Interval,
    pub b: Interval,
    pub tag_a: Tag,
    pub tag_b: Tag,
    pub case: Case,
    /// A defined solution, or the reason there is none.
    pub outcome: Result<Solution, SolveError>,
    pub geometry: Geometry,
}

impl Evaluation {
    /// Returns the solution interval if one is defined.
    #[must_use]
    pub fn solution(&self) -> Option<&Interval> {
        self.outcome.as_ref().ok().map(|sol| &sol.interval)
    }
}

/// Validates the input, classifies it, solves it, and derives its geometry.
///
/// An empty or unsupported outcome is part of the returned [`Evaluation`].
///
/// # Errors
///
/// Returns an [`InputError`] if either interval is malformed.
pub fn evaluate(input: &Input, config: &Config) -> Result<Evaluation, InputError> {
    let a = input.a.to_interval().map_err(|source| InputError {
        operand: Operand::A,
        source,
    })?;
    let b = input.b.to_interval().map_err(|source| InputError {
        operand: Operand::B,
        source,
    })?;

    let case = classify(input.tag_a, input.tag_b);
    let outcome = solve::solve(a, b, case, config);
    let geometry = Geometry::derive(a, b, outcome.as_ref().ok().map(|sol| &sol.interval));

    match &outcome {
        Ok(sol) => tracing::debug!(
            case = case.number(),
            %a,
            %b,
            solution = %sol.interval,
            "solved interval equation"
        ),
        Err(err) => tracing::debug!(
            case = case.number(),
            %a,
            %b,
            reason = %err,
            "interval equation has no solution"
        ),
    }

    Ok(Evaluation {
        a,
        b,
        tag_a: input.tag_a,
        tag_b: input.tag_b,
        case,
        outcome,
        geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::solve::{EmptySolution, UnsupportedDomain};

    #[test]
    fn default_input_is_robust_and_empty() {
        let evaluation = evaluate(&Input::default(), &Config::default()).expect("valid input");

        assert_eq!(evaluation.case, Case::Robust);
        assert!(matches!(
            evaluation.outcome,
            Err(SolveError::Empty(EmptySolution::ImproperTolerance { .. }))
        ));
        assert!(evaluation.solution().is_none());
        assert!(evaluation.geometry.solution.is_none());
    }

    #[test]
    fn withholds_computation_for_inverted_a() {
        let input = Input {
            a: Bounds::new(3.0, 1.0),
            ..Input::default()
        };
        let err = evaluate(&input, &Config::default()).unwrap_err();
        assert_eq!(err.operand, Operand::A);
        assert!(matches!(err.source, IntervalError::Inverted { .. }));
    }

    #[test]
    fn withholds_computation_for_inverted_b() {
        let input = Input {
            b: Bounds::new(6.0, 4.0),
            ..Input::default()
        };
        let err = evaluate(&input, &Config::default()).unwrap_err();
        assert_eq!(err.operand, Operand::B);
        assert!(err.to_string().starts_with("invalid interval [b]"));
    }

    #[test]
    fn unsupported_domain_still_has_geometry() {
        let input = Input {
            a: Bounds::new(-1.0, 2.0),
            ..Input::default()
        };
        let evaluation = evaluate(&input, &Config::default()).expect("valid input");

        assert!(matches!(
            evaluation.outcome,
            Err(SolveError::Unsupported(
                UnsupportedDomain::CoefficientContainsZero { .. }
            ))
        ));
        assert!(evaluation.geometry.solution.is_none());
    }

    #[test]
    fn defined_solution_gets_marks() {
        let input = Input {
            tag_b: Tag::Epistemic,
            ..Input::default()
        };
        let evaluation = evaluate(&input, &Config::default()).expect("valid input");

        assert_eq!(evaluation.case, Case::United);
        assert!(evaluation.solution().is_some());
        assert!(evaluation.geometry.solution.is_some());
    }
}
