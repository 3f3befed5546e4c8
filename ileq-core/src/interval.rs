use std::fmt;

use thiserror::Error;

/// Errors that can occur when constructing an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IntervalError {
    /// One or both bounds are NaN or infinite.
    #[error("bounds must be finite, got [{lower}, {upper}]")]
    NonFinite { lower: f64, upper: f64 },
    /// The lower bound exceeds the upper bound.
    #[error("minimum {lower} is greater than maximum {upper}")]
    Inverted { lower: f64, upper: f64 },
}

/// A closed interval of finite reals with `lower <= upper`.
///
/// Equal bounds denote a degenerate (point) interval.
///
/// # Example
///
/// ```
/// use ileq_core::Interval;
///
/// let a = Interval::new(1.0, 2.0).unwrap();
/// assert_eq!(a.width(), 1.0);
/// assert!(Interval::new(2.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if either bound is NaN or infinite,
    /// and [`IntervalError::Inverted`] if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite { lower, upper });
        }
        if lower > upper {
            return Err(IntervalError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Creates a degenerate interval `[value, value]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if `value` is NaN or infinite.
    pub fn point(value: f64) -> Result<Self, IntervalError> {
        Self::new(value, value)
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the bounds as `[lower, upper]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns true if both bounds are equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns true if zero lies in the interval, including at a bound.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}]", self.lower, self.upper),
            None => write!(f, "[{}, {}]", self.lower, self.upper),
        }
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([lower, upper]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

/// Raw interval bounds as entered by a user, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validates the bounds into an [`Interval`].
    ///
    /// # Errors
    ///
    /// Returns an [`IntervalError`] if the bounds do not form a valid interval.
    pub fn to_interval(self) -> Result<Interval, IntervalError> {
        Interval::new(self.min, self.max)
    }
}

impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Self::new(interval.lower, interval.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_bounds() {
        let interval = Interval::new(1.0, 2.5).expect("valid interval");
        assert_relative_eq!(interval.lower(), 1.0);
        assert_relative_eq!(interval.upper(), 2.5);
        assert_relative_eq!(interval.width(), 1.5);
        assert_relative_eq!(interval.midpoint(), 1.75);
        assert!(!interval.is_degenerate());
    }

    #[test]
    fn accepts_point_interval() {
        let interval = Interval::point(3.0).expect("valid point");
        assert!(interval.is_degenerate());
        assert_relative_eq!(interval.width(), 0.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            Interval::new(2.0, 1.0),
            Err(IntervalError::Inverted { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite { .. })
        ));
    }

    #[test]
    fn detects_zero() {
        assert!(Interval::new(-1.0, 2.0).unwrap().contains_zero());
        assert!(Interval::new(0.0, 2.0).unwrap().contains_zero());
        assert!(!Interval::new(0.5, 2.0).unwrap().contains_zero());
        assert!(!Interval::new(-2.0, -0.5).unwrap().contains_zero());
    }

    #[test]
    fn displays_with_optional_precision() {
        let interval = Interval::new(1.5, 2.0).unwrap();
        assert_eq!(interval.to_string(), "[1.5, 2]");
        assert_eq!(format!("{interval:.4}"), "[1.5000, 2.0000]");
    }

    #[test]
    fn bounds_validate_into_interval() {
        assert!(Bounds::new(4.0, 6.0).to_interval().is_ok());
        assert!(Bounds::new(6.0, 4.0).to_interval().is_err());
    }
}
