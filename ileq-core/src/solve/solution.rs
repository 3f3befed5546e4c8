use std::fmt;

use crate::Interval;

/// The closed-form expression that produced a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Formula {
    /// `[b_min/a_min, b_max/a_max]`
    Tolerance,
    /// `[b_max/a_max, b_min/a_min]`
    Control,
    /// Tolerance and control bounds coincide in a single point.
    Point,
    /// `[b_min/a_max, b_max/a_min]`
    United,
}

impl Formula {
    /// Returns the formula as LaTeX markup.
    #[must_use]
    pub fn latex(self) -> &'static str {
        match self {
            Formula::Tolerance => {
                r"x \in \left[ \frac{\underline{b}}{\underline{a}}, \frac{\overline{b}}{\overline{a}} \right]"
            }
            Formula::Control => {
                r"x \in \left[ \frac{\overline{b}}{\overline{a}}, \frac{\underline{b}}{\underline{a}} \right]"
            }
            Formula::Point => r"\text{point solution (rare)}",
            Formula::United => {
                r"x \in \left[ \frac{\underline{b}}{\overline{a}}, \frac{\overline{b}}{\underline{a}} \right]"
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Formula::Tolerance => "x ∈ [b_min/a_min, b_max/a_max]",
            Formula::Control => "x ∈ [b_max/a_max, b_min/a_min]",
            Formula::Point => "point solution (rare)",
            Formula::United => "x ∈ [b_min/a_max, b_max/a_min]",
        })
    }
}

/// A defined solution of an interval equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// The solution set, possibly degenerate.
    pub interval: Interval,
    /// The case formula that produced it.
    pub formula: Formula,
}
