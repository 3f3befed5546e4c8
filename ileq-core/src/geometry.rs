//! Plot geometry for an interval equation.
//!
//! Everything here is plain coordinates. Rendering is left to the caller.

use crate::Interval;

/// Horizontal extent used when no other rule applies.
pub const DEFAULT_X_MAX: f64 = 10.0;

/// Factor applied to the driving bound when choosing `x_max`.
pub const X_MARGIN: f64 = 1.5;

/// Vertical offset of the numeric labels under the solution bounds.
pub const LABEL_OFFSET: f64 = -0.5;

/// Bottom of the viewport, leaving room for the labels.
pub const Y_FLOOR: f64 = -1.0;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl Segment {
    #[must_use]
    pub fn new(start: [f64; 2], end: [f64; 2]) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn points(&self) -> [[f64; 2]; 2] {
        [self.start, self.end]
    }
}

/// The region swept by `y = a·x` for `a` in `[A]`, over `x ∈ [0, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cone {
    /// The line `y = a_min·x`.
    pub lower: Segment,
    /// The line `y = a_max·x`.
    pub upper: Segment,
}

impl Cone {
    /// Returns the filled triangle between the two bounding lines.
    #[must_use]
    pub fn polygon(&self) -> [[f64; 2]; 3] {
        [self.lower.start, self.lower.end, self.upper.end]
    }
}

/// The horizontal strip `y ∈ [b_min, b_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

/// A text annotation anchored at a point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Label {
    pub position: [f64; 2],
    pub text: String,
}

/// Marks drawn for a defined solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolutionMarks {
    /// The solution on the x-axis, at `y = 0`.
    pub segment: Segment,
    /// Vertical guides at the lower and upper solution bounds.
    pub guides: [Segment; 2],
    /// Numeric labels under the lower and upper solution bounds.
    pub labels: [Label; 2],
}

/// Axis limits for the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Viewport {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Geometric primitives describing one evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Geometry {
    pub x_max: f64,
    pub cone: Cone,
    pub band: Band,
    pub solution: Option<SolutionMarks>,
    pub viewport: Viewport,
}

impl Geometry {
    /// Derives the plot geometry for `[A]x = [b]` and an optional solution.
    #[must_use]
    pub fn derive(a: Interval, b: Interval, solution: Option<&Interval>) -> Self {
        let [a_min, a_max] = a.as_array();
        let [b_min, b_max] = b.as_array();

        let x_max = x_max(a, b, solution);

        let cone = Cone {
            lower: Segment::new([0.0, 0.0], [x_max, a_min * x_max]),
            upper: Segment::new([0.0, 0.0], [x_max, a_max * x_max]),
        };

        let band = Band {
            lower: b_min,
            upper: b_max,
        };

        let solution = solution.map(|sol| {
            let [lower, upper] = sol.as_array();
            let guide = |x: f64| Segment::new([x, 0.0], [x, b_max.max(a_max * x)]);
            let label = |x: f64| Label {
                position: [x, LABEL_OFFSET],
                text: format!("{x:.2}"),
            };

            SolutionMarks {
                segment: Segment::new([lower, 0.0], [upper, 0.0]),
                guides: [guide(lower), guide(upper)],
                labels: [label(lower), label(upper)],
            }
        });

        let y_top = if b_max > 0.0 { 2.0 * b_max } else { 1.0 };

        Self {
            x_max,
            cone,
            band,
            solution,
            viewport: Viewport {
                x: [0.0, x_max],
                y: [Y_FLOOR, y_top],
            },
        }
    }
}

/// Chooses the right edge of the plot.
///
/// Falls back to [`DEFAULT_X_MAX`] whenever the rule yields a value that is
/// not finite and positive.
fn x_max(a: Interval, b: Interval, solution: Option<&Interval>) -> f64 {
    let candidate = match solution {
        Some(sol) => X_MARGIN * sol.upper(),
        None if a.lower() > 0.0 => X_MARGIN * (b.upper() / a.lower()),
        None => DEFAULT_X_MAX,
    };

    if candidate.is_finite() && candidate > 0.0 {
        candidate
    } else {
        DEFAULT_X_MAX
    }
}
