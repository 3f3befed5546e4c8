//! Solve one-dimensional interval linear equations `[A]x = [b]`.
//!
//! Each interval is read either as *epistemic* (uncertainty about one true
//! value) or *ontic* (a real set of admissible values). The pair of readings
//! selects one of four problems, each with its own closed-form solution:
//!
//! - [`classify`] — maps two [`Tag`]s to a [`Case`]
//! - [`solve`](solve::solve) — computes the [`Solution`] for a case, or a
//!   typed reason why there is none
//! - [`Geometry`] — the cone, band, and solution marks for plotting
//! - [`evaluate`] — runs all three for one [`Input`]
//! - [`Report`] — a plain-text summary of an [`Evaluation`]
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for results and `Deserialize` for inputs.
//!
//! # Example
//!
//! ```
//! use ileq_core::{Bounds, Case, Config, Input, Tag, evaluate};
//!
//! let input = Input {
//!     a: Bounds::new(1.0, 2.0),
//!     b: Bounds::new(4.0, 6.0),
//!     tag_a: Tag::Epistemic,
//!     tag_b: Tag::Epistemic,
//! };
//!
//! let evaluation = evaluate(&input, &Config::default()).unwrap();
//! assert_eq!(evaluation.case, Case::United);
//! assert_eq!(evaluation.solution().unwrap().as_array(), [2.0, 6.0]);
//! ```

mod case;
mod evaluate;
mod interval;
mod report;
mod tag;

pub mod geometry;
pub mod solve;

pub use case::{Case, Explanation, classify};
pub use evaluate::{Evaluation, Input, InputError, Operand, evaluate};
pub use geometry::Geometry;
pub use interval::{Bounds, Interval, IntervalError};
pub use report::{Report, legend};
pub use solve::{Config, EmptySolution, Formula, Solution, SolveError, UnsupportedDomain};
pub use tag::{ParseTagError, Tag};
