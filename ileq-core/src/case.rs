//! Classification of an interval equation by the semantics of its operands.
//!
//! Reading `[A]` and `[b]` as epistemic or ontic gives four distinct
//! problems, following Lodwick & Dubois (2015), "Interval linear systems as a
//! necessary step in fuzzy linear systems", section 3.5.

use std::fmt;

use crate::Tag;

/// One of the four readings of `[A]x = [b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Case {
    /// Epistemic `[A]`, ontic `b`: every possible `A` must land inside `b`.
    Robust,
    /// Ontic `A`, epistemic `[b]`: the range of `A` must cover all of `[b]`.
    Control,
    /// Ontic `A`, ontic `b`: the two sets must coincide.
    Classical,
    /// Epistemic `[A]`, epistemic `[b]`: some `A` must hit some `b`.
    United,
}

/// Teaching text describing a [`Case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explanation {
    /// What the question is asking.
    pub context: &'static str,
    /// What has to happen geometrically.
    pub operation: &'static str,
}

/// Classifies an equation from the tags of `[A]` and `[b]`.
///
/// Total over the four tag combinations.
#[must_use]
pub fn classify(tag_a: Tag, tag_b: Tag) -> Case {
    match (tag_a, tag_b) {
        (Tag::Epistemic, Tag::Ontic) => Case::Robust,
        (Tag::Ontic, Tag::Epistemic) => Case::Control,
        (Tag::Ontic, Tag::Ontic) => Case::Classical,
        (Tag::Epistemic, Tag::Epistemic) => Case::United,
    }
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Robust, Case::Control, Case::Classical, Case::United];

    /// Returns the case number, 1 through 4.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Case::Robust => 1,
            Case::Control => 2,
            Case::Classical => 3,
            Case::United => 4,
        }
    }

    /// Returns the `(tag(A), tag(b))` pair that selects this case.
    #[must_use]
    pub fn tags(self) -> (Tag, Tag) {
        match self {
            Case::Robust => (Tag::Epistemic, Tag::Ontic),
            Case::Control => (Tag::Ontic, Tag::Epistemic),
            Case::Classical => (Tag::Ontic, Tag::Ontic),
            Case::United => (Tag::Epistemic, Tag::Epistemic),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Case::Robust => "Robust solution (tolerance)",
            Case::Control => "Control solution",
            Case::Classical => "Classical solution (equality)",
            Case::United => "United solution",
        }
    }

    /// Returns the defining relation in plain Unicode.
    #[must_use]
    pub fn relation(self) -> &'static str {
        match self {
            Case::Robust => "[A]x ⊆ b",
            Case::Control => "Ax ⊇ [b]",
            Case::Classical => "Ax = b",
            Case::United => "[A]x ∩ [b] ≠ ∅",
        }
    }

    /// Returns the defining relation as LaTeX markup.
    #[must_use]
    pub fn relation_latex(self) -> &'static str {
        match self {
            Case::Robust => r"[A]x \subseteq \mathbf{b}",
            Case::Control => r"\mathbf{A}x \supseteq [b]",
            Case::Classical => r"\mathbf{A}x = \mathbf{b}",
            Case::United => r"[A]x \cap [b] \neq \emptyset",
        }
    }

    #[must_use]
    pub fn explanation(self) -> Explanation {
        match self {
            Case::Robust => Explanation {
                context: "Find the values of x that stay inside the rigid target b (ontic) \
                          for every value the uncertain parameter [A] (epistemic) might take.",
                operation: "The cone of all possible A must lie entirely inside the target band \
                            over the solution. This is the pessimistic intersection.",
            },
            Case::Control => Explanation {
                context: "Find x such that the tolerance range of the control parameter A (ontic) \
                          covers all of the uncertainty in the target [b] (epistemic).",
                operation: "The target band must be contained in the cone over the solution.",
            },
            Case::Classical => Explanation {
                context: "Strict equality between two solid sets.",
                operation: "The cone and the target band must coincide exactly. \
                            This is rarely possible when the intervals have width.",
            },
            Case::United => Explanation {
                context: "Find x such that some possible value of [A] yields some possible value of [b].",
                operation: "Classical interval arithmetic: any intersection between the cone and \
                            the target band is enough. This is the union of all possibilities.",
            },
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.number(), self.name())
    }
}
