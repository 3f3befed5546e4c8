use std::fmt;

use crate::{Case, Evaluation};

/// Plain-text rendering of an [`Evaluation`].
///
/// Shows the detected case and its relation, the solution or the reason
/// there is none, what the case means, and an echo of the inputs.
pub struct Report<'a> {
    evaluation: &'a Evaluation,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self { evaluation }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eval = self.evaluation;
        let explanation = eval.case.explanation();

        writeln!(f, "Analysis: {}", eval.case)?;
        writeln!(f, "  {}", eval.case.relation())?;
        writeln!(f)?;

        match &eval.outcome {
            Ok(sol) => {
                writeln!(f, "Solution found: x ∈ {:.4}", sol.interval)?;
                writeln!(f, "  {}", sol.formula)?;
            }
            Err(err) => writeln!(f, "Result: {err}")?,
        }
        writeln!(f)?;

        writeln!(f, "Context: {}", explanation.context)?;
        writeln!(f, "Operation: {}", explanation.operation)?;
        writeln!(f)?;

        writeln!(f, "[A] = {} ({})", eval.a, eval.tag_a)?;
        write!(f, "[b] = {} ({})", eval.b, eval.tag_b)
    }
}

/// Returns one line per case describing which tag pair selects it.
#[must_use]
pub fn legend() -> Vec<String> {
    Case::ALL
        .iter()
        .map(|case| {
            let (a, b) = case.tags();
            format!(
                "{} + {} → Case {} ({})",
                a.name(),
                b.name(),
                case.number(),
                case.name()
            )
        })
        .collect()
}
