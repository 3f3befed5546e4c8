use approx::assert_relative_eq;
use ileq_core::{
    Bounds, Case, Config, EmptySolution, Input, SolveError, Tag, UnsupportedDomain, evaluate,
};

fn input(a: [f64; 2], tag_a: Tag, b: [f64; 2], tag_b: Tag) -> Input {
    Input {
        a: Bounds::new(a[0], a[1]),
        b: Bounds::new(b[0], b[1]),
        tag_a,
        tag_b,
    }
}

#[test]
fn robust_case_with_wide_coefficient_is_empty() {
    let evaluation = evaluate(
        &input([1.0, 2.0], Tag::Epistemic, [4.0, 6.0], Tag::Ontic),
        &Config::default(),
    )
    .expect("valid input");

    assert_eq!(evaluation.case, Case::Robust);
    let Err(SolveError::Empty(EmptySolution::ImproperTolerance { lower, upper })) =
        evaluation.outcome
    else {
        panic!("expected an empty robust solution");
    };
    assert_relative_eq!(lower, 4.0);
    assert_relative_eq!(upper, 3.0);
}

#[test]
fn control_case_is_defined() {
    let evaluation = evaluate(
        &input([2.0, 4.0], Tag::Ontic, [4.0, 6.0], Tag::Epistemic),
        &Config::default(),
    )
    .expect("valid input");

    assert_eq!(evaluation.case, Case::Control);
    let solution = evaluation.solution().expect("defined solution");
    assert_relative_eq!(solution.lower(), 1.5);
    assert_relative_eq!(solution.upper(), 2.0);
}

#[test]
fn classical_case_is_too_strict() {
    let evaluation = evaluate(
        &input([1.0, 2.0], Tag::Ontic, [4.0, 6.0], Tag::Ontic),
        &Config::default(),
    )
    .expect("valid input");

    assert_eq!(evaluation.case, Case::Classical);
    assert!(matches!(
        evaluation.outcome,
        Err(SolveError::Empty(EmptySolution::StrictEquality { .. }))
    ));
    assert!(evaluation.outcome.unwrap_err().to_string().contains("too strict"));
}

#[test]
fn united_case_is_standard_division() {
    let evaluation = evaluate(
        &input([1.0, 2.0], Tag::Epistemic, [4.0, 6.0], Tag::Epistemic),
        &Config::default(),
    )
    .expect("valid input");

    assert_eq!(evaluation.case, Case::United);
    let solution = evaluation.solution().expect("defined solution");
    assert_relative_eq!(solution.lower(), 2.0);
    assert_relative_eq!(solution.upper(), 6.0);

    let marks = evaluation.geometry.solution.expect("solution marks");
    assert_relative_eq!(evaluation.geometry.x_max, 9.0);
    assert_eq!(marks.guides[1].end, [6.0, 12.0]);
}

#[test]
fn coefficient_crossing_zero_is_unsupported_for_every_tag_pair() {
    for tag_a in Tag::ALL {
        for tag_b in Tag::ALL {
            for b in [[4.0, 6.0], [0.0, 1.0], [-3.0, 2.0]] {
                let evaluation =
                    evaluate(&input([-1.0, 2.0], tag_a, b, tag_b), &Config::default())
                        .expect("valid input");
                assert!(matches!(
                    evaluation.outcome,
                    Err(SolveError::Unsupported(
                        UnsupportedDomain::CoefficientContainsZero { .. }
                    ))
                ));
            }
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let input = input([0.3, 1.7], Tag::Epistemic, [2.5, 3.5], Tag::Epistemic);
    let first = evaluate(&input, &Config::default()).expect("valid input");
    let second = evaluate(&input, &Config::default()).expect("valid input");
    assert_eq!(first, second);
}
