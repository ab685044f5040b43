/*!
Independent checks of the result of a solve.

A refutation is checked by walking the proof once, with each clause checked on its own:
- An axiom must be a clause of the formula.
- An assumption is never allowed.
- A derived clause must have exactly one complementary pair of literals between its premises, and must contain exactly the other literals of the premises.

As the walk is over the clauses of the proof, each check is of a single resolution, and the checks do not depend on the solve.

A model is checked by checking each clause of the formula contains some literal true on the model.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    reports::SolveResult,
    structures::{clause::Clause, formula::Formula, literal::Literal, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// Checks a single resolution step.
fn check_derivation(clause: &Clause, a: &Clause, b: &Clause) -> Result<(), err::CheckError> {
    let pivots = a
        .literals()
        .iter()
        .filter(|literal| b.contains(&literal.negate()))
        .collect::<Vec<_>>();

    let pivot = match pivots.as_slice() {
        [] => return Err(err::CheckError::NoPivot),
        [pivot] => **pivot,
        _ => return Err(err::CheckError::ManyPivots),
    };

    let resolvent: BTreeSet<Literal> = a
        .literals()
        .iter()
        .chain(b.literals())
        .filter(|literal| literal.atom() != pivot.atom())
        .copied()
        .collect();

    match &resolvent == clause.literals() {
        true => Ok(()),
        false => Err(err::CheckError::Resolvent),
    }
}

/// Checks `proof` is a refutation of `formula`.
pub fn check_refutation(proof: &Clause, formula: &Formula) -> Result<(), ErrorKind> {
    if !proof.is_empty() {
        log::error!(target: targets::CHECK, "Refutation of {}", proof.as_string());
        return Err(err::CheckError::NonEmptyRoot.into());
    }

    let mut steps = 0;
    for node in proof.postorder() {
        let checked = match &node {
            Clause::Axiom(_) => match formula.contains(&node) {
                true => Ok(()),
                false => Err(err::CheckError::ForeignAxiom),
            },

            Clause::Assumption(_) => match node.unit() {
                Some(literal) => Err(err::CheckError::Assumption(literal.atom(), literal.polarity())),
                None => Err(err::CheckError::NoPivot),
            },

            Clause::Derived(_) => match node.premises() {
                Some((a, b)) => {
                    steps += 1;
                    check_derivation(&node, a, b)
                }
                None => Err(err::CheckError::NoPivot),
            },
        };

        if let Err(e) = checked {
            log::error!(target: targets::CHECK, "{e:?} at {node:?}");
            return Err(e.into());
        }
    }

    log::info!(target: targets::CHECK, "Refutation checked with {steps} resolutions");
    Ok(())
}

/// Checks each clause of `formula` is satisfied by `valuation`.
pub fn check_model(valuation: &Valuation, formula: &Formula) -> Result<(), ErrorKind> {
    match formula.iter().find(|clause| !valuation.satisfies(clause)) {
        Some(clause) => {
            log::error!(target: targets::CHECK, "Model {valuation} falsifies {}", clause.as_string());
            Err(err::CheckError::Falsified.into())
        }
        None => {
            log::info!(target: targets::CHECK, "Model checked on {} clauses", formula.len());
            Ok(())
        }
    }
}

/// Checks a result from a solve on `formula`.
pub fn check_result(result: &SolveResult, formula: &Formula) -> Result<(), ErrorKind> {
    match result {
        SolveResult::Satisfiable(valuation) => check_model(valuation, formula),
        SolveResult::Unsatisfiable(proof) => check_refutation(proof, formula),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::resolution::resolve;

    fn axiom(ints: &[i32]) -> Clause {
        Clause::axiom(
            ints.iter()
                .map(|i| Literal::new(i.unsigned_abs(), i.is_positive())),
        )
    }

    #[test]
    fn valid_refutation() {
        let p = axiom(&[1]);
        let not_p = axiom(&[-1]);
        let formula = Formula::from_iter([p.clone(), not_p.clone()]);

        let empty = resolve(&p, &not_p).expect("empty");
        assert_eq!(check_refutation(&empty, &formula), Ok(()));
    }

    #[test]
    fn non_empty_root() {
        let p_or_q = axiom(&[1, 2]);
        let formula = Formula::from_iter([p_or_q.clone()]);
        assert_eq!(
            check_refutation(&p_or_q, &formula),
            Err(ErrorKind::Check(err::CheckError::NonEmptyRoot))
        );
    }

    #[test]
    fn foreign_axiom() {
        let p = axiom(&[1]);
        let not_p = axiom(&[-1]);
        let formula = Formula::from_iter([p.clone()]);

        let empty = resolve(&p, &not_p).expect("empty");
        assert_eq!(
            check_refutation(&empty, &formula),
            Err(ErrorKind::Check(err::CheckError::ForeignAxiom))
        );
    }

    #[test]
    fn assumptions_are_rejected() {
        let not_p = axiom(&[-1]);
        let formula = Formula::from_iter([not_p.clone()]);

        let empty = resolve(&Clause::assumption(Literal::new(1, true)), &not_p).expect("empty");
        assert_eq!(
            check_refutation(&empty, &formula),
            Err(ErrorKind::Check(err::CheckError::Assumption(1, true)))
        );
    }

    #[test]
    fn bad_derivations() {
        let a = axiom(&[1, 2]);
        let b = axiom(&[-1, -2]);
        let c = axiom(&[3]);
        let formula = Formula::from_iter([a.clone(), b.clone(), c.clone()]);

        let tautology = Clause::derived(Vec::<Literal>::new(), a.clone(), b.clone());
        assert_eq!(
            check_refutation(&tautology, &formula),
            Err(ErrorKind::Check(err::CheckError::ManyPivots))
        );

        let unrelated = Clause::derived(Vec::<Literal>::new(), a.clone(), c.clone());
        assert_eq!(
            check_refutation(&unrelated, &formula),
            Err(ErrorKind::Check(err::CheckError::NoPivot))
        );

        let not_p = axiom(&[-1]);
        let formula = Formula::from_iter([a.clone(), not_p.clone()]);
        let dropped_literal = Clause::derived(Vec::<Literal>::new(), a, not_p);
        assert_eq!(
            check_refutation(&dropped_literal, &formula),
            Err(ErrorKind::Check(err::CheckError::Resolvent))
        );
    }

    #[test]
    fn models() {
        let formula = Formula::from_iter([axiom(&[1, 2]), axiom(&[-1])]);

        let mut valuation = Valuation::default();
        valuation.set(Literal::new(1, false));
        assert_eq!(
            check_model(&valuation, &formula),
            Err(ErrorKind::Check(err::CheckError::Falsified))
        );

        valuation.set(Literal::new(2, true));
        assert_eq!(check_model(&valuation, &formula), Ok(()));
    }
}
