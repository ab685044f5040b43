/*!
A procedure to determine the satisfiability of a formula.

The procedure is DPLL, with each step recorded so an unsatisfiable formula is returned with a proof.

Roughly, given a formula:
- All units of the formula are [propagated](crate::procedures::propagation).
- If no clauses remain the formula is satisfiable, and the values forced by propagation are a model.
- If some clause is empty the formula is unsatisfiable, and the empty clause is the proof.
- Otherwise, an atom is chosen and assumed to be true (or false, depending on the [config](crate::config::Config::first_polarity)).
  And, the formula together with the assumption is solved.
  + If the extended formula is satisfiable, so is the formula.
  + Otherwise, the assumption is [eliminated](crate::procedures::elimination) from the proof of the empty clause.
    If the result is the empty clause, the formula is unsatisfiable without the assumption, and the other branch is not explored.
    Otherwise, the result is a proof of the negation of the assumption, and the formula together with this proof is solved.

So, at each level of search the proof returned is free of the assumption made at that level, and the proof returned from the top level is free of all assumptions.

Each branch works with its own copy of the valuation, so values forced within a branch which fails are not seen from the next branch.

```rust
# use dpll_proof::structures::formula::Formula;
# use dpll_proof::procedures::solve::solve;
let formula = Formula::from_ints([vec![1], vec![2], vec![2, 3]]).unwrap();
let result = solve(&formula).unwrap();

let valuation = result.valuation().unwrap();
assert_eq!(valuation.value_of(1), Some(true));
assert_eq!(valuation.value_of(2), Some(true));
```

Depth of search is bounded by the number of atoms in the formula, as each level of search removes an atom.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::{
        check::check_result,
        elimination::eliminate,
        propagation::propagate_counted,
    },
    reports::SolveResult,
    structures::{
        clause::Clause, formula::Formula, literal::Literal, valuation::Valuation,
    },
    types::err::ErrorKind,
};

impl Context {
    /// Determines the satisfiability of `formula`.
    ///
    /// An error is returned only if some contract of resolution or propagation is broken, or if the result fails to check when [checks](crate::config::Config::check_proofs) are on.
    pub fn solve(&mut self, formula: &Formula) -> Result<SolveResult, ErrorKind> {
        let this_total_time = std::time::Instant::now();

        log::info!(target: targets::SEARCH, "Solve on {} clauses with {} literals", formula.len(), formula.literal_count());
        let result = self.search(formula, Valuation::default(), 0)?;

        self.counters.time += this_total_time.elapsed();

        if let SolveResult::Unsatisfiable(proof) = &result {
            self.counters.resolutions += proof
                .postorder()
                .iter()
                .filter(|clause| clause.is_derived())
                .count();
        }

        log::info!(target: targets::SEARCH, "Result: {}", result.report());

        if self.config.check_proofs.value {
            check_result(&result, formula)?;
        }

        Ok(result)
    }

    fn search(
        &mut self,
        formula: &Formula,
        mut valuation: Valuation,
        depth: usize,
    ) -> Result<SolveResult, ErrorKind> {
        let (formula, propagated) = propagate_counted(formula, &mut valuation)?;
        self.counters.propagations += propagated;

        if let Some(empty) = formula.empty_clause() {
            log::trace!(target: targets::SEARCH, "Conflict at depth {depth}");
            return Ok(SolveResult::Unsatisfiable(empty.clone()));
        }

        let Some(atom) = formula.first_atom() else {
            log::trace!(target: targets::SEARCH, "Model at depth {depth}: {valuation}");
            return Ok(SolveResult::Satisfiable(valuation));
        };

        let literal = Literal::new(atom, self.config.first_polarity.value);
        let assumption = Clause::assumption(literal);
        self.counters.decisions += 1;
        log::debug!(target: targets::SEARCH, "Assumption {assumption} at depth {depth}");

        let proof = match self.search(&formula.with(assumption.clone()), valuation.clone(), depth + 1)? {
            SolveResult::Satisfiable(model) => return Ok(SolveResult::Satisfiable(model)),
            SolveResult::Unsatisfiable(proof) => proof,
        };

        let eliminated = eliminate(&assumption, &proof)?;
        self.counters.eliminations += 1;

        if eliminated.is_empty() {
            log::debug!(target: targets::SEARCH, "Pruned {} at depth {depth}", literal.negate());
            self.counters.pruned += 1;
            return Ok(SolveResult::Unsatisfiable(eliminated));
        }

        log::debug!(target: targets::SEARCH, "Derived {} at depth {depth}", eliminated.as_string());
        self.search(&formula.with(eliminated), valuation, depth + 1)
    }
}

/// Determines the satisfiability of `formula` with a default [Context].
pub fn solve(formula: &Formula) -> Result<SolveResult, ErrorKind> {
    Context::default().solve(formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, procedures::check::check_refutation};

    fn formula(clauses: &[&[i32]]) -> Formula {
        Formula::from_ints(clauses.iter().map(|c| c.to_vec())).expect("formula")
    }

    #[test]
    fn all_four_clauses_on_two_atoms() {
        let f = formula(&[&[1, 2], &[-1, 2], &[1, -2], &[-1, -2]]);
        let mut the_context = Context::default();
        let result = the_context.solve(&f).expect("solve");

        let proof = result.proof().expect("unsatisfiable");
        assert!(proof.is_empty());
        assert!(check_refutation(proof, &f).is_ok());
        assert!(proof.postorder().iter().all(|clause| !clause.is_assumption()));

        assert_eq!(the_context.counters.decisions, 1);
        assert_eq!(the_context.counters.eliminations, 1);
        assert_eq!(the_context.counters.pruned, 0);
    }

    #[test]
    fn units_only() {
        let f = formula(&[&[1], &[2], &[2, 3]]);
        let result = solve(&f).expect("solve");

        let valuation = result.valuation().expect("satisfiable");
        assert_eq!(valuation.value_of(1), Some(true));
        assert_eq!(valuation.value_of(2), Some(true));
    }

    #[test]
    fn direct_contradiction() {
        let f = formula(&[&[1], &[-1]]);
        let result = solve(&f).expect("solve");

        let proof = result.proof().expect("unsatisfiable");
        assert!(proof.is_empty());

        let (a, b) = proof.premises().expect("premises");
        assert!(a.is_axiom() && b.is_axiom());
        assert_eq!(proof.postorder().len(), 3);
    }

    #[test]
    fn single_clause() {
        let f = formula(&[&[1, 2]]);
        let result = solve(&f).expect("solve");

        let valuation = result.valuation().expect("satisfiable");
        assert!(valuation.satisfies(f.iter().next().expect("clause")));
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let result = solve(&Formula::default()).expect("solve");
        assert!(result.is_satisfiable());
        assert!(result.valuation().is_some_and(|v| v.is_empty()));
    }

    #[test]
    fn empty_clause_is_its_own_proof() {
        let f = Formula::from_iter([Clause::axiom(Vec::<Literal>::new())]);
        let result = solve(&f).expect("solve");
        assert!(result.proof().is_some_and(|proof| proof.is_axiom()));
    }

    #[test]
    fn pruned_when_the_assumption_is_unused() {
        // Atom 1 is chosen first, though the clauses without atom 1 are unsatisfiable.
        let f = formula(&[&[1, 2, 3], &[-2, 3], &[-2, -3], &[2, 4], &[2, -4]]);
        let mut the_context = Context::default();
        let result = the_context.solve(&f).expect("solve");

        assert!(!result.is_satisfiable());
        assert!(the_context.counters.pruned >= 1);
        assert!(check_refutation(result.proof().expect("proof"), &f).is_ok());
    }

    #[test]
    fn negative_first_polarity() {
        let mut config = Config::default();
        config.first_polarity.value = false;
        config.check_proofs.value = true;

        let f = formula(&[&[1, 2], &[-1, 3]]);
        let result = Context::from_config(config).solve(&f).expect("solve");

        let valuation = result.valuation().expect("satisfiable");
        assert_eq!(valuation.value_of(1), Some(false));
        assert_eq!(valuation.value_of(2), Some(true));
    }
}
