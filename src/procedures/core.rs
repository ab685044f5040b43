/*!
A procedure to obtain the unsatisfiable core of a refutation.

The core of a refutation is the collection of axioms used in the refutation.
As the refutation is a proof of the empty clause from the core alone, the core is itself unsatisfiable.
*/

use std::collections::HashSet;

use crate::structures::clause::Clause;

/// The distinct axioms of `proof`, in the order first visited when walking the proof premises first.
pub fn core(proof: &Clause) -> Vec<Clause> {
    let mut seen: HashSet<Clause> = HashSet::default();

    proof
        .postorder()
        .into_iter()
        .filter(|clause| clause.is_axiom())
        .filter(|clause| seen.insert(clause.clone()))
        .collect()
}
