/*!
Elimination of an assumption from a proof.

Given a proof of some clause which (perhaps) uses an assumption *A* = {*l*}, elimination rewrites the proof to one without *A*:
- Each axiom or assumption is unchanged.
- Each clause derived with *A* as a premise is replaced by (the rewrite of) its other premise.
  As the derived clause resolved -*l* out of the other premise, the replacement may contain -*l*.
- Each other derived clause is re-derived by resolving the rewrites of its premises.
  Re-derivation is required, as the rewrites may contain -*l* where the original premises did not.

So, each rewritten clause is the original clause, perhaps with -*l* added.
And in particular, the rewrite of a proof of the empty clause is either:
- A proof of the empty clause, if *A* was not required, or
- A proof of {-*l*}.

```rust
# use dpll_proof::structures::clause::Clause;
# use dpll_proof::structures::literal::Literal;
# use dpll_proof::procedures::resolution::resolve;
# use dpll_proof::procedures::elimination::eliminate;
let p = Literal::new(1, true);
let q = Literal::new(2, true);
let assumption = Clause::assumption(p);

let q_given_p = resolve(&Clause::axiom([-p, q]), &assumption).unwrap();
let not_q_given_p = resolve(&Clause::axiom([-p, -q]), &assumption).unwrap();
let empty = resolve(&q_given_p, &not_q_given_p).unwrap();

let not_p = eliminate(&assumption, &empty).unwrap();
assert_eq!(not_p.unit(), Some(-p));
```

# Implementation

The proof is walked once, premises before conclusions, and only rewrites which differ from the original are recorded.
So, a premise shared by many clauses is rewritten once, and sub-proofs which do not use the assumption are reused as they are.
As the walk is over an explicit stack, the depth of a proof is not limited by the depth of the call stack.

If the clause given is itself the assumption it is returned unchanged, as it is not derived.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    procedures::resolution::resolve,
    structures::clause::Clause,
    types::err::ErrorKind,
};

/// The rewrite of `clause`, where clauses absent from `revisions` are unchanged.
fn revised(revisions: &HashMap<usize, Clause>, clause: &Clause) -> Clause {
    match revisions.get(&clause.id()) {
        Some(revision) => revision.clone(),
        None => clause.clone(),
    }
}

/// A proof of `clause`, or of `clause` together with the negation of `assumption`, without `assumption`.
pub fn eliminate(assumption: &Clause, clause: &Clause) -> Result<Clause, ErrorKind> {
    let mut revisions: HashMap<usize, Clause> = HashMap::default();

    for node in clause.postorder() {
        let Some((premise_a, premise_b)) = node.premises() else {
            continue;
        };

        let revision = if premise_a == assumption {
            revised(&revisions, premise_b)
        } else if premise_b == assumption {
            revised(&revisions, premise_a)
        } else {
            let revision_a = revised(&revisions, premise_a);
            let revision_b = revised(&revisions, premise_b);
            if revision_a.ptr_eq(premise_a) && revision_b.ptr_eq(premise_b) {
                continue;
            }
            resolve(&revision_a, &revision_b)?
        };

        log::trace!(target: targets::ELIMINATION, "Revised {} to {}", node.as_string(), revision.as_string());
        revisions.insert(node.id(), revision);
    }

    let eliminated = revised(&revisions, clause);
    log::debug!(target: targets::ELIMINATION, "Eliminated {assumption}: [{}] → [{}]", clause.as_string(), eliminated.as_string());
    Ok(eliminated)
}
