/*!
Binary resolution, with the resolvent recording its premises.

From a clause containing *l* and a clause containing -*l*, resolution derives the clause of all other literals of the two clauses:

```text
  A ∨ l    B ∨ -l
  ---------------
       A ∨ B
```

The resolvent is a [derived clause](crate::structures::clause::Clause::Derived) whose premises are the two clauses resolved, in the order given.

```rust
# use dpll_proof::structures::clause::Clause;
# use dpll_proof::structures::literal::Literal;
# use dpll_proof::procedures::resolution::resolve;
let p_or_q = Clause::axiom([Literal::new(1, true), Literal::new(2, true)]);
let not_p_or_r = Clause::axiom([Literal::new(1, false), Literal::new(3, true)]);

let q_or_r = resolve(&p_or_q, &not_p_or_r).unwrap();
assert_eq!(q_or_r.as_string(), "2 3");
```

# Pivots

Exactly one complementary pair is removed, and the pair is the first found when walking the literals of the first clause in order.
Callers should only resolve clauses which share exactly one complementary pair, as otherwise the resolvent is a tautology.
Though, a pair of clauses with *no* complementary pair is an error, as no resolvent exists.
*/

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err::{self, ErrorKind},
};

/// The first literal of `a` whose negation is in `b`, if one exists.
pub fn pivot(a: &Clause, b: &Clause) -> Option<Literal> {
    a.literals()
        .iter()
        .find(|literal| b.contains(&literal.negate()))
        .copied()
}

/// The resolvent of `a` and `b` on their [pivot].
pub fn resolve(a: &Clause, b: &Clause) -> Result<Clause, ErrorKind> {
    let Some(pivot) = pivot(a, b) else {
        log::error!(target: targets::RESOLUTION, "No pivot between {} and {}", a.as_string(), b.as_string());
        return Err(err::ResolutionError::NoPivot.into());
    };
    let counterpart = pivot.negate();

    let literals = a
        .literals()
        .iter()
        .filter(|literal| **literal != pivot)
        .chain(b.literals().iter().filter(|literal| **literal != counterpart))
        .copied();

    let resolvent = Clause::derived(literals, a.clone(), b.clone());
    log::trace!(target: targets::RESOLUTION, "{} & {} on {pivot} → {}", a.as_string(), b.as_string(), resolvent.as_string());

    Ok(resolvent)
}
