/*!
Tools for building a formula.

A formula is a collection of [axioms](crate::structures::clause::Clause::Axiom), and may be built:
- Clause by clause, with [Clause::axiom] and [Formula::insert].
- From integers, with [Formula::from_ints], where each nonzero integer *n* is the literal on atom |*n*| with polarity given by the sign of *n*.
- From DIMACS, with [read_dimacs].

# Examples

```rust
# use dpll_proof::structures::formula::Formula;
# use dpll_proof::types::err::{self, ErrorKind};
let formula = Formula::from_ints([vec![1, -2], vec![-2, 1, 1], vec![3]]).unwrap();

// Duplicate literals collapse, and so do duplicate clauses.
assert_eq!(formula.len(), 2);

let broken = Formula::from_ints([vec![1, 0]]);
assert_eq!(broken.err(), Some(ErrorKind::Build(err::BuildError::ZeroLiteral)));
```

```rust
# use dpll_proof::builder::read_dimacs;
let dimacs = b"
c two atoms, four clauses
p cnf 2 4
 1  2 0
-1  2 0
 1 -2 0
-1 -2 0
";

let formula = read_dimacs(dimacs.as_slice()).unwrap();
assert_eq!(formula.len(), 4);
```
*/

mod dimacs;
pub use dimacs::{parse_dimacs, read_dimacs, ParserInfo};

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal},
    types::err::ErrorKind,
};

impl Formula {
    /// A formula of axioms, each given as a collection of nonzero integers.
    pub fn from_ints<I, C>(clauses: I) -> Result<Formula, ErrorKind>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = i32>,
    {
        let mut formula = Formula::default();

        for clause in clauses {
            let literals = clause
                .into_iter()
                .map(Literal::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            let the_clause = Clause::axiom(literals);
            if !formula.insert(the_clause) {
                log::trace!(target: targets::BUILDER, "Duplicate clause skipped");
            }
        }

        log::debug!(target: targets::BUILDER, "Built formula of {} clauses", formula.len());
        Ok(formula)
    }
}
