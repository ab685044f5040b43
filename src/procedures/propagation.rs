/*!
Unit propagation, with each shortened clause derived by resolution.

Propagating a unit clause *u* = {*l*} through a formula:
- Drops each clause containing *l*, as the clause is satisfied whenever *u* is.
- Replaces each clause containing -*l* with its resolvent against *u*, so the clause loses -*l* and records *u* as a premise.
- Keeps every other clause.

In particular, *u* itself is dropped, as it contains *l*.

[propagate_all] propagates units until none remain, and records the value each unit forces on a valuation.
Each round propagates every unit found at the start of the round, in the order of the formula.
If two units of a round conflict, the first to be propagated resolves the second to the empty clause, and the conflict is then visible to the caller.

Propagation terminates, as each step removes at least one literal from the formula and adds none.
*/

use crate::{
    misc::log::targets::{self},
    procedures::resolution::resolve,
    structures::{clause::Clause, formula::Formula, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// The formula obtained by propagating `unit` through `formula`.
///
/// An error is returned if `unit` does not contain exactly one literal.
pub fn propagate_unit(formula: &Formula, unit: &Clause) -> Result<Formula, ErrorKind> {
    let Some(literal) = unit.unit() else {
        log::error!(target: targets::PROPAGATION, "Propagation of non-unit clause {unit:?}");
        return Err(err::PropagationError::NotUnit(unit.size()).into());
    };
    let negation = literal.negate();

    let mut propagated = Formula::default();
    for clause in formula {
        if clause.contains(&literal) {
            continue;
        } else if clause.contains(&negation) {
            propagated.insert(resolve(clause, unit)?);
        } else {
            propagated.insert(clause.clone());
        }
    }

    log::trace!(target: targets::PROPAGATION, "Propagated {literal}: {} → {} clauses", formula.len(), propagated.len());
    Ok(propagated)
}

/// Propagates all units of `formula`, returning the resulting formula and the count of units propagated.
pub(crate) fn propagate_counted(
    formula: &Formula,
    valuation: &mut Valuation,
) -> Result<(Formula, usize), ErrorKind> {
    let mut formula = formula.clone();
    let mut count = 0;

    loop {
        let units = formula.units();
        if units.is_empty() {
            break;
        }

        for unit in units {
            formula = propagate_unit(&formula, &unit)?;
            if let Some(literal) = unit.unit() {
                valuation.set(literal);
            }
            count += 1;
        }
    }

    Ok((formula, count))
}

/// Propagates all units of `formula`, and any units which follow, recording forced values on `valuation`.
pub fn propagate_all(formula: &Formula, valuation: &mut Valuation) -> Result<Formula, ErrorKind> {
    propagate_counted(formula, valuation).map(|(formula, _)| formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    fn formula(clauses: &[&[i32]]) -> Formula {
        Formula::from_ints(clauses.iter().map(|c| c.to_vec())).expect("formula")
    }

    #[test]
    fn unit_drops_and_shortens() {
        let f = formula(&[&[1, 2], &[-1, 3], &[4]]);
        let unit = Clause::axiom([Literal::new(1, true)]);

        let propagated = propagate_unit(&f, &unit).expect("unit");
        let clauses = propagated.iter().map(|c| c.as_string()).collect::<Vec<_>>();
        assert_eq!(clauses, vec!["3", "4"]);

        let shortened = propagated.iter().next().expect("clause");
        assert!(shortened.is_derived());
        let (_, premise) = shortened.premises().expect("premises");
        assert!(premise.ptr_eq(&unit));

        assert_eq!(f.len(), 3);
    }

    #[test]
    fn non_unit_is_an_error() {
        let f = formula(&[&[1, 2]]);
        let not_unit = Clause::axiom([Literal::new(1, true), Literal::new(2, true)]);
        assert_eq!(
            propagate_unit(&f, &not_unit).err(),
            Some(ErrorKind::Propagation(err::PropagationError::NotUnit(2)))
        );

        let empty = Clause::axiom(Vec::<Literal>::new());
        assert!(propagate_unit(&f, &empty).is_err());
    }

    #[test]
    fn chain() {
        let f = formula(&[&[1], &[-1, 2], &[-2, 3], &[-3, 4, 5]]);
        let mut valuation = Valuation::default();

        let propagated = propagate_all(&f, &mut valuation).expect("propagation");
        assert_eq!(propagated.len(), 1);
        assert_eq!(
            propagated.iter().next().map(|c| c.as_string()),
            Some("4 5".to_string())
        );
        assert_eq!(valuation.to_string(), "1 2 3");
    }

    #[test]
    fn conflict_surfaces_as_empty_clause() {
        let f = formula(&[&[1], &[-1]]);
        let mut valuation = Valuation::default();

        let propagated = propagate_all(&f, &mut valuation).expect("propagation");
        assert!(propagated.empty_clause().is_some());
    }

    #[test]
    fn nothing_to_propagate() {
        let f = formula(&[&[1, 2], &[-1, -2]]);
        let mut valuation = Valuation::default();

        let propagated = propagate_all(&f, &mut valuation).expect("propagation");
        assert_eq!(propagated.len(), 2);
        assert!(valuation.is_empty());
    }
}
