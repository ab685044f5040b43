//! Valuations, as a (partial) map from atoms to values.
//!
//! A valuation is built during a solve, as unit propagation forces the value of an atom.
//!
//! ```rust
//! # use dpll_proof::structures::valuation::Valuation;
//! # use dpll_proof::structures::literal::Literal;
//! let mut valuation = Valuation::default();
//! valuation.set(Literal::new(2, false));
//! valuation.set(Literal::new(1, true));
//!
//! assert_eq!(valuation.value_of(2), Some(false));
//! assert_eq!(valuation.value_of(3), None);
//! assert!(valuation.agrees(&Literal::new(1, true)));
//! assert_eq!(valuation.to_string(), "1 -2");
//! ```

use std::collections::BTreeMap;

use crate::structures::{atom::Atom, clause::Clause, literal::Literal};

/// A partial valuation, ordered by atom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    values: BTreeMap<Atom, bool>,
}

impl Valuation {
    /// Sets the atom of `literal` to the polarity of `literal`, returning the previous value of the atom, if any.
    pub fn set(&mut self, literal: Literal) -> Option<bool> {
        self.values.insert(literal.atom(), literal.polarity())
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    /// Whether the atom of `literal` has the value of the polarity of `literal`.
    pub fn agrees(&self, literal: &Literal) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }

    /// Whether some literal of `clause` agrees with the valuation.
    pub fn satisfies(&self, clause: &Clause) -> bool {
        clause.literals().iter().any(|literal| self.agrees(literal))
    }

    /// The assigned literals, in order of atom.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values
            .iter()
            .map(|(atom, value)| Literal::new(*atom, *value))
    }

    /// The number of atoms with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}
