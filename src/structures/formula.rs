//! Formulas, as a collection of (distinct) clauses.
//!
//! Clauses are kept in the order of insertion, so iteration over a formula is deterministic.
//!
//! ```rust
//! # use dpll_proof::structures::formula::Formula;
//! # use dpll_proof::structures::clause::Clause;
//! # use dpll_proof::structures::literal::Literal;
//! let mut formula = Formula::default();
//! let p = Clause::axiom([Literal::new(1, true)]);
//!
//! assert!(formula.insert(p.clone()));
//! assert!(!formula.insert(p.clone()));
//! assert_eq!(formula.len(), 1);
//!
//! let with_assumption = formula.with(Clause::assumption(Literal::new(2, true)));
//! assert_eq!(with_assumption.len(), 2);
//! assert_eq!(formula.len(), 1);
//! ```

use std::collections::HashSet;

use crate::structures::{atom::Atom, clause::Clause};

/// A formula.
#[derive(Clone, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
    index: HashSet<Clause>,
}

impl Formula {
    /// Adds `clause` to the formula, returning whether the clause was new to the formula.
    pub fn insert(&mut self, clause: Clause) -> bool {
        match self.index.insert(clause.clone()) {
            true => {
                self.clauses.push(clause);
                true
            }
            false => false,
        }
    }

    /// A copy of the formula, extended with `clause`.
    pub fn with(&self, clause: Clause) -> Self {
        let mut extended = self.clone();
        extended.insert(clause);
        extended
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.index.contains(clause)
    }

    /// An iterator over the clauses of the formula, in order of insertion.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The number of clauses in the formula.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula contains no clauses, and so is trivially true.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The unit clauses of the formula.
    pub fn units(&self) -> Vec<Clause> {
        self.clauses
            .iter()
            .filter(|clause| clause.size() == 1)
            .cloned()
            .collect()
    }

    /// Some empty clause of the formula, if one exists.
    pub fn empty_clause(&self) -> Option<&Clause> {
        self.clauses.iter().find(|clause| clause.is_empty())
    }

    /// The first atom of the first nonempty clause in the formula.
    pub fn first_atom(&self) -> Option<Atom> {
        self.clauses.iter().flat_map(|clause| clause.atoms()).next()
    }

    /// The total number of literals over all clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(|clause| clause.size()).sum()
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut formula = Formula::default();
        for clause in iter {
            formula.insert(clause);
        }
        formula
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clauses.iter()).finish()
    }
}
