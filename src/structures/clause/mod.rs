//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! Each clause records where it came from:
//! - An [Axiom](Clause::Axiom) is given as part of a formula.
//! - An [Assumption](Clause::Assumption) is a single literal, guessed during a solve.
//! - A [Derived](Clause::Derived) clause is the resolvent of two premises, each of which is some clause.
//!
//! ```rust
//! # use dpll_proof::structures::literal::Literal;
//! # use dpll_proof::structures::clause::Clause;
//! let p_or_not_q = Clause::axiom([Literal::new(1, true), Literal::new(2, false)]);
//! let q = Clause::assumption(Literal::new(2, true));
//! let p = Clause::derived([Literal::new(1, true)], p_or_not_q.clone(), q.clone());
//!
//! assert_eq!(p.size(), 1);
//! assert_eq!(p.unit(), Some(Literal::new(1, true)));
//! assert!(matches!(p.premises(), Some((a, b)) if *a == p_or_not_q && *b == q));
//! assert_eq!(q.to_string(), "2?");
//! ```
//!
//! Clauses are immutable, and cheap to clone, as a clone shares the underlying literals and premises.
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! # Equality
//!
//! Equality is structural: two clauses are equal when they are of the same kind, contain the same literals, and (for derived clauses) have equal premises.
//! To avoid walking a pair of proofs on each comparison, every clause carries a fingerprint of its structure, computed once when the clause is made.
//! Clauses with distinct fingerprints are never equal, and clauses which share an allocation always are.

mod tree;
pub use tree::TREE_SIZE_LIMIT;

use std::{
    collections::{hash_map::DefaultHasher, BTreeSet, HashSet},
    hash::{Hash, Hasher},
    rc::Rc,
};

use crate::{
    reports::trace::trace_lines,
    structures::{atom::Atom, literal::Literal},
};

/// The literals of a clause.
pub type LiteralSet = BTreeSet<Literal>;

/// The contents of an axiom or assumption.
pub struct Leaf {
    literals: LiteralSet,
    fingerprint: u64,
}

/// The contents of a derived clause.
///
/// The premises are always a pair, though are held in a vector so they may be taken when the derivation is dropped.
pub struct Derivation {
    literals: LiteralSet,
    premises: Vec<Clause>,
    fingerprint: u64,
}

impl Drop for Derivation {
    /// Releases the premises over an explicit stack, so dropping a proof of any depth uses a fixed depth of calls.
    fn drop(&mut self) {
        let mut todo = std::mem::take(&mut self.premises);

        while let Some(clause) = todo.pop() {
            if let Clause::Derived(derivation) = clause {
                if let Some(mut inner) = Rc::into_inner(derivation) {
                    todo.append(&mut inner.premises);
                }
            }
        }
    }
}

/// A clause, tagged by how it was obtained.
#[derive(Clone)]
pub enum Clause {
    /// A clause read from a formula.
    Axiom(Rc<Leaf>),

    /// A *unit* clause set by a decision on the value of the contained atom.
    Assumption(Rc<Leaf>),

    /// A clause derived via resolution from the two premises.
    Derived(Rc<Derivation>),
}

const AXIOM_TAG: u8 = 0;
const ASSUMPTION_TAG: u8 = 1;
const DERIVED_TAG: u8 = 2;

fn fingerprint(tag: u8, literals: &LiteralSet, premises: Option<[u64; 2]>) -> u64 {
    let mut hasher = DefaultHasher::new();
    tag.hash(&mut hasher);
    literals.hash(&mut hasher);
    premises.hash(&mut hasher);
    hasher.finish()
}

impl Clause {
    /// An axiom on the given literals, with duplicates removed.
    pub fn axiom(literals: impl IntoIterator<Item = Literal>) -> Self {
        let literals: LiteralSet = literals.into_iter().collect();
        let fingerprint = fingerprint(AXIOM_TAG, &literals, None);
        Clause::Axiom(Rc::new(Leaf {
            literals,
            fingerprint,
        }))
    }

    /// An assumption of the given literal.
    pub fn assumption(literal: Literal) -> Self {
        let literals = LiteralSet::from([literal]);
        let fingerprint = fingerprint(ASSUMPTION_TAG, &literals, None);
        Clause::Assumption(Rc::new(Leaf {
            literals,
            fingerprint,
        }))
    }

    /// A clause on the given literals, derived from the given premises.
    ///
    /// No check is made that the literals are the resolvent of the premises.
    /// For this, use [resolve](crate::procedures::resolution::resolve) or check the clause after with [check_refutation](crate::procedures::check::check_refutation).
    pub fn derived(
        literals: impl IntoIterator<Item = Literal>,
        premise_a: Clause,
        premise_b: Clause,
    ) -> Self {
        let literals: LiteralSet = literals.into_iter().collect();
        let fingerprint = fingerprint(
            DERIVED_TAG,
            &literals,
            Some([premise_a.fingerprint(), premise_b.fingerprint()]),
        );
        Clause::Derived(Rc::new(Derivation {
            literals,
            premises: vec![premise_a, premise_b],
            fingerprint,
        }))
    }

    /// The literals of the clause, in order.
    pub fn literals(&self) -> &LiteralSet {
        match self {
            Clause::Axiom(leaf) | Clause::Assumption(leaf) => &leaf.literals,
            Clause::Derived(derivation) => &derivation.literals,
        }
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals().len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals().is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals().contains(literal)
    }

    /// The literal of the clause, if the clause is a unit.
    pub fn unit(&self) -> Option<Literal> {
        let mut literals = self.literals().iter();
        match (literals.next(), literals.next()) {
            (Some(literal), None) => Some(*literal),
            _ => None,
        }
    }

    /// An iterator over all atoms in the clause, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals().iter().map(|literal| literal.atom())
    }

    /// The premises of a derived clause.
    pub fn premises(&self) -> Option<(&Clause, &Clause)> {
        match self {
            Clause::Derived(derivation) => match derivation.premises.as_slice() {
                [a, b] => Some((a, b)),
                _ => None,
            },
            Clause::Axiom(_) | Clause::Assumption(_) => None,
        }
    }

    pub fn is_axiom(&self) -> bool {
        matches!(self, Clause::Axiom(_))
    }

    pub fn is_assumption(&self) -> bool {
        matches!(self, Clause::Assumption(_))
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, Clause::Derived(_))
    }

    fn fingerprint(&self) -> u64 {
        match self {
            Clause::Axiom(leaf) | Clause::Assumption(leaf) => leaf.fingerprint,
            Clause::Derived(derivation) => derivation.fingerprint,
        }
    }

    /// An identifier of the allocation backing the clause.
    ///
    /// Clones share an identifier, while structurally equal clauses made independently do not.
    /// The identifier is only meaningful while the clause is alive.
    pub fn id(&self) -> usize {
        match self {
            Clause::Axiom(leaf) | Clause::Assumption(leaf) => Rc::as_ptr(leaf) as usize,
            Clause::Derived(derivation) => Rc::as_ptr(derivation) as usize,
        }
    }

    /// Whether the clause and `other` share an allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Clause::Axiom(a), Clause::Axiom(b)) | (Clause::Assumption(a), Clause::Assumption(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Clause::Derived(a), Clause::Derived(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The literals of the clause, separated by a space.
    pub fn as_string(&self) -> String {
        self.literals()
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.literals() {
            the_string.push_str(&format!("{literal} "));
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }

    /// Every clause in the proof of the clause, each once, with premises before conclusions.
    ///
    /// The clause itself is last.
    pub fn postorder(&self) -> Vec<Clause> {
        let mut order = Vec::default();
        let mut seen: HashSet<usize> = HashSet::default();
        let mut todo: Vec<(Clause, bool)> = vec![(self.clone(), false)];

        while let Some((clause, expanded)) = todo.pop() {
            if expanded {
                order.push(clause);
                continue;
            }

            if !seen.insert(clause.id()) {
                continue;
            }

            match clause.premises() {
                Some((a, b)) => {
                    let (a, b) = (a.clone(), b.clone());
                    todo.push((clause, true));
                    todo.push((b, false));
                    todo.push((a, false));
                }
                None => order.push(clause),
            }
        }

        order
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        let mut seen: HashSet<(usize, usize)> = HashSet::default();
        let mut todo = vec![(self, other)];

        while let Some((a, b)) = todo.pop() {
            if a.ptr_eq(b) || !seen.insert((a.id(), b.id())) {
                continue;
            }

            if a.fingerprint() != b.fingerprint() {
                return false;
            }

            match (a, b) {
                (Clause::Axiom(x), Clause::Axiom(y))
                | (Clause::Assumption(x), Clause::Assumption(y)) => {
                    if x.literals != y.literals {
                        return false;
                    }
                }

                (Clause::Derived(x), Clause::Derived(y)) => {
                    if x.literals != y.literals || x.premises.len() != y.premises.len() {
                        return false;
                    }
                    todo.extend(x.premises.iter().zip(y.premises.iter()));
                }

                _ => return false,
            }
        }

        true
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Axiom(_) => write!(f, "Axiom({})", self.as_string()),
            Clause::Assumption(_) => write!(f, "Assumption({})", self.as_string()),
            Clause::Derived(_) => write!(f, "Derived({})", self.as_string()),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Axiom(_) => write!(f, "{}", self.as_string()),
            Clause::Assumption(_) => write!(f, "{}?", self.as_string()),
            Clause::Derived(_) if self.tree_size() <= TREE_SIZE_LIMIT => {
                write!(f, "{}", self.tree_lines().join("\n"))
            }
            Clause::Derived(_) => write!(f, "{}", trace_lines(self).join("\n")),
        }
    }
}
