//! Key structures, such as literals and clauses.
//!
//! # Formulas
//!
//!  A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals).
//!
//!  During a solve the formula is rewritten by propagation, though each clause of a rewritten formula is always entailed by the original formula together with the assumptions made so far.
//!  And, as each clause records its derivation, the entailment is witnessed.
//!
//! # Proofs
//!
//! There is no separate structure for proofs.
//! A derived clause *is* a proof of itself, as the clause holds its premises, which in turn hold theirs, and so on until axioms or assumptions are reached.
//! Premises are shared, and so a proof is a directed acyclic graph rather than a tree.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
