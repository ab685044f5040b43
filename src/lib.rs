//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, with resolution proofs of unsatisfiability.
//!
//! dpll_proof is a small DPLL solver in which every clause records how it came to be.
//! Clauses given as input are [axioms](structures::clause::Clause::Axiom), guesses made during search are [assumptions](structures::clause::Clause::Assumption), and everything else is [derived](structures::clause::Clause::Derived) by resolution from two parents.
//! So, when a formula is unsatisfiable the solver returns the empty clause together with its derivation, and the derivation can be checked by anyone with a few lines of code.
//!
//! dpll_proof is intended for correctness-auditable use, e.g. teaching or formal-methods tooling, rather than for speed.
//!
//! # Orientation
//!
//! - The [structures] are literals, clauses, formulas, and valuations.
//! - The [procedures] are resolution, unit propagation, assumption elimination, and the search which ties these together.
//!   In addition, there are procedures to [check](procedures::check) results and extract an [unsatisfiable core](procedures::core).
//! - A [context] holds [configuration](config) and counters for a solve.
//! - Formulas are built from integers or read from DIMACS through the [builder].
//!
//! # Assumption elimination
//!
//! The interesting part of the solver is [elimination](procedures::elimination).
//! On branching, the solver adds an assumption *l* to the formula and continues.
//! If this leads to a proof of the empty clause, the assumption is removed from the proof by rewriting each derivation which used it.
//! The rewritten proof is either:
//! - A proof of the empty clause, in which case the assumption was not needed and the other branch need not be explored, or
//! - A proof of the unit clause -*l*, which is then added to the formula in place of the assumption.
//!
//! # Examples
//!
//! ```rust
//! # use dpll_proof::structures::formula::Formula;
//! # use dpll_proof::procedures::check::check_result;
//! use dpll_proof::procedures::solve::solve;
//!
//! let formula = Formula::from_ints([vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]]).unwrap();
//!
//! let result = solve(&formula).unwrap();
//! assert!(!result.is_satisfiable());
//! assert!(check_result(&result, &formula).is_ok());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), `RUST_LOG=elimination=trace …` shows each rewrite of a proof.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
