//! Procedures on clauses and formulas.
//!
//! The [solve](solve::solve) procedure ties [resolution], [propagation], and [elimination] together.
//! The [check] and [core] procedures work on the result of a solve, and are independent of the solve itself.

pub mod check;
pub mod core;
pub mod elimination;
pub mod propagation;
pub mod resolution;
pub mod solve;
