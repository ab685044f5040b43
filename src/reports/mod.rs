/*!
Reports regarding a solve, and ways to write a proof.

- A [Report] is the high-level answer of a solve.
- A [SolveResult] is the answer together with the evidence for it: a valuation or a proof.
- A proof may be written as an ASCII tree (through [Display](std::fmt::Display) on a clause), as a [trace], or as a [graph](dot).
*/

pub mod dot;
pub mod trace;

use crate::structures::{clause::Clause, valuation::Valuation};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
        }
    }
}

/// The result of a solve.
#[derive(Clone, Debug)]
pub enum SolveResult {
    /// A valuation on which every clause of the formula is true.
    Satisfiable(Valuation),

    /// A proof of the empty clause, with only axioms as leaves.
    Unsatisfiable(Clause),
}

impl SolveResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Self::Satisfiable(_))
    }

    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable(_) => Report::Unsatisfiable,
        }
    }

    /// The valuation of a satisfiable result.
    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            Self::Satisfiable(valuation) => Some(valuation),
            Self::Unsatisfiable(_) => None,
        }
    }

    /// The proof of an unsatisfiable result.
    pub fn proof(&self) -> Option<&Clause> {
        match self {
            Self::Satisfiable(_) => None,
            Self::Unsatisfiable(proof) => Some(proof),
        }
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(valuation) => write!(f, "{}: {valuation}", self.report()),
            Self::Unsatisfiable(proof) => write!(f, "{}\n{proof}", self.report()),
        }
    }
}
