//! Error types used in the library.
//!
//! - Errors from building a formula or parsing DIMACS are external, and follow from malformed input.
//! - Errors from resolution and propagation are contract violations.
//!   These never follow from input, and indicate some broken invariant in the solver itself.
//!   A solve which encounters one is abandoned, rather than continued towards a possibly wrong answer.
//! - Check errors record the way in which a result failed to be verified.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs or procedures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Check(CheckError),
    Parse(ParseError),
    Propagation(PropagationError),
    Resolution(ResolutionError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e:?}"),
            Self::Check(e) => write!(f, "check error: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
            Self::Propagation(e) => write!(f, "propagation error: {e:?}"),
            Self::Resolution(e) => write!(f, "resolution error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Zero was given as a literal.
    /// Zero is reserved as a clause terminator in DIMACS, and otherwise has no polarity.
    ZeroLiteral,

    /// An integer whose magnitude is too large to be an atom.
    AtomOverflow,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Ways in which a result may fail to check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckError {
    /// The root of a refutation is not the empty clause.
    NonEmptyRoot,

    /// An axiom used in a proof is not part of the formula.
    ForeignAxiom,

    /// An assumption was found in a proof.
    Assumption(Atom, bool),

    /// The parents of a derived clause share no complementary pair of literals.
    NoPivot,

    /// The parents of a derived clause share more than one complementary pair of literals.
    ManyPivots,

    /// The literals of a derived clause are not the resolvent of its parents.
    Resolvent,

    /// Some axiom has no literal which agrees with the valuation.
    Falsified,
}

impl From<CheckError> for ErrorKind {
    fn from(e: CheckError) -> Self {
        ErrorKind::Check(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// The line could not be read.
    Line(usize),

    /// Some token on the given line is not an integer.
    Token(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during unit propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// An attempt to propagate a clause which does not contain exactly one literal.
    NotUnit(usize),
}

impl From<PropagationError> for ErrorKind {
    fn from(e: PropagationError) -> Self {
        ErrorKind::Propagation(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The clauses to be resolved share no complementary pair of literals.
    NoPivot,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}
