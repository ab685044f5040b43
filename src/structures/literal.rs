//! Literals are atoms paired with a (boolean) polarity.
//!
//! ```rust
//! # use dpll_proof::structures::literal::Literal;
//! let literal = Literal::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(-literal, Literal::new(79, false));
//! assert_eq!(literal.to_string(), "79");
//! assert_eq!(literal.negate().to_string(), "-79");
//! ```
//!
//! Literals are ordered by atom and then polarity, with `false` (strictly) less than `true`.
//! In particular, iteration over a clause visits literals in this order.

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err,
};

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    ///
    /// # Panics
    /// If `atom` is zero or exceeds [ATOM_MAX].
    /// For a fallible conversion from an integer, use [TryFrom].
    pub fn new(atom: Atom, polarity: bool) -> Self {
        assert!(0 < atom && atom <= ATOM_MAX, "Atom {atom} out of range");
        Self { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal and `other` are a complementary pair.
    pub fn complements(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }

    /// The literal in it's integer form, with sign indicating polarity.
    pub fn as_int(&self) -> i64 {
        match self.polarity {
            true => self.atom as i64,
            false => -(self.atom as i64),
        }
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// From

impl TryFrom<i32> for Literal {
    type Error = err::BuildError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Literal::try_from(value as i64)
    }
}

impl TryFrom<i64> for Literal {
    type Error = err::BuildError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let atom = value.unsigned_abs();
        if atom == 0 {
            Err(err::BuildError::ZeroLiteral)
        } else if atom <= ATOM_MAX as u64 {
            Ok(Literal::new(atom as Atom, value.is_positive()))
        } else {
            Err(err::BuildError::AtomOverflow)
        }
    }
}
