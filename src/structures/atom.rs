/*!
An atom (aka. a 'variable').

Each atom is a positive u32, as given by the magnitude of an integer literal in a formula.
So, `0` is not an atom.

```rust
# use dpll_proof::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by [i32::MAX] so each literal on an atom has an integer representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
