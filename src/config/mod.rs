/*!
Configuration of a context.

Each option is a [ConfigOption], so the bounds of an option travel with its value.

```rust
# use dpll_proof::config::Config;
let mut config = Config::default();
assert!(!config.check_proofs.value);
assert!(config.first_polarity.value);

assert!(config.check_proofs.set(true));
assert!(config.check_proofs.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::structures::clause::TREE_SIZE_LIMIT;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Check the result of each solve, and fail the solve if the check fails.
    pub check_proofs: ConfigOption<bool>,

    /// The polarity of the first assumption made on an atom.
    ///
    /// If the assumption leads to a contradiction, the negation of the assumption is derived and used instead.
    pub first_polarity: ConfigOption<bool>,

    /// The widest proof tree to draw, as a count of characters.
    /// Proofs with wider trees are written as a trace.
    pub tree_width_limit: ConfigOption<usize>,

    /// The most clauses to draw in a proof tree, counting shared premises once for each use.
    /// Proofs with larger trees are written as a trace.
    pub tree_size_limit: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            check_proofs: ConfigOption {
                name: "check_proofs",
                min: false,
                max: true,
                value: false,
            },

            first_polarity: ConfigOption {
                name: "first_polarity",
                min: false,
                max: true,
                value: true,
            },

            tree_width_limit: ConfigOption {
                name: "tree_width_limit",
                min: 1,
                max: usize::MAX,
                value: usize::MAX,
            },

            tree_size_limit: ConfigOption {
                name: "tree_size_limit",
                min: 1,
                max: u64::MAX,
                value: TREE_SIZE_LIMIT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut config = Config::default();
        assert!(!config.tree_width_limit.set(0));
        assert_eq!(config.tree_width_limit.value, usize::MAX);

        assert!(config.tree_width_limit.set(80));
        assert_eq!(config.tree_width_limit.value, 80);
        assert_eq!(config.tree_width_limit.min_max(), (1, usize::MAX));

        assert!(!config.tree_size_limit.set(0));
        assert_eq!(config.tree_size_limit.value, TREE_SIZE_LIMIT);
    }
}
