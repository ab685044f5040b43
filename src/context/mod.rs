/*!
The context within which solves take place.

A context pairs a [Config] with [Counters], and the counters are updated through each solve made with the context.
The free function [solve](crate::procedures::solve::solve) solves with a default context, for when neither is of interest.

# Example
```rust
# use dpll_proof::context::Context;
# use dpll_proof::config::Config;
# use dpll_proof::reports::Report;
# use dpll_proof::structures::formula::Formula;
let mut config = Config::default();
config.check_proofs.value = true;
let mut the_context = Context::from_config(config);

let formula = Formula::from_ints([vec![1, 2], vec![-1]]).unwrap();
let result = the_context.solve(&formula).unwrap();

assert_eq!(result.report(), Report::Satisfiable);
assert_eq!(result.valuation().and_then(|v| v.value_of(2)), Some(true));
assert_eq!(the_context.counters.propagations, 2);
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;

/// A context, holding the configuration and counters of solves.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters, accumulated over solves.
    pub counters: Counters,
}

impl Context {
    /// A context with the given configuration and zeroed counters.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }
}
