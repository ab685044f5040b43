/*!
Items related to [logging](log).

Calls to the log macros are made at each procedure, with one target per procedure.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [unit propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [assumption elimination](crate::procedures::elimination)
    pub const ELIMINATION: &str = "elimination";

    /// Logs related to [the search](crate::procedures::solve)
    pub const SEARCH: &str = "search";

    /// Logs related to [building formulas](crate::builder)
    pub const BUILDER: &str = "builder";

    /// Logs related to [checking results](crate::procedures::check)
    pub const CHECK: &str = "check";
}
