use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of all assumptions made.
    pub decisions: usize,

    /// A count of all unit clauses propagated.
    pub propagations: usize,

    /// A count of the resolutions in the proof of an unsatisfiable formula.
    pub resolutions: usize,

    /// A count of all assumptions eliminated from a proof.
    pub eliminations: usize,

    /// A count of branches skipped, as the refutation of the first branch did not require its assumption.
    pub pruned: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Counters {
    /// The counters, as lines of `name value` pairs.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("decisions {}", self.decisions),
            format!("propagations {}", self.propagations),
            format!("resolutions {}", self.resolutions),
            format!("eliminations {}", self.eliminations),
            format!("pruned {}", self.pruned),
            format!("time {:.3}s", self.time.as_secs_f64()),
        ]
    }
}
