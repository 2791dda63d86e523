use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every pair of clauses examined during saturation.
    pub pairs_examined: usize,

    /// A count of every resolvent derived, whether admitted or not.
    pub resolvents: usize,

    /// A count of every clause admitted, input or derived.
    pub added: usize,

    /// A count of every clause rejected as a duplicate.
    pub duplicates: usize,

    /// A count of every clause rejected as a tautology.
    pub tautologies: usize,

    /// The time taken during saturation.
    pub time: Duration,
}
