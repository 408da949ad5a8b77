/// Indicates how the root solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to less than `epsilon`.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket: the estimate of the root.
    pub x: f64,

    /// Final bracket.
    pub bracket: [f64; 2],

    /// Bisection depth. Passes that moved to an extremum are not counted.
    pub iters: usize,
}
