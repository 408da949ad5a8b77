use super::{History, Record};

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interval narrowed to within `epsilon`.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a dichotomy search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final interval: the estimate of the optimum.
    pub x: f64,

    /// Final interval.
    pub bracket: [f64; 2],

    /// Number of narrowing iterations performed.
    pub iters: usize,

    /// Per-iteration history, present when the config requested it.
    pub history: Option<History>,
}

/// The result of [`minimize_with_history`](super::minimize_with_history).
#[derive(Debug, Clone, PartialEq)]
pub struct Traced {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the minimum.
    pub x: f64,

    /// `f(x)` at the reported minimum.
    pub objective: f64,

    /// Number of narrowing iterations performed.
    pub iters: usize,

    /// Interval and width before each iteration.
    pub history: History,
}

impl Traced {
    /// Returns `(x, f(x), records, widths)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, f64, Vec<Record>, Vec<f64>) {
        let (records, widths) = self.history.into_parts();
        (self.x, self.objective, records, widths)
    }
}
