/// Event emitted by the root solver once per narrowing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The endpoints share a sign, so the upper bound moved to the extremum
    /// found by the minimizer.
    Narrowed {
        /// Pass counter (1-based, shared with [`Event::Bisected`]).
        iter: usize,
        /// Bracket before narrowing.
        bracket: [f64; 2],
        /// Extremum returned by the minimizer; the new upper bound.
        extremum: f64,
    },

    /// The endpoints bracket a sign change and the bracket was halved.
    Bisected {
        /// Pass counter (1-based, shared with [`Event::Narrowed`]).
        iter: usize,
        /// Bisection depth after this step.
        depth: usize,
        /// Bracket before halving.
        bracket: [f64; 2],
        /// Point compared against the lower endpoint.
        probe: f64,
        /// `f(probe)`.
        value: f64,
    },
}

impl Event {
    /// Returns the pass counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Narrowed { iter, .. } | Event::Bisected { iter, .. } => *iter,
        }
    }

    /// Returns the bracket the pass started from.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        match self {
            Event::Narrowed { bracket, .. } | Event::Bisected { bracket, .. } => *bracket,
        }
    }

    /// Returns the width of the bracket the pass started from.
    #[must_use]
    pub fn width(&self) -> f64 {
        let [lower, upper] = self.bracket();
        upper - lower
    }
}
