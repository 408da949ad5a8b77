/// A probe location with the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// The x value.
    pub x: f64,

    /// `f(x)`.
    pub value: f64,
}

impl Probe {
    /// Creates a new probe.
    #[must_use]
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}

/// Event emitted once per dichotomy iteration.
///
/// `bracket` is the interval before this iteration narrows it; `left` and
/// `right` are the two probes that decide which part is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// Interval being narrowed.
    pub bracket: [f64; 2],

    /// Probe just left of the midpoint.
    pub left: Probe,

    /// Probe just right of the midpoint.
    pub right: Probe,
}

impl Event {
    /// Returns the width of the interval being narrowed.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the midpoint of the interval being narrowed.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.bracket[0] + self.bracket[1]) / 2.0
    }
}
