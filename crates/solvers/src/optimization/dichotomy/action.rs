/// Actions an observer can take during dichotomy search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the midpoint of the current interval.
    StopEarly,
}
