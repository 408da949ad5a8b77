//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch both the dichotomy minimizer and the root solver.
//!
//! # Event traits
//!
//! - [`HasIter`]: events that carry a 1-based iteration counter
//! - [`HasBracket`]: events that carry the current bracket
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use dichot_core::Observer;
//! use dichot_observers::traits::{CanStopEarly, HasBracket};
//!
//! /// Stops once the bracket is narrower than `width`.
//! struct NarrowEnough {
//!     width: f64,
//! }
//!
//! impl<E: HasBracket, A: CanStopEarly> Observer<E, A> for NarrowEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.width() < self.width).then(A::stop_early)
//!     }
//! }
//! ```

use dichot_solvers::{equation::root, optimization::dichotomy};

/// An event that carries an iteration counter.
pub trait HasIter {
    /// Returns the 1-based iteration (or pass) number.
    fn iter(&self) -> usize;
}

/// An event that carries the bracket the solver is working on.
pub trait HasBracket {
    /// Returns the bracket as `[lower, upper]`.
    fn bracket(&self) -> [f64; 2];

    /// Returns the bracket width.
    fn width(&self) -> f64 {
        let [lower, upper] = self.bracket();
        upper - lower
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- dichotomy ---

impl HasIter for dichotomy::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasBracket for dichotomy::Event {
    fn bracket(&self) -> [f64; 2] {
        self.bracket
    }
}

impl CanStopEarly for dichotomy::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- root ---

impl HasIter for root::Event {
    fn iter(&self) -> usize {
        root::Event::iter(self)
    }
}

impl HasBracket for root::Event {
    fn bracket(&self) -> [f64; 2] {
        root::Event::bracket(self)
    }
}

impl CanStopEarly for root::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
