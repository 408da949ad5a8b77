use std::time::{Duration, Instant};

use dichot_core::Observer;

use crate::traits::CanStopEarly;

/// Observer that stops a solver once a wall-clock budget is spent.
///
/// The clock starts when the observer is created, not at the first event.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Returns true if the budget has been spent.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if !self.is_expired() {
            return None;
        }

        tracing::warn!(
            budget_ms = self.budget.as_millis(),
            "deadline reached, stopping solver"
        );
        Some(A::stop_early())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dichot_solvers::{equation::root, optimization::dichotomy};

    #[test]
    fn zero_budget_stops_at_first_iteration() {
        let f = |x: f64| (x + 2.0).powi(2);
        let config = dichotomy::Config::new(1e-9).expect("valid epsilon");

        let solution = dichotomy::minimize(&f, [-5.0, 5.0], &config, Deadline::new(Duration::ZERO))
            .expect("should stop cleanly");

        assert_eq!(solution.status, dichotomy::Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.bracket, [-5.0, 5.0]);
    }

    #[test]
    fn zero_budget_stops_root_solver_before_bisecting() {
        let f = |x: f64| x - 1.0;
        let config = root::Config::new(1e-9).expect("valid epsilon");

        let solution = root::find_root(&f, [0.0, 3.0], &config, Deadline::new(Duration::ZERO))
            .expect("should stop cleanly");

        assert_eq!(solution.status, root::Status::StoppedByObserver);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn generous_budget_lets_solver_finish() {
        let f = |x: f64| x - 1.0;
        let config = root::Config::new(1e-9).expect("valid epsilon");
        let deadline = Deadline::new(Duration::from_secs(3600));

        let solution =
            root::find_root(&f, [0.0, 3.0], &config, deadline).expect("should converge");

        assert_eq!(solution.status, root::Status::Converged);
        assert!(!Deadline::new(Duration::from_secs(3600)).is_expired());
    }
}
