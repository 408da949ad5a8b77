use dichot_core::IntervalError;

/// Errors that can occur during dichotomy search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error(
        "interval [{lower}, {upper}] still wider than {epsilon} after {max_iters} iterations"
    )]
    Convergence {
        lower: f64,
        upper: f64,
        epsilon: f64,
        max_iters: usize,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}
