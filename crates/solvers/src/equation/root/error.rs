use dichot_core::IntervalError;
use thiserror::Error;

use crate::optimization::dichotomy;

/// Errors that can occur while solving for a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    /// The endpoints share a sign and so does every point tested around the
    /// extremum between them.
    #[error("no root on [{lower}, {upper}]: f keeps its sign around the extremum at {extremum}")]
    NoRoot {
        lower: f64,
        upper: f64,
        extremum: f64,
    },

    #[error("bracket [{lower}, {upper}] not resolved after {max_iters} passes")]
    Convergence {
        lower: f64,
        upper: f64,
        max_iters: usize,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("minimizer failed")]
    Minimizer(#[source] dichotomy::Error),
}
