//! Dichotomy search for single-variable optimization.
//!
//! # Algorithm
//!
//! While the interval `[a, b]` is wider than `epsilon`, the solver evaluates
//! two probes placed `delta = epsilon / 2` apart around the midpoint,
//!
//! ```text
//! y = (a + b - delta) / 2
//! z = (a + b + delta) / 2
//! ```
//!
//! and keeps `[a, z]` when `f(y) <= f(z)`, otherwise `[y, b]`. Ties keep the
//! left part. The result is the midpoint of the final interval.
//!
//! Each iteration maps the width `w` to `(w + delta) / 2`, so the number of
//! iterations needed is `ceil(log2(2w / epsilon - 1))`; see
//! [`estimate`](crate::estimate).
//!
//! # Limitations
//!
//! - **Unimodal assumption**: on a function with several extrema the search
//!   settles on one of them, not necessarily the global one.
//! - **Two evaluations per iteration**: unlike golden section search, no probe
//!   is reused between iterations.
//!
//! # History
//!
//! [`Config::with_history`] (or [`minimize_with_history`]) records the
//! interval before every narrowing step. The recorded run takes exactly the
//! same path as an unrecorded one, so both return a bit-identical `x`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after both probes are
//! evaluated and before the interval is narrowed. Observers can return
//! [`Action::StopEarly`] to halt; the solution then reports the midpoint of
//! the current interval with [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod history;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Probe};
pub use history::{History, Record};
pub use solution::{Solution, Status, Traced};

pub(crate) use search::search;

use dichot_core::{Function, Interval, Observer};

/// Finds the minimum of `f` on `bracket` using dichotomy search.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns an error if the bracket is not a finite interval with `a < b`,
/// if `f` returns a non-finite value at a probe, or if the interval is still
/// wider than `epsilon` after `config.max_iters()` iterations.
pub fn minimize<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    search(f, interval.as_array(), config, observer, |v| v)
}

/// Finds the minimum of `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(f, bracket, config, ())
}

/// Finds the minimum of `f` and returns the full iteration history.
///
/// History recording is switched on regardless of `config`. The returned
/// [`Traced`] also carries `f(x)` at the reported minimum.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_with_history<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Traced, Error> {
    let config = config.with_history();
    let solution = minimize(f, bracket, &config, ())?;
    let objective = f.call(solution.x);

    Ok(Traced {
        status: solution.status,
        x: solution.x,
        objective,
        iters: solution.iters,
        history: solution.history.unwrap_or_default(),
    })
}

/// Finds the maximum of `f` on `bracket` using dichotomy search.
///
/// Probe comparisons are negated; ties still keep the left part.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    search(f, interval.as_array(), config, observer, |v| -v)
}

/// Finds the maximum of `f` without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(f, bracket, config, ())
}
