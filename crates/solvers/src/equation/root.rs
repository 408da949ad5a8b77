//! Root finding by bisection with an extremum fallback.
//!
//! # Algorithm
//!
//! Each pass looks at the signs of `f(a)` and `f(b)`:
//!
//! 1. If they share a sign, the dichotomy minimizer locates the minimum `m`
//!    of `f` on `[a, b]` and the search continues on `[a, m]`.
//! 2. Otherwise, if `b - a < epsilon`, the midpoint is returned.
//! 3. Otherwise the bracket is halved using the same offset probes as the
//!    minimizer, `(a + b ∓ epsilon / 2) / 2`, keeping the half where the sign
//!    changes.
//!
//! [`Solution::iters`] counts only the halving steps (the bisection depth).
//! Every pass of either kind counts toward [`Config::max_iters`].
//!
//! # Existence Check
//!
//! [`find_root`] assumes a root exists. When the endpoints share a sign and
//! the function has no root, it keeps narrowing toward the minimum until the
//! pass cap is hit.
//!
//! [`find_root_checked`] differs only when the very first pass is step 1. It
//! then tests whether `f` changes sign at `m` or half a tolerance to either
//! side of it, and fails with [`Error::NoRoot`] if not. Later passes are never
//! checked. This is a heuristic, not a proof: a root between `a` and `m` that
//! is invisible from those three points is missed.
//!
//! Signs are compared without multiplying, so tiny values that would
//! underflow as a product still count. Zero shares a sign with nothing.
//!
//! # Observer Events
//!
//! Each pass emits one [`Event`]: [`Event::Narrowed`] for step 1 and
//! [`Event::Bisected`] for step 3, after `f` has been evaluated and before
//! the bracket moves. Observers can return [`Action::StopEarly`]; the solver
//! then reports the midpoint of the current bracket with
//! [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use dichot_core::{Function, Observer};

use search::{Existence, search};

/// Finds a root of `f` on `bracket`, assuming one exists.
///
/// # Errors
///
/// Returns an error if the bracket is not a finite interval with `a < b`,
/// if `f` returns a non-finite value, if the inner minimizer fails, or if
/// the bracket is not resolved within `config.max_iters()` passes.
pub fn find_root<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, config, observer, Existence::Assume)
}

/// Finds a root of `f` without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`find_root`].
pub fn find_root_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    find_root(f, bracket, config, ())
}

/// Finds a root of `f` on `bracket`, failing fast when none appears to exist.
///
/// # Errors
///
/// Returns [`Error::NoRoot`] if the endpoints share a sign and so does every
/// point tested around the extremum, or any error [`find_root`] can return.
pub fn find_root_checked<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, config, observer, Existence::Verify)
}

/// Runs [`find_root_checked`] without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`find_root_checked`].
pub fn find_root_checked_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    find_root_checked(f, bracket, config, ())
}
