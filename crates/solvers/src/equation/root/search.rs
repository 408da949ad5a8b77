use dichot_core::{Function, Interval, Observer};

use crate::{bracket::Bracket, optimization::dichotomy};

use super::{Action, Config, Error, Event, Solution, Status};

/// Whether the solver tests for a root before its first move to an extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Existence {
    Assume,
    Verify,
}

/// Root solver loop shared by the plain and the checked entry points.
pub(super) fn search<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    existence: Existence,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let interval = Interval::try_from(bracket)?;
    let epsilon = config.epsilon();
    let minimizer = dichotomy::Config::validated(epsilon, config.max_iters());

    let mut bracket = Bracket::new(interval.lower(), interval.upper(), epsilon);
    let mut depth = 0;
    let mut passes = 0;

    loop {
        let f_lower = eval(f, bracket.lower)?;
        let f_upper = eval(f, bracket.upper)?;
        let shares_sign = same_sign(f_lower, f_upper);

        if !shares_sign && bracket.width() < epsilon {
            tracing::debug!(
                depth,
                passes,
                x = bracket.midpoint(),
                "root search converged"
            );
            return Ok(finish(&bracket, Status::Converged, depth));
        }

        if passes == config.max_iters() {
            return Err(Error::Convergence {
                lower: bracket.lower,
                upper: bracket.upper,
                max_iters: config.max_iters(),
            });
        }
        passes += 1;

        if shares_sign {
            let extremum = dichotomy::search(f, bracket.as_array(), &minimizer, (), |v| v)
                .map_err(Error::Minimizer)?
                .x;

            if existence == Existence::Verify && passes == 1 {
                verify_existence(f, &bracket, extremum, f_lower, epsilon)?;
            }

            let event = Event::Narrowed {
                iter: passes,
                bracket: bracket.as_array(),
                extremum,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(finish(&bracket, Status::StoppedByObserver, depth));
            }

            bracket.keep_lower(extremum);
        } else {
            let (left, right) = bracket.offset_midpoints();
            let value = eval(f, left)?;

            let event = Event::Bisected {
                iter: passes,
                depth: depth + 1,
                bracket: bracket.as_array(),
                probe: left,
                value,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(finish(&bracket, Status::StoppedByObserver, depth));
            }

            depth += 1;
            if same_sign(value, f_lower) {
                bracket.keep_upper(left);
            } else {
                bracket.keep_lower(right);
            }
        }
    }
}

/// Fails with [`Error::NoRoot`] unless `f` reaches the sign opposite to
/// `f_lower` at the extremum or half a tolerance to either side of it.
fn verify_existence<F: Function>(
    f: &F,
    bracket: &Bracket,
    extremum: f64,
    f_lower: f64,
    epsilon: f64,
) -> Result<(), Error> {
    let offset = epsilon / 2.0;

    for x in [extremum, extremum - offset, extremum + offset] {
        if !same_sign(eval(f, x)?, f_lower) {
            return Ok(());
        }
    }

    Err(Error::NoRoot {
        lower: bracket.lower,
        upper: bracket.upper,
        extremum,
    })
}

/// Returns true if `a` and `b` are both strictly positive or both strictly
/// negative. Zero shares a sign with nothing.
fn same_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

/// Evaluates `f` at `x`, rejecting NaN and infinities.
fn eval<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.call(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

fn finish(bracket: &Bracket, status: Status, depth: usize) -> Solution {
    Solution {
        status,
        x: bracket.midpoint(),
        bracket: bracket.as_array(),
        iters: depth,
    }
}
