use dichot_core::{Function, Observer};

use crate::bracket::Bracket;

use super::{Action, Config, Error, Event, History, Probe, Solution, Status};

/// Core dichotomy loop shared by minimization, maximization and the root
/// solver.
///
/// `transform` is applied to both probe values before they are compared, so
/// the identity minimizes and negation maximizes. `bracket` is not validated
/// here: callers check it, or (inside the root solver) it is a sub-interval
/// of a bracket that was.
pub(crate) fn search<F, Obs, T>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: T,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let epsilon = config.epsilon();
    let [lower, upper] = bracket;
    let mut bracket = Bracket::new(lower, upper, epsilon);
    let mut history = config.records_history().then(History::default);
    let mut iters = 0;

    while bracket.width() > epsilon {
        if iters == config.max_iters() {
            return Err(Error::Convergence {
                lower: bracket.lower,
                upper: bracket.upper,
                epsilon,
                max_iters: config.max_iters(),
            });
        }
        iters += 1;

        if let Some(history) = history.as_mut() {
            history.push(bracket.lower, bracket.upper);
        }

        let (y, z) = bracket.offset_midpoints();
        let left = probe(f, y)?;
        let right = probe(f, z)?;

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            left,
            right,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(&bracket, Status::StoppedByObserver, iters, history));
        }

        if transform(left.value) <= transform(right.value) {
            bracket.keep_lower(z);
        } else {
            bracket.keep_upper(y);
        }
    }

    tracing::debug!(
        iters,
        x = bracket.midpoint(),
        width = bracket.width(),
        "dichotomy search converged"
    );
    Ok(finish(&bracket, Status::Converged, iters, history))
}

/// Evaluates `f` at `x`, rejecting NaN and infinities.
fn probe<F: Function>(f: &F, x: f64) -> Result<Probe, Error> {
    let value = f.call(x);
    if value.is_finite() {
        Ok(Probe::new(x, value))
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

fn finish(bracket: &Bracket, status: Status, iters: usize, history: Option<History>) -> Solution {
    Solution {
        status,
        x: bracket.midpoint(),
        bracket: bracket.as_array(),
        iters,
        history,
    }
}
