//! Locating up to two roots around a single extremum.
//!
//! [`find_all_roots`] minimizes `f` on `[a, b]`, splits the interval at the
//! minimum `m`, and runs [`find_root_checked`] on `[a, m]` and `[m, b]`.
//! A side without a root is skipped. The result is only complete for
//! functions with at most one interior extremum, such as a parabola.

use dichot_core::{Function, Interval};

use crate::optimization::dichotomy;

use super::root::{Config, Error, Solution, find_root_checked_unobserved};

/// Finds the roots of `f` on each side of its minimum on `bracket`.
///
/// Returns zero, one or two solutions, ordered left to right. A side on
/// which the checked solver reports [`Error::NoRoot`], or which is empty
/// because the minimum sits on an endpoint, is logged and left out.
///
/// # Errors
///
/// Returns an error if the bracket is not a finite interval with `a < b`, if
/// the minimizer fails, or if the root solver fails on either side for any
/// reason other than [`Error::NoRoot`].
pub fn find_all_roots<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Vec<Solution>, Error> {
    let interval = Interval::try_from(bracket)?;
    let minimizer = dichotomy::Config::validated(config.epsilon(), config.max_iters());
    let extremum = dichotomy::search(f, interval.as_array(), &minimizer, (), |v| v)
        .map_err(Error::Minimizer)?
        .x;

    let sides = [
        [interval.lower(), extremum],
        [extremum, interval.upper()],
    ];

    let mut roots = Vec::with_capacity(sides.len());
    for [lower, upper] in sides {
        if lower >= upper {
            tracing::debug!(lower, upper, extremum, "skipping empty side of extremum");
            continue;
        }

        match find_root_checked_unobserved(f, [lower, upper], config) {
            Ok(solution) => roots.push(solution),
            Err(Error::NoRoot { .. }) => {
                tracing::warn!(lower, upper, extremum, "no root on this side of the extremum");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(epsilon: f64) -> Config {
        Config::new(epsilon).expect("valid epsilon")
    }

    #[test]
    fn finds_both_roots_of_parabola() {
        let f = |x: f64| x * x - 2.0;

        let roots = find_all_roots(&f, [-5.0, 5.0], &config(1e-4)).expect("scan succeeds");

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].x, -std::f64::consts::SQRT_2, epsilon = 1e-4);
        assert_relative_eq!(roots[1].x, std::f64::consts::SQRT_2, epsilon = 1e-4);
    }

    #[test]
    fn skips_side_without_root() {
        // Minimum at 1.5; only the right side reaches zero, at 3.
        let f = |x: f64| x * (x - 3.0);

        let roots = find_all_roots(&f, [0.5, 10.0], &config(1e-4)).expect("scan succeeds");

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0].x, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn returns_nothing_when_function_stays_positive() {
        let f = |x: f64| x * x + 1.0;

        let roots = find_all_roots(&f, [-2.0, 3.0], &config(1e-3)).expect("scan succeeds");

        assert!(roots.is_empty());
    }

    #[test]
    fn monotonic_function_has_one_root() {
        // The minimum of an increasing function lands within epsilon of the
        // lower end, leaving a sliver on the left with no sign change.
        let f = |x: f64| x - 1.0;

        let roots = find_all_roots(&f, [0.0, 4.0], &config(1e-4)).expect("scan succeeds");

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0].x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn propagates_invalid_bracket() {
        let f = |x: f64| x;

        let result = find_all_roots(&f, [1.0, 1.0], &config(1e-4));

        assert!(matches!(result, Err(Error::InvalidInterval(_))));
    }
}
