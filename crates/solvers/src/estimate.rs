//! Closed-form iteration estimate for the dichotomy loop.
//!
//! Both the minimizer and the root solver map an interval of width `w` to one
//! of width `(w + epsilon / 2) / 2`. After `k` iterations the width is
//!
//! ```text
//! w_k = epsilon / 2 + (w_0 - epsilon / 2) / 2^k
//! ```
//!
//! and solving `w_k = epsilon` for `k` gives `log2(2 * w_0 / epsilon - 1)`.

use thiserror::Error;

/// Errors that can occur when estimating an iteration count.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// The tolerance is zero, negative or not finite.
    #[error("epsilon must be finite and positive, got {epsilon}")]
    InvalidTolerance { epsilon: f64 },

    /// The argument of the logarithm is not a positive finite number.
    #[error("log2 argument {argument} is outside the domain (requires 2|b - a| > epsilon)")]
    Domain { argument: f64 },
}

/// Predicts the number of narrowing iterations for `bracket` and `epsilon`.
///
/// Returns `log2(2 * |b - a| / epsilon - 1)`. The value is usually fractional;
/// use [`max_iters`] for a usable bound.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidTolerance`] if `epsilon` is not finite and
/// positive, and [`EstimateError::Domain`] if `2 * |b - a| <= epsilon` or the
/// bracket is not finite.
pub fn iterations(bracket: [f64; 2], epsilon: f64) -> Result<f64, EstimateError> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(EstimateError::InvalidTolerance { epsilon });
    }

    let [a, b] = bracket;
    let argument = 2.0 * (b - a).abs() / epsilon - 1.0;
    if !argument.is_finite() || argument <= 0.0 {
        return Err(EstimateError::Domain { argument });
    }

    Ok(argument.log2())
}

/// Rounds [`iterations`] up into an iteration bound.
///
/// Returns zero when the bracket is already within tolerance, where the
/// logarithm is negative.
///
/// # Errors
///
/// Returns an error under the same conditions as [`iterations`].
pub fn max_iters(bracket: [f64; 2], epsilon: f64) -> Result<usize, EstimateError> {
    let estimate = iterations(bracket, epsilon)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(estimate.ceil().max(0.0) as usize)
}
