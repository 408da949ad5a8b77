use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{lower}, {upper}]")]
    NonFinite { lower: f64, upper: f64 },

    /// The lower endpoint is not strictly below the upper endpoint.
    #[error("empty interval: lower {lower} must be less than upper {upper}")]
    Empty { lower: f64, upper: f64 },
}

/// A finite search interval `[lower, upper]` with `lower < upper`.
///
/// Solvers only ever narrow an interval; none of them widen it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Reversed endpoints are rejected rather than swapped.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if either endpoint is NaN or
    /// infinite, and [`IntervalError::Empty`] if `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite { lower, upper });
        }

        if lower >= upper {
            return Err(IntervalError::Empty { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from(bracket: [f64; 2]) -> Result<Self, Self::Error> {
        let [lower, upper] = bracket;
        Self::new(lower, upper)
    }
}
