use thiserror::Error;

use crate::DEFAULT_MAX_ITERS;

/// Configuration for the dichotomy solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    record_history: bool,
}

/// Errors that can occur when validating a dichotomy solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

impl Config {
    /// Creates a config with the given tolerance.
    ///
    /// The iteration cap defaults to [`DEFAULT_MAX_ITERS`] and history
    /// recording is off.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and strictly positive.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon(epsilon));
        }

        Ok(Self::validated(epsilon, DEFAULT_MAX_ITERS))
    }

    /// Builds a config from an `epsilon` the caller has already validated.
    pub(crate) fn validated(epsilon: f64, max_iters: usize) -> Self {
        Self {
            epsilon,
            max_iters,
            record_history: false,
        }
    }

    /// Returns a copy with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy that records the interval before every iteration.
    #[must_use]
    pub fn with_history(self) -> Self {
        Self {
            record_history: true,
            ..self
        }
    }

    /// Returns the stopping width.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of narrowing iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if the solver records per-iteration history.
    #[must_use]
    pub fn records_history(&self) -> bool {
        self.record_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = Config::new(1e-3).expect("valid epsilon");

        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
        assert!(!config.records_history());
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Epsilon(0.0)));
        assert_eq!(Config::new(-1e-3), Err(ConfigError::Epsilon(-1e-3)));
    }

    #[test]
    fn rejects_non_finite_epsilon() {
        assert!(Config::new(f64::NAN).is_err());
        assert!(Config::new(f64::INFINITY).is_err());
    }

    #[test]
    fn builders_leave_epsilon_untouched() {
        let config = Config::new(0.5)
            .expect("valid epsilon")
            .with_max_iters(7)
            .with_history();

        assert_eq!(config.max_iters(), 7);
        assert!(config.records_history());
        assert!((config.epsilon() - 0.5).abs() < f64::EPSILON);
    }
}
