use thiserror::Error;

use crate::DEFAULT_MAX_ITERS;

/// Configuration for the root solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a root solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

impl Config {
    /// Creates a config with the given tolerance.
    ///
    /// The iteration cap defaults to [`DEFAULT_MAX_ITERS`]. It bounds the
    /// number of narrowing passes, and every inner minimizer run separately.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and strictly positive.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon(epsilon));
        }

        Ok(Self {
            epsilon,
            max_iters: DEFAULT_MAX_ITERS,
        })
    }

    /// Returns a copy with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the stopping width.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of narrowing passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_shared_iteration_cap() {
        let config = Config::new(1e-4).expect("valid epsilon");
        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Epsilon(0.0)));
        assert!(Config::new(-0.5).is_err());
        assert!(Config::new(f64::NAN).is_err());
    }

    #[test]
    fn with_max_iters_overrides_cap() {
        let config = Config::new(1e-4).expect("valid epsilon").with_max_iters(12);
        assert_eq!(config.max_iters(), 12);
    }
}
