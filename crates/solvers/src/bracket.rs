/// Working interval shared by the dichotomy minimizer and the root solver.
///
/// Both solvers narrow `[lower, upper]` through the same pair of offset
/// midpoints, `(lower + upper ∓ offset) / 2`, with `offset = epsilon / 2`.
/// Unlike [`Interval`](dichot_core::Interval) this type is unvalidated: the
/// root solver may hand the minimizer a bracket that floating-point rounding
/// has collapsed to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    offset: f64,
}

impl Bracket {
    /// Creates a bracket whose probes sit `epsilon / 2` apart.
    pub(crate) fn new(lower: f64, upper: f64, epsilon: f64) -> Self {
        Self {
            lower,
            upper,
            offset: epsilon / 2.0,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub(crate) fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the probe pair `(left, right)`, symmetric around the midpoint.
    pub(crate) fn offset_midpoints(&self) -> (f64, f64) {
        let sum = self.lower + self.upper;
        ((sum - self.offset) / 2.0, (sum + self.offset) / 2.0)
    }

    /// Keeps `[lower, right]`, discarding everything above the right probe.
    pub(crate) fn keep_lower(&mut self, right: f64) {
        self.upper = right;
    }

    /// Keeps `[left, upper]`, discarding everything below the left probe.
    pub(crate) fn keep_upper(&mut self, left: f64) {
        self.lower = left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn offset_midpoints_straddle_midpoint() {
        let bracket = Bracket::new(0.0, 4.0, 0.2);
        let (left, right) = bracket.offset_midpoints();

        assert_relative_eq!(left, 1.95, epsilon = 1e-12);
        assert_relative_eq!(right, 2.05, epsilon = 1e-12);
        assert_relative_eq!(right - left, 0.1, epsilon = 1e-12);
        assert_relative_eq!(0.5 * (left + right), bracket.midpoint(), epsilon = 1e-12);
    }

    #[test]
    fn keep_lower_moves_upper_bound() {
        let mut bracket = Bracket::new(0.0, 4.0, 0.2);
        let (_, right) = bracket.offset_midpoints();

        bracket.keep_lower(right);

        assert_eq!(bracket.as_array(), [0.0, right]);
        assert_relative_eq!(bracket.width(), 2.05, epsilon = 1e-12);
    }

    #[test]
    fn keep_upper_moves_lower_bound() {
        let mut bracket = Bracket::new(0.0, 4.0, 0.2);
        let (left, _) = bracket.offset_midpoints();

        bracket.keep_upper(left);

        assert_eq!(bracket.as_array(), [left, 4.0]);
        assert_relative_eq!(bracket.width(), 2.05, epsilon = 1e-12);
    }

    #[test]
    fn width_shrinks_toward_offset() {
        // w' = (w + offset) / 2, so the width approaches the offset from above.
        let mut bracket = Bracket::new(0.0, 1.0, 0.1);
        for _ in 0..60 {
            let (_, right) = bracket.offset_midpoints();
            bracket.keep_lower(right);
        }
        assert_relative_eq!(bracket.width(), 0.05, epsilon = 1e-12);
    }
}
