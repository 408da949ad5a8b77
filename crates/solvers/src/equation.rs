//! Solvers for scalar equations, finding `x` with `f(x) = 0` on an interval.
//!
//! # Solvers
//!
//! - [`root`]: bisection of a sign change, falling back to the dichotomy
//!   minimizer when the endpoints share a sign
//! - [`scan`]: splits an interval at its extremum and looks for one root on
//!   each side

pub mod root;
pub mod scan;
