//! Dichotomy minimization and bisection root finding for scalar functions.
//!
//! # Modules
//!
//! - [`optimization::dichotomy`]: minimum (or maximum) of a unimodal function
//!   by repeatedly comparing two probes placed just either side of the midpoint
//! - [`equation::root`]: a zero crossing, by bisecting a sign change or by
//!   first narrowing toward the extremum when the endpoints share a sign
//! - [`equation::scan`]: up to two roots, one either side of the extremum
//! - [`estimate`]: closed-form iteration count for a given width and tolerance
//!
//! Every solver takes a [`Function`](dichot_core::Function), a bracket
//! `[a, b]` with `a < b`, and a validated `Config` carrying the tolerance.

mod bracket;

pub mod equation;
pub mod estimate;
pub mod optimization;

/// Default cap on solver iterations.
///
/// Large enough for any bracket of finite `f64` endpoints with a tolerance
/// above the spacing of representable numbers; reaching it signals
/// stagnation or a violated unimodality assumption.
pub const DEFAULT_MAX_ITERS: usize = 10_000;
