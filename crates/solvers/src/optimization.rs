//! Solvers for scalar optimization, minimizing or maximizing `f(x)` on an
//! interval.
//!
//! # Solvers
//!
//! - [`dichotomy`]: derivative-free interval narrowing for unimodal functions,
//!   with optional per-iteration history

pub mod dichotomy;
