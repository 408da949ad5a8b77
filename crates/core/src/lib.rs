//! Core traits and types for the dichot solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`]: a scalar function `f64 -> f64` that solvers evaluate
//! - [`Interval`]: a validated, finite, non-empty search interval
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod interval;
mod observer;

pub use function::Function;
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
