//! Reusable observers for the dichot solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both the dichotomy minimizer and the root solver.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIter`], [`HasBracket`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: emits a `tracing` debug record per iteration
//! - [`Deadline`]: stops the solver once a wall-clock budget is spent
//!
//! [`Observer`]: dichot_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasBracket`]: traits::HasBracket
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod log;

pub use deadline::Deadline;
pub use log::LogObserver;
