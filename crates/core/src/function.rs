/// A scalar function evaluated by the solvers.
///
/// Solvers treat the function as opaque and total: it should be defined and
/// finite everywhere the solver probes. Solvers report non-finite values as
/// errors rather than comparing them.
///
/// Closures and function pointers of type `Fn(f64) -> f64` implement this
/// trait automatically, so most callers never implement it by hand.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
