use std::fmt::Debug;

use dichot_core::Observer;

use crate::traits::{HasBracket, HasIter};

/// Observer that records every solver event as a `tracing` debug event.
///
/// Never returns an action. Install a subscriber (for example
/// `tracing_subscriber::fmt`) with `debug` enabled to see the output.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    solver: &'static str,
}

impl LogObserver {
    /// Creates an observer that tags each record with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIter + HasBracket + Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let [lower, upper] = event.bracket();
        tracing::debug!(
            solver = self.solver,
            iter = event.iter(),
            lower,
            upper,
            width = event.width(),
            ?event,
            "iteration"
        );
        None
    }
}
