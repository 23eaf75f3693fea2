/// Hook that sees every solver event and may steer the iteration.
///
/// A solver calls `observe` once per event. Returning `None` lets the solver
/// carry on; returning `Some(action)` asks for a solver-specific action such
/// as stopping early. Recording an iteration trace, counting steps, or
/// capping work by some external budget are all done through this hook, so
/// solvers themselves never print or log.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
