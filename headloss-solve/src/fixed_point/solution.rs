/// Indicates whether the solver converged, ran out of iterations, or was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive iterates agreed within the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Last computed iterate.
    pub x: f64,
    /// Absolute change between the last two iterates.
    pub delta: f64,
    /// Number of map applications performed.
    pub iters: usize,
}

impl Solution {
    /// Returns `true` if the solver stopped because the tolerance was met.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
