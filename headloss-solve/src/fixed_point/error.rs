use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during fixed-point iteration.
///
/// Reaching the iteration cap is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters) on the returned solution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {value}")]
    NonFiniteInitialGuess { value: f64 },

    #[error("map evaluation failed at iteration {iter} (x = {x})")]
    Map {
        iter: usize,
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite iterate {next} at iteration {iter} (x = {x})")]
    NonFiniteIterate { iter: usize, x: f64, next: f64 },
}
