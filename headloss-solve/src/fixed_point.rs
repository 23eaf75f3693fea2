//! Fixed-point iteration for equations of the form `x = g(x)`.
//!
//! Starting from a seed `x₀`, the solver repeatedly applies the map,
//! `x_{i+1} = g(x_i)`, and stops as soon as two successive iterates differ by
//! less than [`Config::abs_tol`]. If the tolerance is not met within
//! [`Config::max_iters`] applications, the last iterate is returned with
//! [`Status::MaxIters`] rather than an error, leaving it to the caller to
//! decide whether a best-effort value is acceptable.
//!
//! The iteration is fully deterministic: the same map, seed, and config always
//! produce the same sequence of iterates and the same iteration count.

mod config;
mod error;
mod solution;

use std::{convert::Infallible, error::Error as StdError};

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use crate::Observer;

/// A map `g` whose fixed point `x = g(x)` is sought.
pub trait FixedPointMap {
    type Error: StdError + Send + Sync + 'static;

    /// Applies the map once, returning `g(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `g` cannot be evaluated at `x`.
    fn apply(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Infallible closures are maps.
impl<F> FixedPointMap for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn apply(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the most recent iterate.
    StopEarly,
}

/// Iteration event emitted by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the map was applied to.
    pub x: f64,
    /// New iterate `g(x)`.
    pub next: f64,
    /// Absolute change `|next - x|`.
    pub delta: f64,
}

/// Solves `x = g(x)` by repeated substitution starting from `x0`.
///
/// The observer sees every iteration after the new iterate has been checked
/// for finiteness and before the convergence test.
///
/// # Errors
///
/// Returns an error if the config is invalid, the seed is not finite,
/// the map fails, or the map produces a non-finite iterate.
pub fn solve<M, Obs>(
    map: &M,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: FixedPointMap,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteInitialGuess { value: x0 });
    }

    let mut x = x0;
    let mut delta = f64::INFINITY;

    for iter in 1..=config.max_iters {
        let next = map.apply(x).map_err(|source| Error::Map {
            iter,
            x,
            source: Box::new(source),
        })?;

        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { iter, x, next });
        }

        delta = (next - x).abs();

        let event = Event {
            iter,
            x,
            next,
            delta,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x: next,
                        delta,
                        iters: iter,
                    });
                }
            }
        }

        if delta < config.abs_tol {
            return Ok(Solution {
                status: Status::Converged,
                x: next,
                delta,
                iters: iter,
            });
        }

        x = next;
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        delta,
        iters: config.max_iters,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the seed is not finite,
/// the map fails, or the map produces a non-finite iterate.
pub fn solve_unobserved<M: FixedPointMap>(
    map: &M,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(map, x0, config, ())
}
