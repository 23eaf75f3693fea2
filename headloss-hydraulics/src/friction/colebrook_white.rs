//! Colebrook-White friction factor by fixed-point iteration.
//!
//! The Colebrook-White equation
//!
//! ```text
//! 1/√f = −2·log10(ε/(3.71D) + 2.51/(Re·√f))
//! ```
//!
//! is implicit in `f`. Rearranged as `f = g(f)`,
//!
//! ```text
//! g(f) = 1 / [−2·log10(ε/(3.71D) + 2.51/(Re·√f))]²
//! ```
//!
//! it is solved by repeated substitution from a fixed seed of `f₀ = 0.002`
//! until successive iterates differ by less than `1e-6`, for at most 50
//! iterations. Hitting the cap is not an error: the last iterate is returned
//! with `converged == false`.

use headloss_solve::{
    Observer,
    fixed_point::{self, Action, Event, FixedPointMap},
};
use thiserror::Error;

use crate::NumericalInstabilityError;

/// Initial friction factor for the iteration.
pub const SEED: f64 = 0.002;

/// Convergence tolerance on `|f_{i+1} − f_i|`.
pub const TOLERANCE: f64 = 1e-6;

/// Iteration cap.
pub const MAX_ITERATIONS: usize = 50;

/// Iteration settings for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    pub seed: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Record every iterate in [`ColebrookSolution::trace`].
    pub record_trace: bool,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            seed: SEED,
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            record_trace: false,
        }
    }
}

impl ColebrookConfig {
    /// Returns the default config with trace recording switched on.
    #[must_use]
    pub fn traced() -> Self {
        Self {
            record_trace: true,
            ..Self::default()
        }
    }
}

/// Outcome of a Colebrook-White solve.
#[derive(Debug, Clone, PartialEq)]
pub struct ColebrookSolution {
    /// Last computed friction factor.
    pub friction_factor: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// `true` if the tolerance was met before the cap.
    pub converged: bool,
    /// Iterates `f₁, f₂, …` in order, empty unless requested.
    pub trace: Vec<f64>,
}

/// Guard violations raised by the map; tagged with the iteration number
/// once they surface from the solver.
#[derive(Debug, Clone, Copy, Error)]
enum Guard {
    #[error("non-positive friction factor {0}")]
    FrictionFactor(f64),
    #[error("non-positive logarithm argument {0}")]
    LogArgument(f64),
}

/// The map `g(f)` for fixed `Re` and `ε/D`.
struct ColebrookMap {
    roughness_term: f64,
    reynolds: f64,
}

impl FixedPointMap for ColebrookMap {
    type Error = Guard;

    fn apply(&self, f: f64) -> Result<f64, Self::Error> {
        if !(f > 0.0) {
            return Err(Guard::FrictionFactor(f));
        }

        let argument = self.roughness_term + 2.51 / (self.reynolds * f.sqrt());
        if !(argument > 0.0) {
            return Err(Guard::LogArgument(argument));
        }

        let inv_sqrt_f = -2.0 * argument.log10();
        Ok(1.0 / (inv_sqrt_f * inv_sqrt_f))
    }
}

/// Solves Colebrook-White for the Darcy friction factor.
///
/// # Errors
///
/// Returns a [`NumericalInstabilityError`] if `reynolds` is not positive and
/// finite, if an iterate or the logarithm argument becomes non-positive, or
/// if an iterate becomes non-finite.
pub fn solve(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> Result<ColebrookSolution, NumericalInstabilityError> {
    solve_observed(reynolds, relative_roughness, config, ())
}

/// Solves Colebrook-White, reporting each iteration to `observer`.
///
/// The observer may return [`Action::StopEarly`], in which case the current
/// iterate is returned with `converged == false`.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_observed<Obs>(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
    mut observer: Obs,
) -> Result<ColebrookSolution, NumericalInstabilityError>
where
    Obs: Observer<Event, Action>,
{
    if !(reynolds > 0.0 && reynolds.is_finite()) {
        return Err(NumericalInstabilityError::NonPositiveReynolds { reynolds });
    }

    let map = ColebrookMap {
        roughness_term: relative_roughness / 3.71,
        reynolds,
    };
    let solver_config = fixed_point::Config {
        max_iters: config.max_iterations,
        abs_tol: config.tolerance,
    };

    let mut trace = Vec::new();
    let solution = fixed_point::solve(&map, config.seed, &solver_config, |event: &Event| {
        if config.record_trace {
            trace.push(event.next);
        }
        observer.observe(event)
    })
    .map_err(instability)?;

    Ok(ColebrookSolution {
        friction_factor: solution.x,
        iterations: solution.iters,
        converged: solution.converged(),
        trace,
    })
}

/// Translates a solver failure into the instability it represents.
fn instability(err: fixed_point::Error) -> NumericalInstabilityError {
    match err {
        fixed_point::Error::InvalidConfig { reason } => {
            NumericalInstabilityError::InvalidConfig { reason }
        }
        fixed_point::Error::NonFiniteInitialGuess { value } => {
            NumericalInstabilityError::NonFinite { iter: 0, value }
        }
        fixed_point::Error::NonFiniteIterate { iter, next, .. } => {
            NumericalInstabilityError::NonFinite { iter, value: next }
        }
        fixed_point::Error::Map { iter, x, source } => match source.downcast::<Guard>() {
            Ok(guard) => match *guard {
                Guard::FrictionFactor(value) => {
                    NumericalInstabilityError::NonPositiveFrictionFactor { iter, value }
                }
                Guard::LogArgument(value) => {
                    NumericalInstabilityError::NonPositiveLogArgument { iter, value }
                }
            },
            Err(source) => {
                NumericalInstabilityError::Solver(fixed_point::Error::Map { iter, x, source })
            }
        },
        other => NumericalInstabilityError::Solver(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as StdError;

    use approx::assert_relative_eq;

    use crate::friction::explicit::swamee_jain;

    /// Reynolds number of 0.05 m³/s of water (ν = 1e-6 m²/s) in a 0.3 m pipe.
    const RE_REFERENCE: f64 = 212_206.590_789_193_78;

    #[test]
    fn reference_case_converges() {
        let solution = solve(RE_REFERENCE, 0.0005, &ColebrookConfig::default()).unwrap();

        assert!(solution.converged);
        assert_eq!(solution.iterations, 5);
        assert_relative_eq!(
            solution.friction_factor,
            0.018_712_508_740_604,
            max_relative = 1e-9
        );
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn trace_records_every_iterate() {
        let solution = solve(RE_REFERENCE, 0.0005, &ColebrookConfig::traced()).unwrap();

        assert_eq!(solution.trace.len(), solution.iterations);
        assert_relative_eq!(solution.trace[0], 0.021_642_214_945_610, max_relative = 1e-9);
        assert_relative_eq!(solution.trace[1], 0.018_589_496_030_392, max_relative = 1e-9);
        assert_eq!(solution.trace.last(), Some(&solution.friction_factor));
    }

    #[test]
    fn is_deterministic() {
        let config = ColebrookConfig::default();
        let first = solve(1.0e5, 0.0015, &config).unwrap();
        let second = solve(1.0e5, 0.0015, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn agrees_with_swamee_jain_in_its_range() {
        for (reynolds, rr) in [(1.0e5, 0.0015), (RE_REFERENCE, 0.0005), (1.0e6, 1.0e-5)] {
            let colebrook = solve(reynolds, rr, &ColebrookConfig::default())
                .unwrap()
                .friction_factor;
            let explicit = swamee_jain(reynolds, rr);
            assert_relative_eq!(colebrook, explicit, max_relative = 0.05);
        }
    }

    #[test]
    fn smooth_pipe() {
        let solution = solve(1.0e5, 0.0, &ColebrookConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 7);
        assert_relative_eq!(
            solution.friction_factor,
            0.017_989_785_313_177,
            max_relative = 1e-9
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_settings() {
        let config = ColebrookConfig::default();

        assert_eq!(config.seed, 0.002);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 50);
        assert!(!config.record_trace);
        assert_eq!(
            ColebrookConfig::traced(),
            ColebrookConfig {
                record_trace: true,
                ..config
            }
        );
    }

    #[test]
    fn default_cap_stops_an_oscillating_iteration() {
        // At Re = 1 the iterates bounce around without settling.
        let solution = solve(1.0, 0.0, &ColebrookConfig::default()).unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iterations, 50);
        assert_relative_eq!(
            solution.friction_factor,
            1.465_301_030_806_977,
            max_relative = 1e-9
        );
    }

    #[test]
    fn cap_returns_last_iterate_unconverged() {
        let config = ColebrookConfig {
            max_iterations: 2,
            record_trace: true,
            ..ColebrookConfig::default()
        };
        let solution = solve(RE_REFERENCE, 0.0005, &config).unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iterations, 2);
        assert_relative_eq!(
            solution.friction_factor,
            0.018_589_496_030_392,
            max_relative = 1e-9
        );
        assert_eq!(solution.trace.len(), 2);
    }

    #[test]
    fn observer_can_stop_early() {
        let mut seen = 0;
        let observer = |event: &Event| {
            seen += 1;
            (event.iter == 3).then_some(Action::StopEarly)
        };

        let solution = solve_observed(
            RE_REFERENCE,
            0.0005,
            &ColebrookConfig::default(),
            observer,
        )
        .unwrap();

        assert_eq!(seen, 3);
        assert_eq!(solution.iterations, 3);
        assert!(!solution.converged);
    }

    #[test]
    fn non_positive_reynolds_is_unstable() {
        for reynolds in [0.0, -10.0, f64::NAN] {
            let err = solve(reynolds, 0.0005, &ColebrookConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                NumericalInstabilityError::NonPositiveReynolds { .. }
            ));
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn non_positive_seed_is_unstable() {
        let config = ColebrookConfig {
            seed: 0.0,
            ..ColebrookConfig::default()
        };
        let err = solve(RE_REFERENCE, 0.0005, &config).unwrap_err();
        assert!(matches!(
            err,
            NumericalInstabilityError::NonPositiveFrictionFactor { iter: 1, value } if value == 0.0
        ));
    }

    #[test]
    fn negative_log_argument_is_unstable() {
        let err = solve(RE_REFERENCE, -1.0, &ColebrookConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            NumericalInstabilityError::NonPositiveLogArgument { iter: 1, .. }
        ));
    }

    #[test]
    fn unclassified_map_errors_keep_their_source() {
        #[derive(Debug, Error)]
        #[error("lookup table exhausted")]
        struct TableExhausted;

        let err = instability(fixed_point::Error::Map {
            iter: 4,
            x: 0.02,
            source: Box::new(TableExhausted),
        });

        let NumericalInstabilityError::Solver(solver_err) = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(matches!(solver_err, fixed_point::Error::Map { iter: 4, .. }));

        let root = StdError::source(&err)
            .and_then(StdError::source)
            .expect("map error should be reachable through the source chain");
        assert!(root.downcast_ref::<TableExhausted>().is_some());
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = ColebrookConfig {
            max_iterations: 0,
            ..ColebrookConfig::default()
        };
        let err = solve(RE_REFERENCE, 0.0005, &config).unwrap_err();
        assert!(matches!(err, NumericalInstabilityError::InvalidConfig { .. }));
    }
}
