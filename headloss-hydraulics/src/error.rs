use headloss_core::constraint::ConstraintError;
use headloss_solve::fixed_point;
use thiserror::Error;

/// A supplied input violates a basic physical precondition.
///
/// Raised while building [`PipeGeometry`](crate::PipeGeometry) and
/// [`FlowConditions`](crate::FlowConditions), and when deriving or
/// classifying a Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidInputError {
    /// A named parameter failed its numeric constraint.
    #[error("{parameter} is invalid: {source}")]
    Constraint {
        parameter: &'static str,
        source: ConstraintError,
    },

    /// The Darcy-Weisbach path was requested without a kinematic viscosity.
    #[error("kinematic viscosity is required to compute the Reynolds number")]
    MissingViscosity,

    /// The Reynolds number is zero, negative, or not finite.
    #[error("Reynolds number must be positive and finite, got {reynolds}")]
    Reynolds { reynolds: f64 },
}

impl InvalidInputError {
    /// Returns a closure that tags a [`ConstraintError`] with a parameter name.
    pub(crate) fn constraint(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { parameter, source }
    }
}

/// A formula received a parameter outside its mathematical domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum DomainError {
    #[error("{parameter} must be positive, got {value}")]
    NotPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be non-negative, got {value}")]
    Negative { parameter: &'static str, value: f64 },

    /// The formula evaluated to infinity or NaN for otherwise valid inputs.
    #[error("{quantity} is not finite for the given inputs")]
    NonFinite { quantity: &'static str },
}

impl DomainError {
    /// Passes `value` through if it is strictly positive (NaN fails).
    pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotPositive { parameter, value })
        }
    }

    /// Passes `value` through if it is zero or greater (NaN fails).
    pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value >= 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(Self::Negative { parameter, value })
        }
    }
}

/// The Colebrook-White iteration left the region where it is defined.
///
/// This is a genuine failure, distinct from running out of iterations.
/// Callers usually fall back to an explicit method such as Swamee-Jain.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NumericalInstabilityError {
    #[error("Reynolds number must be positive and finite, got {reynolds}")]
    NonPositiveReynolds { reynolds: f64 },

    #[error("friction factor became non-positive ({value}) at iteration {iter}")]
    NonPositiveFrictionFactor { iter: usize, value: f64 },

    #[error("logarithm argument became non-positive ({value}) at iteration {iter}")]
    NonPositiveLogArgument { iter: usize, value: f64 },

    #[error("friction factor became non-finite ({value}) at iteration {iter}")]
    NonFinite { iter: usize, value: f64 },

    #[error("invalid iteration config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// A solver failure with no more specific classification.
    #[error("iteration failed")]
    Solver(#[source] fixed_point::Error),
}

/// Errors from [`solve_friction_factor`](crate::solve_friction_factor).
#[derive(Debug, Error)]
pub enum FrictionFactorError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    NumericalInstability(#[from] NumericalInstabilityError),
}

/// Errors from an end-to-end [`evaluate`](crate::evaluate) call.
#[derive(Debug, Error)]
pub enum HeadLossError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    NumericalInstability(#[from] NumericalInstabilityError),
}

impl From<FrictionFactorError> for HeadLossError {
    fn from(err: FrictionFactorError) -> Self {
        match err {
            FrictionFactorError::Domain(e) => Self::Domain(e),
            FrictionFactorError::NumericalInstability(e) => Self::NumericalInstability(e),
        }
    }
}
