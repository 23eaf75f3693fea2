//! Darcy friction factor determination.
//!
//! [`solve_friction_factor`] dispatches on a [`FrictionMethod`] and returns
//! the friction factor together with [`FrictionDiagnostics`]: the regime of
//! the flow, the iteration count for Colebrook-White, and any advisories
//! about methods used outside their documented range. Advisories never
//! change the numeric result.

pub mod colebrook_white;
pub mod explicit;

use std::fmt;

use headloss_solve::{
    Observer,
    fixed_point::{Action, Event},
};

use crate::{DomainError, FlowRegime, FrictionFactorError};

use colebrook_white::ColebrookConfig;

/// Method used to obtain the Darcy friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrictionMethod {
    /// `f = 64/Re`.
    Laminar,
    /// Implicit Colebrook-White equation, solved iteratively.
    ColebrookWhite,
    /// Explicit Swamee-Jain approximation, turbulent flow only.
    SwameeJain,
    /// Blasius correlation for smooth pipes in turbulent flow.
    Blasius,
    /// Fixed value picked from three relative-roughness bands.
    FixedRoughnessCategory,
}

impl FrictionMethod {
    /// All methods, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Laminar,
        Self::ColebrookWhite,
        Self::SwameeJain,
        Self::Blasius,
        Self::FixedRoughnessCategory,
    ];

    /// Picks a method suited to the flow regime.
    ///
    /// Laminar flow gets the exact `64/Re`; transitional and turbulent flow
    /// get Swamee-Jain, which stays explicit and needs no iteration. The
    /// transitional advisory is still attached when the factor is solved.
    #[must_use]
    pub fn for_regime(regime: FlowRegime) -> Self {
        match regime {
            FlowRegime::Laminar => Self::Laminar,
            FlowRegime::Transitional | FlowRegime::Turbulent => Self::SwameeJain,
        }
    }
}

impl fmt::Display for FrictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Laminar => "laminar (64/Re)",
            Self::ColebrookWhite => "Colebrook-White",
            Self::SwameeJain => "Swamee-Jain",
            Self::Blasius => "Blasius",
            Self::FixedRoughnessCategory => "fixed roughness category",
        };
        f.write_str(name)
    }
}

/// Non-fatal notes attached to a friction-factor result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// `2000 ≤ Re ≤ 4000`; every method is less reliable here.
    TransitionalFlow,
    /// A turbulent-flow correlation was evaluated at a laminar Reynolds number.
    TurbulentMethodAtLaminarRe { method: FrictionMethod },
    /// Swamee-Jain was evaluated outside `4000 < Re < 1e8`, `1e-6 < ε/D < 1e-2`.
    SwameeJainOutOfRange {
        reynolds: f64,
        relative_roughness: f64,
    },
    /// Colebrook-White stopped before meeting its tolerance.
    NotConverged { iterations: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransitionalFlow => write!(
                f,
                "Reynolds number is in the transitional region (2000-4000); results may be less accurate"
            ),
            Self::TurbulentMethodAtLaminarRe { method } => {
                write!(f, "{method} is intended for turbulent flow but Re < 2000")
            }
            Self::SwameeJainOutOfRange {
                reynolds,
                relative_roughness,
            } => write!(
                f,
                "Swamee-Jain used outside 4000 < Re < 1e8, 1e-6 < ε/D < 1e-2 (Re = {reynolds}, ε/D = {relative_roughness})"
            ),
            Self::NotConverged { iterations } => {
                write!(f, "Colebrook-White did not converge in {iterations} iterations")
            }
        }
    }
}

/// Diagnostics returned alongside a friction factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionDiagnostics {
    pub method: FrictionMethod,
    pub regime: FlowRegime,
    /// Iteration count, for Colebrook-White only.
    pub iterations: Option<usize>,
    /// `false` only if Colebrook-White stopped before converging.
    pub converged: bool,
    /// Set when Swamee-Jain is evaluated outside its validity range.
    pub out_of_range: bool,
    pub advisories: Vec<Advisory>,
    /// Colebrook-White iterates, if a trace was requested.
    pub trace: Vec<f64>,
}

impl FrictionDiagnostics {
    fn new(method: FrictionMethod, regime: FlowRegime) -> Self {
        let mut advisories = Vec::new();
        if regime == FlowRegime::Transitional {
            advisories.push(Advisory::TransitionalFlow);
        }

        Self {
            method,
            regime,
            iterations: None,
            converged: true,
            out_of_range: false,
            advisories,
            trace: Vec::new(),
        }
    }
}

/// A Darcy friction factor and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionFactor {
    /// Dimensionless Darcy friction factor `f`.
    pub value: f64,
    pub diagnostics: FrictionDiagnostics,
}

/// Computes the Darcy friction factor with the chosen method.
///
/// Colebrook-White runs with [`ColebrookConfig::default`].
///
/// # Errors
///
/// Returns [`FrictionFactorError::Domain`] if `reynolds` is not positive and
/// finite, if `relative_roughness` is negative, or if an explicit formula
/// evaluates to a non-finite value. Returns
/// [`FrictionFactorError::NumericalInstability`] if the Colebrook-White
/// iteration breaks down.
///
/// # Example
///
/// ```
/// use headloss_hydraulics::{FrictionMethod, solve_friction_factor};
///
/// let f = solve_friction_factor(FrictionMethod::Laminar, 1000.0, 0.0).unwrap();
/// assert_eq!(f.value, 0.064);
/// ```
pub fn solve_friction_factor(
    method: FrictionMethod,
    reynolds: f64,
    relative_roughness: f64,
) -> Result<FrictionFactor, FrictionFactorError> {
    solve_friction_factor_with(
        method,
        reynolds,
        relative_roughness,
        &ColebrookConfig::default(),
        (),
    )
}

/// Computes the Darcy friction factor with explicit iteration settings.
///
/// `config` and `observer` only affect [`FrictionMethod::ColebrookWhite`].
///
/// # Errors
///
/// Same as [`solve_friction_factor`].
pub fn solve_friction_factor_with<Obs>(
    method: FrictionMethod,
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
    observer: Obs,
) -> Result<FrictionFactor, FrictionFactorError>
where
    Obs: Observer<Event, Action>,
{
    let reynolds = DomainError::require_positive("Reynolds number", reynolds)?;
    let relative_roughness =
        DomainError::require_non_negative("relative roughness", relative_roughness)?;

    let regime = FlowRegime::of(reynolds);
    let mut diagnostics = FrictionDiagnostics::new(method, regime);

    let value = match method {
        FrictionMethod::Laminar => explicit::laminar(reynolds),
        FrictionMethod::ColebrookWhite => {
            warn_if_laminar(&mut diagnostics);
            let solution =
                colebrook_white::solve_observed(reynolds, relative_roughness, config, observer)?;
            diagnostics.iterations = Some(solution.iterations);
            diagnostics.converged = solution.converged;
            diagnostics.trace = solution.trace;
            if !solution.converged {
                diagnostics.advisories.push(Advisory::NotConverged {
                    iterations: solution.iterations,
                });
            }
            solution.friction_factor
        }
        FrictionMethod::SwameeJain => {
            warn_if_laminar(&mut diagnostics);
            if !explicit::swamee_jain_in_range(reynolds, relative_roughness) {
                diagnostics.out_of_range = true;
                diagnostics.advisories.push(Advisory::SwameeJainOutOfRange {
                    reynolds,
                    relative_roughness,
                });
            }
            explicit::swamee_jain(reynolds, relative_roughness)
        }
        FrictionMethod::Blasius => {
            warn_if_laminar(&mut diagnostics);
            explicit::blasius(reynolds)
        }
        FrictionMethod::FixedRoughnessCategory => {
            explicit::roughness_category(relative_roughness)
        }
    };

    if !value.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "friction factor",
        }
        .into());
    }

    Ok(FrictionFactor { value, diagnostics })
}

fn warn_if_laminar(diagnostics: &mut FrictionDiagnostics) {
    if diagnostics.regime == FlowRegime::Laminar {
        diagnostics
            .advisories
            .push(Advisory::TurbulentMethodAtLaminarRe {
                method: diagnostics.method,
            });
    }
}
