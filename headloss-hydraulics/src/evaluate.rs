use uom::si::f64::Velocity;

use crate::{
    DerivedHydraulics, FlowConditions, FlowRegime, FrictionFactor, FrictionMethod,
    HazenWilliamsSpec, HeadLossError, HeadLossResult, MethodId, PipeGeometry, compute_derived,
    friction::{colebrook_white::ColebrookConfig, solve_friction_factor_with},
    head_loss_darcy_weisbach, head_loss_hazen_williams, velocity,
};

/// Which head-loss formula to use, with its method-specific inputs.
///
/// Exactly one path is active per computation, so the two never share inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadLossMethod {
    /// Darcy-Weisbach with a friction factor from the given method.
    DarcyWeisbach(FrictionMethod),
    /// Darcy-Weisbach with the method picked from the flow regime by
    /// [`FrictionMethod::for_regime`].
    DarcyWeisbachAuto,
    /// Empirical Hazen-Williams; ignores viscosity and roughness.
    HazenWilliams(HazenWilliamsSpec),
}

/// A fully specified head-loss problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlowSpec {
    pub geometry: PipeGeometry,
    pub flow: FlowConditions,
    pub method: HeadLossMethod,
}

/// Intermediate values of a Darcy-Weisbach evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DarcyWeisbachDetails {
    pub hydraulics: DerivedHydraulics,
    pub regime: FlowRegime,
    pub friction: FrictionFactor,
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeadLossReport {
    pub result: HeadLossResult,
    /// Mean flow velocity; needs only flow rate and diameter.
    pub velocity: Velocity,
    /// Present for the Darcy-Weisbach path only.
    pub darcy_weisbach: Option<DarcyWeisbachDetails>,
}

/// Computes the head loss for `spec`.
///
/// # Errors
///
/// Returns [`HeadLossError::InvalidInput`] if the Darcy-Weisbach path lacks a
/// viscosity, or the domain or instability error of whichever step failed.
pub fn evaluate(spec: &PipeFlowSpec) -> Result<HeadLossReport, HeadLossError> {
    evaluate_with(spec, &ColebrookConfig::default())
}

/// Computes the head loss for `spec` with explicit Colebrook-White settings.
///
/// # Errors
///
/// Same as [`evaluate`].
pub fn evaluate_with(
    spec: &PipeFlowSpec,
    config: &ColebrookConfig,
) -> Result<HeadLossReport, HeadLossError> {
    let PipeFlowSpec {
        geometry,
        flow,
        method,
    } = spec;

    match *method {
        HeadLossMethod::DarcyWeisbach(friction_method) => {
            darcy_weisbach(geometry, flow, Some(friction_method), config)
        }
        HeadLossMethod::DarcyWeisbachAuto => darcy_weisbach(geometry, flow, None, config),
        HeadLossMethod::HazenWilliams(hw) => {
            let head_loss = head_loss_hazen_williams(
                flow.flow_rate(),
                geometry.length(),
                hw.coefficient,
                geometry.diameter(),
            )?;

            Ok(HeadLossReport {
                result: HeadLossResult {
                    head_loss,
                    method: MethodId::HazenWilliams,
                },
                velocity: velocity(flow.flow_rate(), geometry.diameter()),
                darcy_weisbach: None,
            })
        }
    }
}

fn darcy_weisbach(
    geometry: &PipeGeometry,
    flow: &FlowConditions,
    method: Option<FrictionMethod>,
    config: &ColebrookConfig,
) -> Result<HeadLossReport, HeadLossError> {
    let hydraulics = compute_derived(geometry, flow)?;
    let regime = hydraulics.regime();
    let method = method.unwrap_or_else(|| FrictionMethod::for_regime(regime));

    let friction = solve_friction_factor_with(
        method,
        hydraulics.reynolds(),
        hydraulics.relative_roughness(),
        config,
        (),
    )?;

    let head_loss = head_loss_darcy_weisbach(
        friction.value,
        geometry.length(),
        geometry.diameter(),
        hydraulics.velocity(),
    )?;

    Ok(HeadLossReport {
        result: HeadLossResult {
            head_loss,
            method: MethodId::DarcyWeisbach(method),
        },
        velocity: hydraulics.velocity(),
        darcy_weisbach: Some(DarcyWeisbachDetails {
            hydraulics,
            regime,
            friction,
        }),
    })
}
