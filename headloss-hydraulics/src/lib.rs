//! Frictional head loss in pressurized pipe flow.
//!
//! Given pipe geometry, flow conditions, and a choice of method, this crate
//! computes the head loss `h_L` along a straight pipe run:
//!
//! 1. [`compute_derived`] turns geometry and flow into velocity, Reynolds
//!    number, and relative roughness.
//! 2. [`classify_regime`] labels the flow laminar, transitional, or turbulent.
//! 3. [`solve_friction_factor`] obtains the Darcy friction factor with one of
//!    the [`FrictionMethod`]s, iterating the Colebrook-White equation when
//!    asked to.
//! 4. [`head_loss_darcy_weisbach`] turns the friction factor into `h_L`.
//!
//! The empirical [`head_loss_hazen_williams`] formula is an independent path
//! that needs only flow rate, length, diameter, and a material coefficient.
//!
//! [`evaluate`] runs either path end to end from a [`PipeFlowSpec`].
//!
//! All functions are pure and synchronous. Inputs are SI quantities from
//! [`uom`]; dimensionless numbers are plain `f64`.

mod derived;
mod error;
mod evaluate;
mod head_loss;
mod pipe;
mod regime;

pub mod friction;

pub use derived::{DerivedHydraulics, compute_derived};
pub use error::{
    DomainError, FrictionFactorError, HeadLossError, InvalidInputError, NumericalInstabilityError,
};
pub use evaluate::{
    DarcyWeisbachDetails, HeadLossMethod, HeadLossReport, PipeFlowSpec, evaluate, evaluate_with,
};
pub use friction::{
    Advisory, FrictionDiagnostics, FrictionFactor, FrictionMethod, solve_friction_factor,
    solve_friction_factor_with,
};
pub use head_loss::{
    GRAVITY, HazenWilliamsSpec, HeadLossResult, MethodId, head_loss_darcy_weisbach,
    head_loss_hazen_williams,
};
pub use pipe::{FlowConditions, PipeGeometry, flow_area, velocity};
pub use regime::{FlowRegime, LAMINAR_LIMIT, TURBULENT_LIMIT, classify_regime};
