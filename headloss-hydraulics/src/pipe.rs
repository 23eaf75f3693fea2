//! Pipe geometry and flow conditions.

use std::f64::consts::PI;

use headloss_core::constraint::{Constrained, NonNegative, StrictlyPositive};
use uom::si::{
    f64::{Area, KinematicViscosity, Length, Ratio, VolumeRate, Velocity},
    ratio::ratio,
};

use crate::InvalidInputError;

/// Geometry of a straight, circular, full-flowing pipe.
///
/// Diameter and length are strictly positive and the absolute wall roughness
/// is non-negative. These invariants are checked once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    diameter: Constrained<Length, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
    roughness: Constrained<Length, NonNegative>,
}

impl PipeGeometry {
    /// Creates a pipe geometry from inner diameter, length, and absolute roughness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Constraint`] naming the offending parameter
    /// if the diameter or length is not strictly positive, or the roughness
    /// is negative.
    pub fn new(
        diameter: Length,
        length: Length,
        roughness: Length,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            diameter: StrictlyPositive::new(diameter)
                .map_err(InvalidInputError::constraint("diameter"))?,
            length: StrictlyPositive::new(length)
                .map_err(InvalidInputError::constraint("length"))?,
            roughness: NonNegative::new(roughness)
                .map_err(InvalidInputError::constraint("roughness"))?,
        })
    }

    /// Creates a hydraulically smooth pipe (zero wall roughness).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Constraint`] if the diameter or length is
    /// not strictly positive.
    pub fn smooth(diameter: Length, length: Length) -> Result<Self, InvalidInputError> {
        Ok(Self {
            diameter: StrictlyPositive::new(diameter)
                .map_err(InvalidInputError::constraint("diameter"))?,
            length: StrictlyPositive::new(length)
                .map_err(InvalidInputError::constraint("length"))?,
            roughness: NonNegative::zero(),
        })
    }

    /// Creates a pipe geometry from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        diameter: Constrained<Length, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
        roughness: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            diameter,
            length,
            roughness,
        }
    }

    /// Inner diameter `D`.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.get()
    }

    /// Pipe length `L`.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length.get()
    }

    /// Absolute wall roughness `ε`.
    #[must_use]
    pub fn roughness(&self) -> Length {
        self.roughness.get()
    }

    /// Relative roughness `ε/D`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        let rr: Ratio = self.roughness() / self.diameter();
        rr.get::<ratio>()
    }

    /// Cross-sectional flow area `π(D/2)²`.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        flow_area(self.diameter())
    }
}

/// Volumetric flow rate and, for the Darcy-Weisbach path, the fluid's
/// kinematic viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    flow_rate: Constrained<VolumeRate, StrictlyPositive>,
    viscosity: Option<Constrained<KinematicViscosity, StrictlyPositive>>,
}

impl FlowConditions {
    /// Creates flow conditions with a kinematic viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Constraint`] if the flow rate or viscosity
    /// is not strictly positive.
    pub fn new(
        flow_rate: VolumeRate,
        viscosity: KinematicViscosity,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            flow_rate: StrictlyPositive::new(flow_rate)
                .map_err(InvalidInputError::constraint("flow rate"))?,
            viscosity: Some(
                StrictlyPositive::new(viscosity)
                    .map_err(InvalidInputError::constraint("kinematic viscosity"))?,
            ),
        })
    }

    /// Creates flow conditions without a viscosity.
    ///
    /// Sufficient for the Hazen-Williams path, which does not depend on
    /// viscosity; [`compute_derived`](crate::compute_derived) rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Constraint`] if the flow rate is not
    /// strictly positive.
    pub fn without_viscosity(flow_rate: VolumeRate) -> Result<Self, InvalidInputError> {
        Ok(Self {
            flow_rate: StrictlyPositive::new(flow_rate)
                .map_err(InvalidInputError::constraint("flow rate"))?,
            viscosity: None,
        })
    }

    /// Volumetric flow rate `Q`.
    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate.get()
    }

    /// Kinematic viscosity `ν`, if supplied.
    #[must_use]
    pub fn viscosity(&self) -> Option<KinematicViscosity> {
        self.viscosity.map(|nu| nu.get())
    }
}

/// Cross-sectional area of a circular pipe, `π(D/2)²`.
#[must_use]
pub fn flow_area(diameter: Length) -> Area {
    let radius = diameter / 2.0;
    radius * radius * PI
}

/// Mean velocity `v = Q/A` of full flow through a circular pipe.
#[must_use]
pub fn velocity(flow_rate: VolumeRate, diameter: Length) -> Velocity {
    flow_rate / flow_area(diameter)
}
