use uom::si::{
    f64::{Area, Ratio, Velocity},
    ratio::ratio,
};

use crate::{FlowConditions, FlowRegime, InvalidInputError, PipeGeometry};

/// Quantities derived once from geometry and flow conditions.
///
/// Recomputed whenever the inputs change; never mutated in place.
/// The Reynolds number is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedHydraulics {
    area: Area,
    velocity: Velocity,
    reynolds: f64,
    relative_roughness: f64,
}

impl DerivedHydraulics {
    /// Cross-sectional flow area `A = π(D/2)²`.
    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Mean flow velocity `v = Q/A`.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Reynolds number `Re = vD/ν`.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    /// Relative roughness `ε/D`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        self.relative_roughness
    }

    /// Flow regime implied by the Reynolds number.
    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        FlowRegime::of(self.reynolds)
    }
}

/// Computes area, velocity, Reynolds number, and relative roughness.
///
/// # Errors
///
/// Returns [`InvalidInputError::MissingViscosity`] if `flow` carries no
/// viscosity, or [`InvalidInputError::Reynolds`] if the resulting Reynolds
/// number overflows.
pub fn compute_derived(
    geometry: &PipeGeometry,
    flow: &FlowConditions,
) -> Result<DerivedHydraulics, InvalidInputError> {
    let viscosity = flow
        .viscosity()
        .ok_or(InvalidInputError::MissingViscosity)?;

    let area = geometry.flow_area();
    let velocity = flow.flow_rate() / area;

    let reynolds: Ratio = velocity * geometry.diameter() / viscosity;
    let reynolds = reynolds.get::<ratio>();
    if !(reynolds > 0.0 && reynolds.is_finite()) {
        return Err(InvalidInputError::Reynolds { reynolds });
    }

    Ok(DerivedHydraulics {
        area,
        velocity,
        reynolds,
        relative_roughness: geometry.relative_roughness(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{KinematicViscosity, Length, VolumeRate},
        kinematic_viscosity::square_meter_per_second,
        length::meter,
        velocity::meter_per_second,
        volume_rate::cubic_meter_per_second,
    };

    fn reference_pipe() -> PipeGeometry {
        PipeGeometry::new(
            Length::new::<meter>(0.3),
            Length::new::<meter>(100.0),
            Length::new::<meter>(0.000_15),
        )
        .unwrap()
    }

    fn water_flow(q: f64) -> FlowConditions {
        FlowConditions::new(
            VolumeRate::new::<cubic_meter_per_second>(q),
            KinematicViscosity::new::<square_meter_per_second>(1.0e-6),
        )
        .unwrap()
    }

    #[test]
    fn reference_case() {
        let derived = compute_derived(&reference_pipe(), &water_flow(0.05)).unwrap();

        assert_relative_eq!(
            derived.area().get::<square_meter>(),
            0.070_685_834_705_770_35,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            derived.velocity().get::<meter_per_second>(),
            0.7074,
            epsilon = 1e-4
        );
        assert_relative_eq!(derived.reynolds(), 212_206.590_789, max_relative = 1e-9);
        assert_relative_eq!(derived.relative_roughness(), 0.0005, epsilon = 1e-15);
        assert_eq!(derived.regime(), FlowRegime::Turbulent);
    }

    #[test]
    fn slow_flow_is_laminar() {
        // Q = 1e-5 m³/s in a 0.3 m pipe gives Re ≈ 42.
        let derived = compute_derived(&reference_pipe(), &water_flow(1.0e-5)).unwrap();
        assert_relative_eq!(derived.reynolds(), 42.441_318, max_relative = 1e-6);
        assert_eq!(derived.regime(), FlowRegime::Laminar);
    }

    #[test]
    fn recomputes_rather_than_mutates() {
        let first = compute_derived(&reference_pipe(), &water_flow(0.05)).unwrap();
        let second = compute_derived(&reference_pipe(), &water_flow(0.10)).unwrap();

        assert_relative_eq!(second.reynolds(), 2.0 * first.reynolds(), max_relative = 1e-12);
        assert_relative_eq!(first.reynolds(), 212_206.590_789, max_relative = 1e-9);
    }

    #[test]
    fn requires_viscosity() {
        let flow =
            FlowConditions::without_viscosity(VolumeRate::new::<cubic_meter_per_second>(0.05))
                .unwrap();
        assert_eq!(
            compute_derived(&reference_pipe(), &flow),
            Err(InvalidInputError::MissingViscosity)
        );
    }
}
