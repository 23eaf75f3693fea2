//! Head-loss formulas.
//!
//! Both formulas are independent pure functions returning `h_L` in meters.
//! Neither clamps nor rounds its result.

use std::fmt;

use uom::si::{
    f64::{Length, Ratio, Velocity, VolumeRate},
    length::meter,
    ratio::ratio,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

use crate::{DomainError, FrictionMethod};

/// Gravitational acceleration used by Darcy-Weisbach, in m/s².
pub const GRAVITY: f64 = 9.81;

/// Empirical Hazen-Williams formula parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazenWilliamsSpec {
    /// Dimensionless, material-dependent roughness coefficient `C`.
    pub coefficient: f64,
}

/// Identifies the formula (and friction method) that produced a head loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodId {
    DarcyWeisbach(FrictionMethod),
    HazenWilliams,
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DarcyWeisbach(method) => write!(f, "Darcy-Weisbach, {method}"),
            Self::HazenWilliams => f.write_str("Hazen-Williams"),
        }
    }
}

/// A head loss and the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadLossResult {
    /// Frictional head loss `h_L`, non-negative.
    pub head_loss: Length,
    pub method: MethodId,
}

/// Darcy-Weisbach head loss, `h_L = f·(L/D)·v²/(2g)`.
///
/// # Errors
///
/// Returns a [`DomainError`] if `diameter` is not positive, or if
/// `friction_factor` or `length` is negative.
pub fn head_loss_darcy_weisbach(
    friction_factor: f64,
    length: Length,
    diameter: Length,
    velocity: Velocity,
) -> Result<Length, DomainError> {
    DomainError::require_positive("diameter", diameter.get::<meter>())?;
    DomainError::require_non_negative("friction factor", friction_factor)?;
    DomainError::require_non_negative("length", length.get::<meter>())?;

    let slenderness: Ratio = length / diameter;
    let v = velocity.get::<meter_per_second>();
    let velocity_head = v * v / (2.0 * GRAVITY);

    Ok(Length::new::<meter>(
        friction_factor * slenderness.get::<ratio>() * velocity_head,
    ))
}

/// Hazen-Williams head loss, `h_L = 10.67·Q^1.85·L / (C^1.85·D^4.87)`.
///
/// Independent of friction factor, viscosity, and roughness.
///
/// # Errors
///
/// Returns a [`DomainError`] if `coefficient` or `diameter` is not positive,
/// or if `length` or `flow_rate` is negative.
pub fn head_loss_hazen_williams(
    flow_rate: VolumeRate,
    length: Length,
    coefficient: f64,
    diameter: Length,
) -> Result<Length, DomainError> {
    let c = DomainError::require_positive("Hazen-Williams coefficient", coefficient)?;
    let d = DomainError::require_positive("diameter", diameter.get::<meter>())?;
    let l = DomainError::require_non_negative("length", length.get::<meter>())?;
    let q = DomainError::require_non_negative(
        "flow rate",
        flow_rate.get::<cubic_meter_per_second>(),
    )?;

    Ok(Length::new::<meter>(
        10.67 * q.powf(1.85) * l / (c.powf(1.85) * d.powf(4.87)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn mps(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    fn cms(value: f64) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_second>(value)
    }

    #[test]
    fn darcy_weisbach_reference_value() {
        let h = head_loss_darcy_weisbach(
            0.018_712_508_740_604,
            m(100.0),
            m(0.3),
            mps(0.707_355_302_630_645_9),
        )
        .unwrap();
        assert_relative_eq!(h.get::<meter>(), 0.159_069_525_470_824, max_relative = 1e-9);
    }

    #[test]
    fn darcy_weisbach_scaling() {
        let base = head_loss_darcy_weisbach(0.02, m(50.0), m(0.2), mps(1.5))
            .unwrap()
            .get::<meter>();

        let double_length = head_loss_darcy_weisbach(0.02, m(100.0), m(0.2), mps(1.5)).unwrap();
        assert_relative_eq!(double_length.get::<meter>(), 2.0 * base, max_relative = 1e-12);

        let double_f = head_loss_darcy_weisbach(0.04, m(50.0), m(0.2), mps(1.5)).unwrap();
        assert_relative_eq!(double_f.get::<meter>(), 2.0 * base, max_relative = 1e-12);

        let double_v = head_loss_darcy_weisbach(0.02, m(50.0), m(0.2), mps(3.0)).unwrap();
        assert_relative_eq!(double_v.get::<meter>(), 4.0 * base, max_relative = 1e-12);

        let half_d = head_loss_darcy_weisbach(0.02, m(50.0), m(0.1), mps(1.5)).unwrap();
        assert_relative_eq!(half_d.get::<meter>(), 2.0 * base, max_relative = 1e-12);
    }

    #[test]
    fn darcy_weisbach_domain_errors() {
        assert!(matches!(
            head_loss_darcy_weisbach(0.02, m(10.0), m(0.0), mps(1.0)),
            Err(DomainError::NotPositive {
                parameter: "diameter",
                ..
            })
        ));
        assert!(matches!(
            head_loss_darcy_weisbach(-0.02, m(10.0), m(0.1), mps(1.0)),
            Err(DomainError::Negative {
                parameter: "friction factor",
                ..
            })
        ));
    }

    #[test]
    fn darcy_weisbach_zero_friction_is_zero_loss() {
        let h = head_loss_darcy_weisbach(0.0, m(10.0), m(0.1), mps(1.0)).unwrap();
        assert_relative_eq!(h.get::<meter>(), 0.0);
    }

    #[test]
    fn hazen_williams_reference_value() {
        let h = head_loss_hazen_williams(cms(0.05), m(100.0), 130.0, m(0.3)).unwrap();
        assert_relative_eq!(h.get::<meter>(), 0.180_668_822_965_465, max_relative = 1e-9);
    }

    #[test]
    fn hazen_williams_decreases_with_coefficient() {
        let rough = head_loss_hazen_williams(cms(0.05), m(100.0), 100.0, m(0.3)).unwrap();
        let smooth = head_loss_hazen_williams(cms(0.05), m(100.0), 140.0, m(0.3)).unwrap();

        assert!(rough > smooth);
        assert_relative_eq!(rough.get::<meter>(), 0.293_547_520_889_175, max_relative = 1e-9);
        assert_relative_eq!(smooth.get::<meter>(), 0.157_522_121_039_702, max_relative = 1e-9);
    }

    #[test]
    fn hazen_williams_zero_flow_is_zero_loss() {
        let h = head_loss_hazen_williams(cms(0.0), m(100.0), 130.0, m(0.3)).unwrap();
        assert_relative_eq!(h.get::<meter>(), 0.0);
    }

    #[test]
    fn hazen_williams_domain_errors() {
        let cases = [
            (cms(0.05), m(100.0), 0.0, m(0.3), "Hazen-Williams coefficient"),
            (cms(0.05), m(100.0), -130.0, m(0.3), "Hazen-Williams coefficient"),
            (cms(0.05), m(100.0), 130.0, m(0.0), "diameter"),
            (cms(0.05), m(-1.0), 130.0, m(0.3), "length"),
            (cms(-0.05), m(100.0), 130.0, m(0.3), "flow rate"),
        ];

        for (q, l, c, d, expected) in cases {
            let err = head_loss_hazen_williams(q, l, c, d).unwrap_err();
            let parameter = match err {
                DomainError::NotPositive { parameter, .. }
                | DomainError::Negative { parameter, .. } => parameter,
                other => panic!("unexpected error: {other:?}"),
            };
            assert_eq!(parameter, expected);
        }
    }

    #[test]
    fn method_names() {
        assert_eq!(
            MethodId::DarcyWeisbach(FrictionMethod::ColebrookWhite).to_string(),
            "Darcy-Weisbach, Colebrook-White"
        );
        assert_eq!(MethodId::HazenWilliams.to_string(), "Hazen-Williams");
    }
}
