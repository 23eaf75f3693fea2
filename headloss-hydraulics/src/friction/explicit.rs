//! Closed-form friction-factor correlations.
//!
//! These functions evaluate their formula for any input; validity ranges are
//! reported as advisories by [`solve_friction_factor`](crate::solve_friction_factor),
//! never enforced here.

/// Swamee-Jain lower Reynolds bound (exclusive).
pub const SWAMEE_JAIN_MIN_REYNOLDS: f64 = 4.0e3;

/// Swamee-Jain upper Reynolds bound (exclusive).
pub const SWAMEE_JAIN_MAX_REYNOLDS: f64 = 1.0e8;

/// Swamee-Jain lower relative-roughness bound (exclusive).
pub const SWAMEE_JAIN_MIN_RELATIVE_ROUGHNESS: f64 = 1.0e-6;

/// Swamee-Jain upper relative-roughness bound (exclusive).
pub const SWAMEE_JAIN_MAX_RELATIVE_ROUGHNESS: f64 = 1.0e-2;

/// Hagen-Poiseuille friction factor, `f = 64/Re`.
#[must_use]
pub fn laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

/// Swamee-Jain explicit approximation of Colebrook-White.
///
/// `f = 0.25 / [log10(ε/(3.7D) + 5.74/Re^0.9)]²`
#[must_use]
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let log = (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    0.25 / (log * log)
}

/// Returns `true` if `(Re, ε/D)` lies inside the Swamee-Jain validity range,
/// `4000 < Re < 1e8` and `1e-6 < ε/D < 1e-2`.
#[must_use]
pub fn swamee_jain_in_range(reynolds: f64, relative_roughness: f64) -> bool {
    reynolds > SWAMEE_JAIN_MIN_REYNOLDS
        && reynolds < SWAMEE_JAIN_MAX_REYNOLDS
        && relative_roughness > SWAMEE_JAIN_MIN_RELATIVE_ROUGHNESS
        && relative_roughness < SWAMEE_JAIN_MAX_RELATIVE_ROUGHNESS
}

/// Blasius smooth-pipe correlation, `f = 0.316/Re^0.25`.
#[must_use]
pub fn blasius(reynolds: f64) -> f64 {
    0.316 / reynolds.powf(0.25)
}

/// Coarse friction factor picked from three relative-roughness bands.
///
/// | `ε/D`              | `f`   |
/// |--------------------|-------|
/// | `< 1e-4`           | 0.022 |
/// | `1e-4 ≤ ε/D < 1e-3` | 0.030 |
/// | `≥ 1e-3`           | 0.038 |
#[must_use]
pub fn roughness_category(relative_roughness: f64) -> f64 {
    if relative_roughness < 1.0e-4 {
        0.022
    } else if relative_roughness < 1.0e-3 {
        0.030
    } else {
        0.038
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn laminar_is_exactly_64_over_re() {
        assert_eq!(laminar(1000.0), 0.064);
        assert_eq!(laminar(64.0), 1.0);
        assert_eq!(laminar(1500.0), 64.0 / 1500.0);
    }

    #[test]
    fn swamee_jain_reference_values() {
        assert_relative_eq!(
            swamee_jain(212_206.590_789_193_78, 0.0005),
            0.018_834_393_709_643,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            swamee_jain(1.0e5, 0.0015),
            0.023_941_586_549_756,
            max_relative = 1e-9
        );
    }

    #[test]
    fn swamee_jain_range_is_exclusive() {
        assert!(swamee_jain_in_range(1.0e5, 1.0e-3));
        assert!(!swamee_jain_in_range(4000.0, 1.0e-3));
        assert!(!swamee_jain_in_range(1.0e8, 1.0e-3));
        assert!(!swamee_jain_in_range(1.0e5, 1.0e-6));
        assert!(!swamee_jain_in_range(1.0e5, 1.0e-2));
        assert!(!swamee_jain_in_range(1.0e5, 0.0));
    }

    #[test]
    fn blasius_reference_value() {
        assert_relative_eq!(blasius(1.0e4), 0.0316, max_relative = 1e-12);
        assert_relative_eq!(
            blasius(212_206.590_789_193_78),
            0.014_723_035_713_653,
            max_relative = 1e-9
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn roughness_bands_are_exact() {
        assert_eq!(roughness_category(0.0), 0.022);
        assert_eq!(roughness_category(9.99e-5), 0.022);
        assert_eq!(roughness_category(1.0e-4), 0.030);
        assert_eq!(roughness_category(5.0e-4), 0.030);
        assert_eq!(roughness_category(1.0e-3), 0.038);
        assert_eq!(roughness_category(0.05), 0.038);
    }
}
