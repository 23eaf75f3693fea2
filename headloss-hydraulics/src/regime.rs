use std::fmt;

use crate::InvalidInputError;

/// Reynolds number below which flow is laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;

/// Reynolds number above which flow is turbulent.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Flow regime of a pipe flow, determined by its Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    /// `Re < 2000`
    Laminar,
    /// `2000 ≤ Re ≤ 4000`
    Transitional,
    /// `Re > 4000`
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number already known to be positive and finite.
    pub(crate) fn of(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds <= TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        };
        f.write_str(name)
    }
}

/// Classifies a Reynolds number into a [`FlowRegime`].
///
/// # Errors
///
/// Returns [`InvalidInputError::Reynolds`] if `reynolds` is not a positive,
/// finite number, which points at a malformed velocity or viscosity upstream.
pub fn classify_regime(reynolds: f64) -> Result<FlowRegime, InvalidInputError> {
    if reynolds > 0.0 && reynolds.is_finite() {
        Ok(FlowRegime::of(reynolds))
    } else {
        Err(InvalidInputError::Reynolds { reynolds })
    }
}
