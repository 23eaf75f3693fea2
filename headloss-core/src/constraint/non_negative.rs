use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Absolute wall roughness is the typical case: a hydraulically smooth pipe
/// has zero roughness, but a negative roughness is meaningless.
///
/// # Examples
///
/// ```
/// use headloss_core::constraint::NonNegative;
/// use uom::si::{f64::Length, length::{meter, millimeter}};
///
/// let eps = NonNegative::new(Length::new::<millimeter>(0.15)).unwrap();
/// assert!((eps.into_inner().get::<meter>() - 0.000_15).abs() < 1e-12);
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0e-6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
