use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Fill levels, cone depths, and target inventories are all non-negative:
/// an empty vessel is valid, a negative level is not.
///
/// # Examples
///
/// ```
/// use twine_vessels::support::constraint::{Constrained, NonNegative};
///
/// let level = Constrained::<_, NonNegative>::new(1.5).unwrap();
/// assert_eq!(level.into_inner(), 1.5);
///
/// let empty = NonNegative::new(0.0).unwrap();
/// assert_eq!(empty.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Volume},
        length::meter,
        volume::cubic_meter,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn zero_is_empty() {
        let level: Constrained<Length, NonNegative> = NonNegative::zero();
        assert_eq!(level.into_inner().get::<meter>(), 0.0);
    }

    #[test]
    fn levels_and_volumes() {
        assert!(NonNegative::new(Length::new::<meter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<meter>(3.5)).is_ok());
        assert!(NonNegative::new(Length::new::<meter>(-0.1)).is_err());

        assert!(NonNegative::new(Volume::new::<cubic_meter>(12.0)).is_ok());
        assert!(NonNegative::new(Volume::new::<cubic_meter>(-1.0)).is_err());
    }
}
