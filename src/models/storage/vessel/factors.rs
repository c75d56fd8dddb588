use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::{HeadShape, Parameter, VesselError};

/// Dish and knuckle radius factors of a torispherical head.
///
/// Both factors are multiples of the vessel diameter: the dish is a sphere of
/// radius `fd·D`, the knuckle a torus of tube radius `fk·D`. Elliptical heads
/// reuse this profile with factors that approximate a 2:1 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadFactors {
    fd: f64,
    fk: f64,
}

impl HeadFactors {
    /// ASME flanged and dished head (`fd = 1.0`, `fk = 0.06`).
    pub const TORISPHERICAL: Self = Self { fd: 1.0, fk: 0.06 };

    /// Torispherical approximation of a 2:1 ellipsoidal head.
    pub const ELLIPTICAL: Self = Self {
        fd: 0.9045,
        fk: 0.1727,
    };

    /// Creates factors after checking that the dish and knuckle can be joined.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if either factor is not strictly
    /// positive or `fk > fd`, and [`VesselError::NoTangency`] if the pair has no
    /// real tangency point inside the shell radius.
    pub fn new(fd: f64, fk: f64) -> Result<Self, VesselError> {
        StrictlyPositive::new(fd).map_err(VesselError::validation(Parameter::DishRadius))?;
        StrictlyPositive::new(fk).map_err(VesselError::validation(Parameter::KnuckleRadius))?;
        if fk > fd {
            return Err(VesselError::Validation {
                parameter: Parameter::KnuckleRadius,
                source: ConstraintError::AboveMaximum,
            });
        }

        let factors = Self { fd, fk };
        let (a1, a2, b1) = (factors.a1(), factors.a2(), factors.b1());
        let real = a1.is_finite() && a2.is_finite() && b1.is_finite();
        if fk >= 0.5 || !real || a1 > a2 {
            return Err(VesselError::NoTangency { fd, fk });
        }

        Ok(factors)
    }

    /// Returns the default factors for a head shape, if it uses any.
    #[must_use]
    pub const fn defaults(shape: HeadShape) -> Option<Self> {
        match shape {
            HeadShape::Torispherical => Some(Self::TORISPHERICAL),
            HeadShape::Elliptical => Some(Self::ELLIPTICAL),
            HeadShape::Flat | HeadShape::Hemispherical | HeadShape::Conical => None,
        }
    }

    /// Dish radius factor.
    #[must_use]
    pub fn fd(&self) -> f64 {
        self.fd
    }

    /// Knuckle radius factor.
    #[must_use]
    pub fn fk(&self) -> f64 {
        self.fk
    }

    /// Axial depth, in diameters, at which the dish meets the knuckle.
    #[must_use]
    pub fn a1(&self) -> f64 {
        let (fd, fk) = (self.fd, self.fk);
        let ratio = (0.5 - fk) / (fd - fk);
        fd * (1.0 - (1.0 - ratio * ratio).sqrt())
    }

    /// Full head depth, in diameters.
    #[must_use]
    pub fn a2(&self) -> f64 {
        let (fd, fk) = (self.fd, self.fk);
        fd - (fd * fd - 2.0 * fd * fk + fk - 0.25).sqrt()
    }

    /// Radius, in diameters, of the dish-knuckle tangency circle.
    #[must_use]
    pub fn b1(&self) -> f64 {
        self.fd * (0.5 - self.fk) / (self.fd - self.fk)
    }

    /// Returns the full set of tangency constants for a shell of the given size.
    #[must_use]
    pub fn tangency(&self, diameter: Length, length: Length) -> Tangency {
        let a1 = self.a1();
        let a2 = self.a2();
        let a3 = length.get::<meter>() / diameter.get::<meter>() + a2;
        Tangency {
            a1,
            a2,
            a3,
            a4: a3 + (a2 - a1),
            a5: a3 + a2,
            b1: self.b1(),
            b2: 0.5,
        }
    }
}

/// Tangency constants of a torispherical vessel, in diameters.
///
/// Axial positions are measured from the apex of the bottom head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangency {
    /// Bottom dish-knuckle junction.
    pub a1: f64,
    /// Bottom tangent line (full head depth).
    pub a2: f64,
    /// Top tangent line.
    pub a3: f64,
    /// Top knuckle-dish junction.
    pub a4: f64,
    /// Apex of the top head.
    pub a5: f64,
    /// Radius of the dish-knuckle tangency circle.
    pub b1: f64,
    /// Shell radius.
    pub b2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn asme_flanged_and_dished() {
        let factors = HeadFactors::TORISPHERICAL;

        assert_relative_eq!(factors.a1(), 0.116_316_610_327_864_4, epsilon = 1e-12);
        assert_relative_eq!(factors.a2(), 0.169_337_613_708_192_56, epsilon = 1e-12);
        assert_relative_eq!(factors.b1(), 22.0 / 47.0, epsilon = 1e-12);
    }

    #[test]
    fn elliptical_factors_give_quarter_depth() {
        assert_relative_eq!(HeadFactors::ELLIPTICAL.a2(), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn defaults_by_shape() {
        assert_eq!(
            HeadFactors::defaults(HeadShape::Torispherical),
            Some(HeadFactors::TORISPHERICAL)
        );
        assert_eq!(
            HeadFactors::defaults(HeadShape::Elliptical),
            Some(HeadFactors::ELLIPTICAL)
        );
        assert_eq!(HeadFactors::defaults(HeadShape::Conical), None);
    }

    #[test]
    fn rejects_invalid_pairs() {
        assert_eq!(HeadFactors::new(1.0, 0.06), Ok(HeadFactors::TORISPHERICAL));
        assert!(HeadFactors::new(0.8, 0.1).is_ok());

        assert!(matches!(
            HeadFactors::new(0.0, 0.06),
            Err(VesselError::Validation {
                parameter: Parameter::DishRadius,
                ..
            })
        ));
        assert!(matches!(
            HeadFactors::new(1.0, -0.1),
            Err(VesselError::Validation {
                parameter: Parameter::KnuckleRadius,
                ..
            })
        ));
        assert!(matches!(
            HeadFactors::new(0.1, 0.2),
            Err(VesselError::Validation {
                source: ConstraintError::AboveMaximum,
                ..
            })
        ));

        // Dish narrower than the shell.
        assert!(matches!(
            HeadFactors::new(0.4, 0.1),
            Err(VesselError::NoTangency { .. })
        ));
        assert!(matches!(
            HeadFactors::new(0.5, 0.5),
            Err(VesselError::NoTangency { .. })
        ));
    }

    #[test]
    fn tangency_mirrors_about_the_shell() {
        let diameter = Length::new::<meter>(2.0);
        let length = Length::new::<meter>(3.0);
        let t = HeadFactors::TORISPHERICAL.tangency(diameter, length);

        assert_relative_eq!(t.a3, 1.5 + t.a2);
        assert_relative_eq!(t.a5 - t.a4, t.a1, epsilon = 1e-12);
        assert_relative_eq!(t.a5, t.a3 + t.a2);
        assert_eq!(t.b2, 0.5);
    }
}
