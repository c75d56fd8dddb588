//! Liquid inventory geometry of process vessels and storage tanks.
//!
//! A [`Vessel`] pairs a fixed [`VesselKind`] (orientation, head shape, and
//! variant) with mutable dimensions and control levels. Every query is answered
//! on demand from the current attributes; nothing derived is cached.
//!
//! Heights are measured from the lowest internal point of the vessel. All
//! height-indexed queries clamp their argument to `[0, total_height]`, so a
//! level below the bottom reports an empty vessel and a level above the top
//! reports a full one.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use twine_vessels::models::storage::vessel::{HeadShape, Variant, Vessel};
//! use uom::si::{f64::Length, length::meter, volume::cubic_meter};
//!
//! let vessel = Vessel::vertical(
//!     HeadShape::Flat,
//!     Variant::Vessel,
//!     Length::new::<meter>(2.0),
//!     Length::new::<meter>(3.0),
//! )
//! .unwrap();
//!
//! let half = vessel.liquid_volume(Length::new::<meter>(1.5));
//! assert_relative_eq!(half.get::<cubic_meter>(), 1.5 * std::f64::consts::PI);
//! ```

mod core;
mod error;
mod factors;
mod fill_curve;
mod inventory;
mod kind;
mod level_for_volume;
mod summary;

#[cfg(test)]
mod tests;

pub use error::{Parameter, VesselError};
pub use factors::{HeadFactors, Tangency};
pub use fill_curve::{FillCurve, FillPoint};
pub use inventory::{FillState, Inventory};
pub use kind::{HeadShape, Orientation, ParseKindError, Variant, VesselKind};
pub use level_for_volume::{LevelConfig, LevelError, level_for_volume};
pub use summary::Summary;

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, Length, Ratio, Time, Volume, VolumeRate},
        length::meter,
        volume::cubic_meter,
    },
};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    quadrature::QuadratureConfig,
};

use self::core::{Cylinder, Geometry, Head};

/// Fraction of the total volume reserved when the overflow flag is set.
const OVERFLOW_FRACTION: f64 = 0.02;

/// A vessel or tank of fixed shape family with mutable dimensions and levels.
///
/// Setters validate before writing; a rejected value leaves the vessel as it
/// was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vessel {
    kind: VesselKind,
    diameter: Constrained<Length, StrictlyPositive>,
    length: Length,
    factors: Option<HeadFactors>,
    cone_depth: Constrained<Length, NonNegative>,
    high_liquid_level: Constrained<Length, NonNegative>,
    low_liquid_level: Constrained<Length, NonNegative>,
    liquid_level: Constrained<Length, NonNegative>,
    overflow: bool,
    quadrature: QuadratureConfig,
}

impl Vessel {
    /// Creates a vessel of the given kind with empty control levels.
    ///
    /// The shell `length` is ignored for a sphere. Conical heads start with
    /// zero depth; see [`Vessel::with_head_distance`].
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if the diameter, or the length of a
    /// shell, is not strictly positive.
    pub fn new(kind: VesselKind, diameter: Length, length: Length) -> Result<Self, VesselError> {
        let diameter =
            StrictlyPositive::new(diameter).map_err(VesselError::validation(Parameter::Diameter))?;
        let length = if kind.requires_length() {
            StrictlyPositive::new(length)
                .map_err(VesselError::validation(Parameter::Length))?
                .into_inner()
        } else {
            Length::ZERO
        };

        Ok(Self {
            kind,
            diameter,
            length,
            factors: kind.head().and_then(HeadFactors::defaults),
            cone_depth: NonNegative::zero(),
            high_liquid_level: NonNegative::zero(),
            low_liquid_level: NonNegative::zero(),
            liquid_level: NonNegative::zero(),
            overflow: false,
            quadrature: QuadratureConfig::default(),
        })
    }

    /// Creates an upright vessel or tank.
    ///
    /// # Errors
    ///
    /// See [`Vessel::new`].
    pub fn vertical(
        head: HeadShape,
        variant: Variant,
        diameter: Length,
        length: Length,
    ) -> Result<Self, VesselError> {
        Self::new(VesselKind::Vertical { head, variant }, diameter, length)
    }

    /// Creates a vessel lying on its side.
    ///
    /// # Errors
    ///
    /// See [`Vessel::new`].
    pub fn horizontal(head: HeadShape, diameter: Length, length: Length) -> Result<Self, VesselError> {
        Self::new(VesselKind::Horizontal { head }, diameter, length)
    }

    /// Creates a spherical tank.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if the diameter is not strictly positive.
    pub fn sphere(diameter: Length) -> Result<Self, VesselError> {
        Self::new(VesselKind::Spherical, diameter, Length::ZERO)
    }

    /// Returns the vessel with the given cone depth.
    ///
    /// # Errors
    ///
    /// See [`Vessel::set_head_distance`].
    pub fn with_head_distance(mut self, depth: Length) -> Result<Self, VesselError> {
        self.set_head_distance(depth)?;
        Ok(self)
    }

    /// Returns the vessel with the given head factors.
    ///
    /// # Errors
    ///
    /// See [`Vessel::set_head_factors`].
    pub fn with_head_factors(mut self, factors: HeadFactors) -> Result<Self, VesselError> {
        self.set_head_factors(factors)?;
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        *self.diameter.as_ref()
    }

    /// Tangent-to-tangent shell length; zero for a sphere.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Dish and knuckle factors, for torispherical and elliptical heads only.
    #[must_use]
    pub fn head_factors(&self) -> Option<HeadFactors> {
        self.factors
    }

    /// Tangency constants of the torispherical profile, if the head has one.
    #[must_use]
    pub fn tangency(&self) -> Option<Tangency> {
        self.factors
            .map(|factors| factors.tangency(self.diameter(), self.length))
    }

    /// Axial depth of one head.
    #[must_use]
    pub fn head_distance(&self) -> Length {
        length(self.geometry().head_distance())
    }

    /// Depth of the bottom head; zero for tanks.
    #[must_use]
    pub fn bottom_head_distance(&self) -> Length {
        length(self.geometry().bottom_head_distance())
    }

    #[must_use]
    pub fn top_head_distance(&self) -> Length {
        length(self.geometry().top_head_distance())
    }

    /// Height of the vessel interior, from its lowest to its highest point.
    #[must_use]
    pub fn total_height(&self) -> Length {
        length(self.geometry().total_height())
    }

    /// Height at which the shell meets the top head of an upright vessel.
    ///
    /// Horizontal vessels and spheres report zero.
    #[must_use]
    pub fn tangent_height(&self) -> Length {
        length(self.geometry().tangent_height())
    }

    #[must_use]
    pub fn high_liquid_level(&self) -> Length {
        *self.high_liquid_level.as_ref()
    }

    #[must_use]
    pub fn low_liquid_level(&self) -> Length {
        *self.low_liquid_level.as_ref()
    }

    #[must_use]
    pub fn liquid_level(&self) -> Length {
        *self.liquid_level.as_ref()
    }

    /// Whether an overflow allowance is reserved.
    #[must_use]
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    #[must_use]
    pub fn quadrature(&self) -> QuadratureConfig {
        self.quadrature
    }

    /// Sets the shell diameter.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if `diameter` is not strictly positive.
    pub fn set_diameter(&mut self, diameter: Length) -> Result<(), VesselError> {
        self.diameter =
            StrictlyPositive::new(diameter).map_err(VesselError::validation(Parameter::Diameter))?;
        Ok(())
    }

    /// Sets the tangent-to-tangent shell length.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::NotApplicable`] for a sphere and
    /// [`VesselError::Validation`] if `length` is not strictly positive.
    pub fn set_length(&mut self, length: Length) -> Result<(), VesselError> {
        self.expect_applicable(self.kind.requires_length(), Parameter::Length)?;
        self.length = StrictlyPositive::new(length)
            .map_err(VesselError::validation(Parameter::Length))?
            .into_inner();
        Ok(())
    }

    /// Sets the depth of a conical head.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::NotApplicable`] unless the head is conical and
    /// [`VesselError::Validation`] if `depth` is negative.
    pub fn set_head_distance(&mut self, depth: Length) -> Result<(), VesselError> {
        self.expect_applicable(self.kind.requires_head_distance(), Parameter::HeadDistance)?;
        self.cone_depth =
            NonNegative::new(depth).map_err(VesselError::validation(Parameter::HeadDistance))?;
        Ok(())
    }

    /// Replaces the dish and knuckle factors of a torispherical or elliptical head.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::NotApplicable`] for any other head shape.
    pub fn set_head_factors(&mut self, factors: HeadFactors) -> Result<(), VesselError> {
        self.expect_applicable(self.factors.is_some(), Parameter::DishRadius)?;
        self.factors = Some(factors);
        Ok(())
    }

    /// Sets the high control level.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if `level` is negative, below the
    /// low level, or above the total height.
    pub fn set_high_liquid_level(&mut self, level: Length) -> Result<(), VesselError> {
        self.set_levels(self.low_liquid_level(), level)
    }

    /// Sets the low control level.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if `level` is negative or above the
    /// high level.
    pub fn set_low_liquid_level(&mut self, level: Length) -> Result<(), VesselError> {
        let low =
            NonNegative::new(level).map_err(VesselError::validation(Parameter::LowLiquidLevel))?;
        if level > self.high_liquid_level() {
            return Err(VesselError::Validation {
                parameter: Parameter::LowLiquidLevel,
                source: ConstraintError::AboveMaximum,
            });
        }
        self.low_liquid_level = low;
        Ok(())
    }

    /// Sets both control levels at once.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] unless
    /// `0 <= low <= high <= total_height`.
    pub fn set_levels(&mut self, low: Length, high: Length) -> Result<(), VesselError> {
        let low_level =
            NonNegative::new(low).map_err(VesselError::validation(Parameter::LowLiquidLevel))?;
        let high_level =
            NonNegative::new(high).map_err(VesselError::validation(Parameter::HighLiquidLevel))?;

        let invalid_high = |source| VesselError::Validation {
            parameter: Parameter::HighLiquidLevel,
            source,
        };
        if high < low {
            return Err(invalid_high(ConstraintError::BelowMinimum));
        }
        if high > self.total_height() {
            return Err(invalid_high(ConstraintError::AboveMaximum));
        }

        self.low_liquid_level = low_level;
        self.high_liquid_level = high_level;
        Ok(())
    }

    /// Sets the current liquid level used by the summary and [`Vessel::current_volume`].
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::Validation`] if `level` is negative.
    pub fn set_liquid_level(&mut self, level: Length) -> Result<(), VesselError> {
        self.liquid_level =
            NonNegative::new(level).map_err(VesselError::validation(Parameter::LiquidLevel))?;
        Ok(())
    }

    pub fn set_overflow(&mut self, overflow: bool) {
        self.overflow = overflow;
    }

    /// Sets the integration tolerances used by torispherical and elliptical heads.
    pub fn set_quadrature(&mut self, quadrature: QuadratureConfig) {
        self.quadrature = quadrature;
    }

    #[must_use]
    pub fn shell_volume(&self) -> Volume {
        volume(self.geometry().shell_volume())
    }

    #[must_use]
    pub fn head_volume(&self) -> Volume {
        volume(self.geometry().head_volume())
    }

    #[must_use]
    pub fn total_volume(&self) -> Volume {
        volume(self.geometry().total_volume())
    }

    /// Liquid volume held at the high level.
    ///
    /// Upright vessels measure the high level from the bottom tangent line
    /// rather than from the lowest point; tanks have no bottom head, so the two
    /// coincide.
    #[must_use]
    pub fn effective_volume(&self) -> Volume {
        let geometry = self.geometry();
        let high = self.high_liquid_level().get::<meter>();
        let level = match self.kind {
            VesselKind::Vertical { .. } => high + geometry.bottom_head_distance(),
            VesselKind::Horizontal { .. } | VesselKind::Spherical => high,
        };
        volume(geometry.liquid_volume(level))
    }

    /// Effective volume as a fraction of the total volume.
    #[must_use]
    pub fn efficiency_volume(&self) -> Ratio {
        self.effective_volume() / self.total_volume()
    }

    /// Inventory swing between the low and high levels.
    #[must_use]
    pub fn working_volume(&self) -> Volume {
        self.liquid_volume(self.high_liquid_level()) - self.liquid_volume(self.low_liquid_level())
    }

    /// Overflow allowance: 2% of the total volume when the overflow flag is set.
    #[must_use]
    pub fn overflow_volume(&self) -> Volume {
        if self.overflow {
            self.total_volume() * OVERFLOW_FRACTION
        } else {
            Volume::ZERO
        }
    }

    /// Liquid volume at the tangent height.
    #[must_use]
    pub fn tangent_volume(&self) -> Volume {
        self.liquid_volume(self.tangent_height())
    }

    /// Liquid volume at the current liquid level.
    #[must_use]
    pub fn current_volume(&self) -> Volume {
        self.liquid_volume(self.liquid_level())
    }

    #[must_use]
    pub fn liquid_volume(&self, level: Length) -> Volume {
        volume(self.geometry().liquid_volume(level.get::<meter>()))
    }

    #[must_use]
    pub fn shell_liquid_volume(&self, level: Length) -> Volume {
        volume(self.geometry().shell_liquid_volume(level.get::<meter>()))
    }

    /// Liquid volume held by both heads.
    #[must_use]
    pub fn head_liquid_volume(&self, level: Length) -> Volume {
        volume(self.geometry().head_liquid_volume(level.get::<meter>()))
    }

    #[must_use]
    pub fn bottom_head_liquid_volume(&self, level: Length) -> Volume {
        volume(self.geometry().bottom_head_liquid_volume(level.get::<meter>()))
    }

    #[must_use]
    pub fn top_head_liquid_volume(&self, level: Length) -> Volume {
        volume(self.geometry().top_head_liquid_volume(level.get::<meter>()))
    }

    #[must_use]
    pub fn wetted_area(&self, level: Length) -> Area {
        area(self.geometry().wetted_area(level.get::<meter>()))
    }

    #[must_use]
    pub fn shell_wetted_area(&self, level: Length) -> Area {
        area(self.geometry().shell_wetted_area(level.get::<meter>()))
    }

    #[must_use]
    pub fn head_wetted_area(&self, level: Length) -> Area {
        area(self.geometry().head_wetted_area(level.get::<meter>()))
    }

    #[must_use]
    pub fn bottom_head_wetted_area(&self, level: Length) -> Area {
        area(self.geometry().bottom_head_wetted_area(level.get::<meter>()))
    }

    #[must_use]
    pub fn top_head_wetted_area(&self, level: Length) -> Area {
        area(self.geometry().top_head_wetted_area(level.get::<meter>()))
    }

    #[must_use]
    pub fn shell_surface_area(&self) -> Area {
        area(self.geometry().shell_surface_area())
    }

    #[must_use]
    pub fn head_surface_area(&self) -> Area {
        area(self.geometry().head_surface_area())
    }

    #[must_use]
    pub fn total_surface_area(&self) -> Area {
        area(self.geometry().total_surface_area())
    }

    /// Time to move the working volume at the given flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`VesselError::InvalidArgument`] if `flow_rate` is not strictly
    /// positive.
    pub fn surge_time(&self, flow_rate: VolumeRate) -> Result<Time, VesselError> {
        let flow_rate = StrictlyPositive::new(flow_rate).map_err(|source| {
            VesselError::InvalidArgument {
                parameter: Parameter::FlowRate,
                source,
            }
        })?;
        Ok(self.working_volume() / flow_rate.into_inner())
    }

    /// Returns the normalized fill curve sampled at `steps + 1` evenly spaced heights.
    ///
    /// The curve is computed lazily; clone it to iterate again from the start.
    #[must_use]
    pub fn sample(&self, steps: usize) -> FillCurve {
        FillCurve::new(self.geometry(), steps)
    }

    /// Returns a report of the vessel's dimensions, volumes, and areas.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::new(self)
    }

    /// Resolves the current attributes into plain geometry.
    fn geometry(&self) -> Geometry {
        let diameter = self.diameter().get::<meter>();
        let cylinder = |shape: HeadShape| Cylinder {
            diameter,
            length: self.length.get::<meter>(),
            head: self.head(shape),
            quadrature: self.quadrature,
        };
        match self.kind {
            VesselKind::Vertical { head, variant } => Geometry::Vertical {
                cylinder: cylinder(head),
                variant,
            },
            VesselKind::Horizontal { head } => Geometry::Horizontal {
                cylinder: cylinder(head),
            },
            VesselKind::Spherical => Geometry::Sphere { diameter },
        }
    }

    fn head(&self, shape: HeadShape) -> Head {
        match shape {
            HeadShape::Flat => Head::Flat,
            HeadShape::Hemispherical => Head::Hemispherical,
            HeadShape::Elliptical => {
                Head::Elliptical(self.factors.unwrap_or(HeadFactors::ELLIPTICAL))
            }
            HeadShape::Torispherical => {
                Head::Torispherical(self.factors.unwrap_or(HeadFactors::TORISPHERICAL))
            }
            HeadShape::Conical => Head::Conical {
                depth: self.cone_depth.as_ref().get::<meter>(),
            },
        }
    }

    fn expect_applicable(&self, applies: bool, parameter: Parameter) -> Result<(), VesselError> {
        if applies {
            Ok(())
        } else {
            Err(VesselError::NotApplicable {
                parameter,
                kind: self.kind,
            })
        }
    }
}

fn length(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn volume(value: f64) -> Volume {
    Volume::new::<cubic_meter>(value)
}

fn area(value: f64) -> Area {
    Area::new::<square_meter>(value)
}
