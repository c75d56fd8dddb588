use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Area, Length, Volume};

use super::Vessel;

/// Liquid inventory of a vessel at one fill level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillState {
    /// Fill level as given, before clamping.
    pub level: Length,
    pub volume: Volume,
    pub wetted_area: Area,
}

/// A [`Model`] mapping a fill level to the liquid inventory of a vessel.
///
/// The vessel is borrowed, so the model always reflects its current
/// dimensions.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_vessels::models::storage::vessel::{Inventory, Vessel};
/// use uom::si::{f64::Length, length::meter, volume::cubic_meter};
///
/// let sphere = Vessel::sphere(Length::new::<meter>(4.0)).unwrap();
/// let state = Inventory::new(&sphere).call(&Length::new::<meter>(4.0)).unwrap();
///
/// assert!((state.volume.get::<cubic_meter>() - 33.510).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Inventory<'a> {
    vessel: &'a Vessel,
}

impl<'a> Inventory<'a> {
    #[must_use]
    pub fn new(vessel: &'a Vessel) -> Self {
        Self { vessel }
    }

    #[must_use]
    pub fn vessel(&self) -> &'a Vessel {
        self.vessel
    }
}

impl Model for Inventory<'_> {
    type Input = Length;
    type Output = FillState;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(FillState {
            level: *input,
            volume: self.vessel.liquid_volume(*input),
            wetted_area: self.vessel.wetted_area(*input),
        })
    }
}
