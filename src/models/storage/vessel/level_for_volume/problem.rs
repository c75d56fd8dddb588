//! Problem formulation for the level-for-volume inversion.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{
    f64::{Length, Volume},
    length::meter,
    volume::cubic_meter,
};

use crate::models::storage::vessel::FillState;

/// Equation problem whose root is the level holding the target volume.
///
/// Computes the residual as `held_volume - target_volume`.
pub(super) struct LevelProblem {
    target: Volume,
}

impl LevelProblem {
    pub(super) fn new(target: Volume) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for LevelProblem {
    type Input = Length;
    type Output = FillState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.volume - self.target).get::<cubic_meter>()])
    }
}
