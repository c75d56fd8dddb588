//! Inverse inventory query: the fill level that holds a given volume.
//!
//! Liquid volume is monotone in fill level, so the inversion is a bracketed
//! root find over `[0, total_height]` using the [`Inventory`] model.

mod config;
mod error;
mod problem;

pub use config::LevelConfig;
pub use error::LevelError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Volume},
        length::meter,
        volume::cubic_meter,
    },
};

use crate::support::constraint::NonNegative;

use super::{Inventory, Vessel};

use problem::LevelProblem;

/// Finds the fill level at which `vessel` holds `volume`.
///
/// An empty target returns zero and a target at or above the vessel's capacity
/// returns the total height.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use twine_vessels::models::storage::vessel::{LevelConfig, Vessel, level_for_volume};
/// use uom::si::{f64::{Length, Volume}, length::meter, volume::cubic_meter};
///
/// let sphere = Vessel::sphere(Length::new::<meter>(2.0)).unwrap();
/// let half = sphere.total_volume() * 0.5;
///
/// let level = level_for_volume(&sphere, half, LevelConfig::default()).unwrap();
/// assert_relative_eq!(level.get::<meter>(), 1.0, epsilon = 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`LevelError::Validation`] if `volume` is negative or not a number,
/// and [`LevelError`] solver variants if the bisection fails to converge.
pub fn level_for_volume(
    vessel: &Vessel,
    volume: Volume,
    config: LevelConfig,
) -> Result<Length, LevelError> {
    let target = NonNegative::new(volume)
        .map_err(LevelError::Validation)?
        .into_inner();

    let total_height = vessel.total_height();
    if target == Volume::ZERO {
        return Ok(Length::ZERO);
    }
    if target >= vessel.liquid_volume(total_height) {
        return Ok(total_height);
    }

    let model = Inventory::new(vessel);
    let problem = LevelProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, total_height.get::<meter>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            tracing::trace!(level = event.x(), "level bisection step");
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(LevelError::MaxIters {
            residual: Volume::new::<cubic_meter>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.level)
}
