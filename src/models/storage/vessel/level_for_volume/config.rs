use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Volume},
    length::meter,
    volume::cubic_meter,
};

/// Solver configuration for the level-for-volume inversion.
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the fill level.
    pub level_tol: Length,

    /// Absolute tolerance on the volume residual (held - target).
    pub volume_tol: Volume,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            level_tol: Length::new::<meter>(1e-10),
            volume_tol: Volume::new::<cubic_meter>(1e-10),
        }
    }
}

impl LevelConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.level_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.volume_tol.get::<cubic_meter>(),
        }
    }
}
