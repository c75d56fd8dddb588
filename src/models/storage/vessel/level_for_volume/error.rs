use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Volume;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while finding the level that holds a given volume.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The target volume is negative or not a number.
    #[error("invalid target volume: {0}")]
    Validation(ConstraintError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Smallest volume residual encountered during iteration.
        residual: Volume,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
