/// Tolerances and limits for adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute tolerance on the summed error estimate.
    pub abs_tol: f64,

    /// Relative tolerance on the summed error estimate.
    pub rel_tol: f64,

    /// Maximum number of subintervals before giving up.
    pub max_subintervals: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_subintervals: 200,
        }
    }
}

impl QuadratureConfig {
    /// Returns the error budget for an integral estimate of `value`.
    pub(super) fn tolerance(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}
