//! The 7-point Gauss / 15-point Kronrod rule pair.

use super::QuadratureError;

/// Kronrod abscissae on `[-1, 1]`, positive half, descending.
///
/// Odd indices are shared with the embedded 7-point Gauss rule.
const NODES: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_5,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_48,
    0.0,
];

const KRONROD_WEIGHTS: [f64; 8] = [
    0.022_935_322_010_529_224,
    0.063_092_092_629_978_56,
    0.104_790_010_322_250_19,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_42,
    0.204_432_940_075_298_89,
    0.209_482_141_084_727_82,
];

const GAUSS_WEIGHTS: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_64,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// One subinterval with its Kronrod estimate and error bound.
#[derive(Debug, Clone, Copy)]
pub(super) struct Segment {
    pub(super) lower: f64,
    pub(super) upper: f64,
    pub(super) value: f64,
    pub(super) abs_error: f64,
}

impl Segment {
    /// Applies the rule pair on `[lower, upper]`.
    ///
    /// The error bound is the magnitude of the Kronrod–Gauss difference.
    pub(super) fn evaluate<F>(f: &F, lower: f64, upper: f64) -> Result<Self, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        let center = 0.5 * (lower + upper);
        let half_width = 0.5 * (upper - lower);

        let sample = |x: f64| {
            let y = f(x);
            if y.is_finite() {
                Ok(y)
            } else {
                Err(QuadratureError::NonFinite { at: x })
            }
        };

        let f_center = sample(center)?;
        let mut kronrod = f_center * KRONROD_WEIGHTS[7];
        let mut gauss = f_center * GAUSS_WEIGHTS[3];

        for (j, node) in NODES.iter().take(7).enumerate() {
            let dx = half_width * node;
            let pair = sample(center - dx)? + sample(center + dx)?;
            kronrod += KRONROD_WEIGHTS[j] * pair;
            if j % 2 == 1 {
                gauss += GAUSS_WEIGHTS[j / 2] * pair;
            }
        }

        Ok(Self {
            lower,
            upper,
            value: kronrod * half_width,
            abs_error: ((kronrod - gauss) * half_width).abs(),
        })
    }
}
