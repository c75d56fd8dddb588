use std::iter::FusedIterator;

use super::core::Geometry;

/// One point of a normalized fill curve.
///
/// All three values are fractions of the vessel's total height, total volume,
/// and total surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPoint {
    pub height: f64,
    pub volume: f64,
    pub wetted_area: f64,
}

/// Lazy fill curve returned by [`Vessel::sample`](super::Vessel::sample).
///
/// Yields `steps + 1` evenly spaced points from empty to full. With zero steps
/// the curve is the single point `(0, 0, 0)`.
#[derive(Debug, Clone)]
pub struct FillCurve {
    geometry: Geometry,
    total_height: f64,
    total_volume: f64,
    total_area: f64,
    steps: usize,
    next: usize,
}

impl FillCurve {
    pub(super) fn new(geometry: Geometry, steps: usize) -> Self {
        Self {
            total_height: geometry.total_height(),
            total_volume: geometry.total_volume(),
            total_area: geometry.total_surface_area(),
            geometry,
            steps,
            next: 0,
        }
    }

    fn point(&self, step: usize) -> FillPoint {
        if step == 0 {
            return FillPoint {
                height: 0.0,
                volume: 0.0,
                wetted_area: 0.0,
            };
        }

        #[allow(clippy::cast_precision_loss)]
        let height = step as f64 / self.steps as f64;
        let level = height * self.total_height;
        FillPoint {
            height,
            volume: self.geometry.liquid_volume(level) / self.total_volume,
            wetted_area: self.geometry.wetted_area(level) / self.total_area,
        }
    }
}

impl Iterator for FillCurve {
    type Item = FillPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillCurve {}

impl FusedIterator for FillCurve {}
