use tracing::debug;

use crate::error::Result;
use crate::math::{Point2, PARALLEL_TOLERANCE};
use crate::operations::offset::ShiftCurve;

/// Turns an open profile polyline into a closed loop milling a band of
/// `thickness` around it with a cutter of `mill_diameter`.
///
/// The cutter centre follows the two offsets at `±(thickness - mill_diameter) / 2`.
/// The loop runs along the inner offset (negative side), back along the
/// reversed outer offset, and closes on the first inner point.
#[derive(Debug)]
pub struct FullWidthCurve<'a> {
    points: &'a [Point2],
    thickness: f64,
    mill_diameter: f64,
    parallel_tolerance: f64,
}

impl<'a> FullWidthCurve<'a> {
    /// Creates a new band operation with the default parallel tolerance.
    #[must_use]
    pub fn new(points: &'a [Point2], thickness: f64, mill_diameter: f64) -> Self {
        Self {
            points,
            thickness,
            mill_diameter,
            parallel_tolerance: PARALLEL_TOLERANCE,
        }
    }

    /// Sets the tolerance passed on to the curve offsets.
    #[must_use]
    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Executes the operation and returns the closed loop.
    ///
    /// # Errors
    ///
    /// Propagates any error of the two curve offsets.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let half = (self.thickness - self.mill_diameter) / 2.0;
        let inner = ShiftCurve::new(self.points, -half)
            .with_parallel_tolerance(self.parallel_tolerance)
            .execute()?;
        let outer = ShiftCurve::new(self.points, half)
            .with_parallel_tolerance(self.parallel_tolerance)
            .execute()?;

        let mut result = Vec::with_capacity(inner.len() + outer.len() + 1);
        result.extend_from_slice(&inner);
        result.extend(outer.iter().rev());
        result.push(inner[0]);

        debug!(
            inner = inner.len(),
            outer = outer.len(),
            half_width = half,
            "closed full-width loop"
        );
        Ok(result)
    }
}
