use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{intersect_lines, is_parallel, line_through, shift_line, Line};
use crate::math::{Point2, PARALLEL_TOLERANCE};

/// Offsets an open 2D polyline by a constant signed distance.
///
/// # Algorithm
///
/// 1. Build the line through every segment and shift it by `distance`.
/// 2. Intersect consecutive shifted lines to get the interior corners.
///    Parallel neighbours (collinear input segments) have no corner and are
///    skipped, so the shared vertex disappears from the result.
/// 3. Move the first and last input points along the normals of the first
///    and last shifted lines to get the end points.
///
/// The result has `2 + number of non-parallel joints` points.
///
/// # Sign Convention
///
/// Each segment moves along its normal oriented to +x (+y for horizontal
/// segments), see [`shift_line`]. A positive distance therefore moves a
/// mostly vertical curve to the right, independent of the walking direction.
///
/// The polyline is assumed not to self-intersect after offsetting.
#[derive(Debug)]
pub struct ShiftCurve<'a> {
    points: &'a [Point2],
    distance: f64,
    parallel_tolerance: f64,
}

impl<'a> ShiftCurve<'a> {
    /// Creates a new curve offset operation with the default parallel tolerance.
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self {
            points,
            distance,
            parallel_tolerance: PARALLEL_TOLERANCE,
        }
    }

    /// Sets the dot-product tolerance used to detect parallel consecutive lines.
    #[must_use]
    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 2 points are provided
    /// - `GeometryError::DegenerateSegment` if two consecutive points coincide
    /// - `GeometryError::NonFinite` if the offset produced a non-finite coordinate
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let n = self.points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "at least 2 points are required for curve offset, got {n}"
            ))
            .into());
        }

        let lines = self
            .points
            .windows(2)
            .map(|seg| line_through(seg[0], seg[1]).and_then(|l| shift_line(&l, self.distance)))
            .collect::<Result<Vec<Line>>>()?;

        let mut result = Vec::with_capacity(n);
        result.push(self.end_point(&self.points[0], &lines[0])?);

        for (i, pair) in lines.windows(2).enumerate() {
            if is_parallel(&pair[0], &pair[1], self.parallel_tolerance)? {
                debug!(vertex = i + 1, "dropping joint between parallel offset lines");
                continue;
            }
            result.push(intersect_lines(&pair[0], &pair[1])?);
        }

        result.push(self.end_point(&self.points[n - 1], &lines[n - 2])?);

        if result.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite("curve offset").into());
        }

        debug!(
            input = n,
            output = result.len(),
            distance = self.distance,
            "shifted curve"
        );
        Ok(result)
    }

    fn end_point(&self, point: &Point2, line: &Line) -> Result<Point2> {
        Ok(*point + line.unit_normal()? * self.distance)
    }
}

/// Offsets `points` by `distance` using `parallel_tolerance` for joint filtering.
///
/// Shorthand for [`ShiftCurve::execute`].
///
/// # Errors
///
/// See [`ShiftCurve::execute`].
pub fn shift_curve(
    points: &[Point2],
    distance: f64,
    parallel_tolerance: f64,
) -> Result<Vec<Point2>> {
    ShiftCurve::new(points, distance)
        .with_parallel_tolerance(parallel_tolerance)
        .execute()
}
