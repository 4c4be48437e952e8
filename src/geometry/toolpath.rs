use crate::error::{OperationError, Result};
use crate::math::{Point2, TOLERANCE};

/// A closed toolpath loop together with the Z depths it is milled at.
///
/// The first and last points coincide. Depths are ordered by pass, each
/// one a Z height in micrometers; smaller values cut deeper.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolpathLoop {
    points: Vec<Point2>,
    depths: Vec<f64>,
}

impl ToolpathLoop {
    /// Creates a loop from closed points and pass depths.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the loop has fewer than three
    /// points, is not closed, or no depth is given.
    pub fn new(points: Vec<Point2>, depths: Vec<f64>) -> Result<Self> {
        if points.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "toolpath loop needs at least 3 points, got {}",
                points.len()
            ))
            .into());
        }
        if !is_closed(&points) {
            return Err(
                OperationError::InvalidInput("toolpath loop is not closed".to_owned()).into(),
            );
        }
        if depths.is_empty() {
            return Err(
                OperationError::InvalidInput("toolpath loop has no milling depth".to_owned())
                    .into(),
            );
        }
        Ok(Self { points, depths })
    }

    /// Returns the loop points; the last equals the first.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the milling pass depths in cutting order.
    #[must_use]
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Returns `(min_x, max_x)` over all loop points.
    #[must_use]
    pub fn x_extent(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            })
    }
}

fn is_closed(points: &[Point2]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first - last).norm() < TOLERANCE,
        _ => false,
    }
}
