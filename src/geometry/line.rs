use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{left_normal, oriented_unit, solve_2x2};
use crate::math::{Point2, Vector2, TOLERANCE};

/// An infinite 2D line in implicit form: `a1 * x + a2 * y + a0 = 0`.
///
/// `(a1, a2)` is the left-hand normal of the direction from `start` to `end`,
/// so it is never zero. The two construction points are kept because
/// shifting a line translates them and rebuilds the equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a1: f64,
    pub a2: f64,
    pub a0: f64,
    start: Point2,
    end: Point2,
}

impl Line {
    /// Returns the first construction point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the second construction point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the (unnormalized) normal vector `(a1, a2)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a1, self.a2)
    }

    /// Returns the normal scaled to unit length and oriented by
    /// [`oriented_unit`]: x-component non-negative, +y for horizontal normals.
    ///
    /// This orientation defines the positive side of [`shift_line`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the normal has zero length.
    pub fn unit_normal(&self) -> Result<Vector2> {
        oriented_unit(&self.normal())
    }

    /// Evaluates `a1 * x + a2 * y + a0` at `p`. Zero on the line.
    #[must_use]
    pub fn residual(&self, p: &Point2) -> f64 {
        self.a1 * p.x + self.a2 * p.y + self.a0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:5.2}x + {:5.2}y + {:5.2} = 0", self.a1, self.a2, self.a0)
    }
}

/// Constructs the line through `p1` and `p2`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSegment` if the points coincide.
pub fn line_through(p1: Point2, p2: Point2) -> Result<Line> {
    let direction = p2 - p1;
    if direction.norm() < TOLERANCE {
        return Err(GeometryError::DegenerateSegment { x: p1.x, y: p1.y }.into());
    }
    let n = left_normal(&direction);
    let a0 = -(n.x * p1.x + n.y * p1.y);
    Ok(Line {
        a1: n.x,
        a2: n.y,
        a0,
        start: p1,
        end: p2,
    })
}

/// Shifts `line` perpendicular to itself by `distance`.
///
/// Both construction points move by `distance * line.unit_normal()`, so a
/// positive distance moves the line towards +x (towards +y for horizontal
/// lines) regardless of the line's walking direction.
///
/// # Errors
///
/// Propagates `GeometryError` from normalization or reconstruction.
pub fn shift_line(line: &Line, distance: f64) -> Result<Line> {
    let offset = line.unit_normal()? * distance;
    line_through(line.start + offset, line.end + offset)
}

/// Intersects two lines by solving their 2×2 linear system.
///
/// Callers are expected to rule out parallel lines with [`is_parallel`] first.
///
/// # Errors
///
/// Returns `GeometryError::SingularSystem` if the lines are parallel.
pub fn intersect_lines(l1: &Line, l2: &Line) -> Result<Point2> {
    let (x, y) = solve_2x2([[l1.a1, l1.a2], [l2.a1, l2.a2]], [-l1.a0, -l2.a0])
        .ok_or(GeometryError::SingularSystem)?;
    Ok(Point2::new(x, y))
}

/// Returns `true` when the oriented unit normals of both lines have a dot
/// product above `1 - eps`. Anti-parallel lines count as parallel.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either normal has zero length.
pub fn is_parallel(l1: &Line, l2: &Line, eps: f64) -> Result<bool> {
    let n1 = l1.unit_normal()?;
    let n2 = l2.unit_normal()?;
    Ok(n1.dot(&n2) > 1.0 - eps)
}
