use crate::error::{GeometryError, Result};

use super::{Vector2, TOLERANCE};

/// Returns the left-hand normal of `v`, i.e. `v` rotated by +90°.
#[must_use]
pub fn left_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Flips `v` so that its x-component is non-negative, then scales it to unit length.
///
/// When the x-component vanishes (relative to the vector length) the sign is
/// taken from the y-component instead, so a horizontal normal always points
/// towards +y. This makes every line orientation map to exactly one unit vector.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has (near) zero length.
pub fn oriented_unit(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if !len.is_finite() || len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let sign = if v.x.abs() > TOLERANCE * len {
        v.x.signum()
    } else {
        v.y.signum()
    };
    Ok(v * (sign / len))
}

/// Solves `[[a11, a12], [a21, a22]] · (x, y) = (b1, b2)` by Cramer's rule.
///
/// Returns `None` when the determinant is (relatively) zero or the solution
/// is not finite.
#[must_use]
pub fn solve_2x2(m: [[f64; 2]; 2], b: [f64; 2]) -> Option<(f64, f64)> {
    let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    let scale = (m[0][0].hypot(m[0][1])) * (m[1][0].hypot(m[1][1]));
    if scale < TOLERANCE || det.abs() <= TOLERANCE * scale {
        return None;
    }
    let x = (b[0] * m[1][1] - m[0][1] * b[1]) / det;
    let y = (m[0][0] * b[1] - b[0] * m[1][0]) / det;
    if x.is_finite() && y.is_finite() {
        Some((x, y))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn oriented_unit_flips_negative_x() {
        let u = oriented_unit(&Vector2::new(-3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(u.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(u.y, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn oriented_unit_keeps_positive_x() {
        let u = oriented_unit(&Vector2::new(2.0, 0.0)).unwrap();
        assert_abs_diff_eq!(u.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn oriented_unit_vertical_falls_back_to_y_sign() {
        let up = oriented_unit(&Vector2::new(0.0, -5.0)).unwrap();
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-12);
        let same = oriented_unit(&Vector2::new(0.0, 7.0)).unwrap();
        assert_abs_diff_eq!(same.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn oriented_unit_rejects_zero() {
        assert!(oriented_unit(&Vector2::zeros()).is_err());
    }

    #[test]
    fn left_normal_rotates_ccw() {
        let n = left_normal(&Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0);
        assert_abs_diff_eq!(n.y, 1.0);
    }

    #[test]
    fn solve_identity_like_system() {
        // x + y = 3, x - y = 1
        let (x, y) = solve_2x2([[1.0, 1.0], [1.0, -1.0]], [3.0, 1.0]).unwrap();
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_singular_returns_none() {
        assert!(solve_2x2([[1.0, 2.0], [2.0, 4.0]], [1.0, 1.0]).is_none());
    }
}
