use crate::math::Point2;

/// Translates every point of a curve along X by `offset`.
#[must_use]
pub fn shift_x(points: &[Point2], offset: f64) -> Vec<Point2> {
    points
        .iter()
        .map(|p| Point2::new(p.x + offset, p.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_x() {
        let points = [Point2::new(-1.0, 5.0), Point2::new(2.5, -3.0)];
        let moved = shift_x(&points, 12750.0);
        assert_eq!(moved, vec![Point2::new(12749.0, 5.0), Point2::new(12752.5, -3.0)]);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(shift_x(&[], 1.0).is_empty());
    }
}
