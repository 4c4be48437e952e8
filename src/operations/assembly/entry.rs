use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Which half of the double curve an entry lead-in belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySide {
    Left,
    Right,
}

impl EntrySide {
    /// Returns `-1` for the left half and `+1` for the right half.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Replaces the last vertex of `points` by an angled lead-in vertex.
///
/// The new vertex sits at `side.factor() * entry_width_x` and
/// `entry_width_y` below the removed vertex.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if fewer than 2 points are provided.
pub fn create_double_curve_entry(
    points: &[Point2],
    side: EntrySide,
    entry_width_x: f64,
    entry_width_y: f64,
) -> Result<Vec<Point2>> {
    let Some((removed, rest)) = points.split_last().filter(|(_, rest)| !rest.is_empty()) else {
        return Err(OperationError::InvalidInput(format!(
            "entry needs a curve of at least 2 points, got {}",
            points.len()
        ))
        .into());
    };

    let mut result = rest.to_vec();
    result.push(Point2::new(
        side.factor() * entry_width_x,
        removed.y - entry_width_y,
    ));
    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn curve() -> Vec<Point2> {
        vec![
            Point2::new(-1000.0, 34500.0),
            Point2::new(-1000.0, 33000.0),
            Point2::new(0.0, 27000.0),
            Point2::new(0.0, 26000.0),
        ]
    }

    #[test]
    fn left_entry_points_to_negative_x() {
        let result = create_double_curve_entry(&curve(), EntrySide::Left, 2750.0, 3500.0).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result[2], Point2::new(0.0, 27000.0));
        assert_eq!(result[3], Point2::new(-2750.0, 22500.0));
    }

    #[test]
    fn right_entry_points_to_positive_x() {
        let result =
            create_double_curve_entry(&curve(), EntrySide::Right, 2750.0, 3500.0).unwrap();
        assert_eq!(result[3], Point2::new(2750.0, 22500.0));
    }

    #[test]
    fn input_is_left_untouched() {
        let original = curve();
        let _ = create_double_curve_entry(&original, EntrySide::Left, 1.0, 1.0).unwrap();
        assert_eq!(original, curve());
    }

    #[test]
    fn single_point_is_rejected() {
        let points = [Point2::new(0.0, 0.0)];
        assert!(create_double_curve_entry(&points, EntrySide::Left, 1.0, 1.0).is_err());
    }
}
