use tracing::{debug, info};

use crate::config::MachineConfig;
use crate::error::Result;
use crate::geometry::ToolpathLoop;
use crate::math::Point2;
use crate::operations::assembly::{
    create_double_curve_entry, shift_x, EntrySide, FullWidthCurve,
};
use crate::operations::mapping::{code_to_curve, LockCode};

/// The three toolpath loops of one key, in machine coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyToolpaths {
    pub left_double: ToolpathLoop,
    pub single: ToolpathLoop,
    pub right_double: ToolpathLoop,
}

impl KeyToolpaths {
    /// Generates the left double-curve, single-curve and right double-curve
    /// loops for the given codes.
    ///
    /// Both double-curve halves share one profile and differ only in the
    /// direction of their entry lead-in and their lateral placement.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for codes that do not fit the configuration and
    /// propagates any geometry error. No partial result is produced.
    pub fn generate(
        double_code: &LockCode,
        single_code: &LockCode,
        config: &MachineConfig,
    ) -> Result<Self> {
        info!(double = %double_code, single = %single_code, "generating toolpaths");

        let double_profile = code_to_curve(double_code, config.double_max_digit, config)?;
        let single_profile = code_to_curve(single_code, config.single_max_digit, config)?;
        debug!(
            double_points = double_profile.len(),
            single_points = single_profile.len(),
            "mapped codes to profiles"
        );

        let left_double = double_half(&double_profile, EntrySide::Left, config)?;
        let single = place(
            &band(&single_profile, config)?,
            0.0,
            config.single_depths.clone(),
            config,
        )?;
        let right_double = double_half(&double_profile, EntrySide::Right, config)?;

        Ok(Self {
            left_double,
            single,
            right_double,
        })
    }

    /// Returns the loops in milling order.
    #[must_use]
    pub fn loops(&self) -> [&ToolpathLoop; 3] {
        [&self.left_double, &self.single, &self.right_double]
    }
}

fn double_half(
    profile: &[Point2],
    side: EntrySide,
    config: &MachineConfig,
) -> Result<ToolpathLoop> {
    let with_entry =
        create_double_curve_entry(profile, side, config.entry_width_x, config.entry_width_y)?;
    place(
        &band(&with_entry, config)?,
        side.factor() * config.double_curve_spacing,
        config.double_depths.clone(),
        config,
    )
}

fn band(profile: &[Point2], config: &MachineConfig) -> Result<Vec<Point2>> {
    FullWidthCurve::new(profile, config.curve_thickness, config.mill_diameter)
        .with_parallel_tolerance(config.parallel_tolerance)
        .execute()
}

fn place(
    points: &[Point2],
    lateral_offset: f64,
    depths: Vec<f64>,
    config: &MachineConfig,
) -> Result<ToolpathLoop> {
    let laid_out = shift_x(points, lateral_offset);
    ToolpathLoop::new(shift_x(&laid_out, config.workpiece_offset_x), depths)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{InputError, KeymillError};

    #[test]
    fn default_key_produces_three_closed_loops() {
        let config = MachineConfig::default();
        let toolpaths =
            KeyToolpaths::generate(&LockCode::from_value(12), &LockCode::from_value(34), &config).unwrap();

        let centres = [-1250.0 + 12750.0, 12750.0, 1250.0 + 12750.0];
        let reach = config.entry_width_x + config.curve_thickness / 2.0;
        for (lp, centre) in toolpaths.loops().into_iter().zip(centres) {
            assert!(lp.points().len() > 3);
            assert_eq!(lp.points().first(), lp.points().last());
            for p in lp.points() {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
            let (lo, hi) = lp.x_extent();
            assert!(lo >= centre - reach, "min x {lo} too far from {centre}");
            assert!(hi <= centre + reach, "max x {hi} too far from {centre}");
        }
    }

    #[test]
    fn loops_carry_their_depths() {
        let config = MachineConfig::default();
        let toolpaths =
            KeyToolpaths::generate(&LockCode::from_value(12), &LockCode::from_value(34), &config).unwrap();
        assert_eq!(toolpaths.left_double.depths(), &[1800.0, 1600.0]);
        assert_eq!(toolpaths.right_double.depths(), &[1800.0, 1600.0]);
        assert_eq!(
            toolpaths.single.depths(),
            &[1800.0, 1600.0, 1400.0, 1200.0, 1100.0]
        );
    }

    #[test]
    fn double_halves_lead_in_to_opposite_sides() {
        let config = MachineConfig::default();
        let toolpaths =
            KeyToolpaths::generate(&LockCode::from_value(12), &LockCode::from_value(34), &config).unwrap();
        let (left_lo, _) = toolpaths.left_double.x_extent();
        let (_, right_hi) = toolpaths.right_double.x_extent();
        let left_centre = 12750.0 - 1250.0;
        let right_centre = 12750.0 + 1250.0;
        assert!(left_lo < left_centre - config.entry_width_x + 1.0);
        assert!(right_hi > right_centre + config.entry_width_x - 1.0);
    }

    #[test]
    fn repeated_digits_do_not_break_the_offset() {
        let config = MachineConfig::default();
        let toolpaths =
            KeyToolpaths::generate(&LockCode::from_value(4444), &LockCode::from_value(555_555), &config)
                .unwrap();
        for lp in toolpaths.loops() {
            assert_eq!(lp.points().first(), lp.points().last());
        }
    }

    #[test]
    fn digit_above_maximum_aborts_generation() {
        let config = MachineConfig::default();
        let err = KeyToolpaths::generate(&LockCode::from_value(18), &LockCode::from_value(34), &config)
            .unwrap_err();
        assert!(matches!(
            err,
            KeymillError::Input(InputError::DigitOutOfRange { digit: 8, max: 7 })
        ));
    }
}
