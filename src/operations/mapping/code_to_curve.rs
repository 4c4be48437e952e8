use crate::config::MachineConfig;
use crate::error::Result;
use crate::math::Point2;

use super::LockCode;

/// Maps code digits to X positions centred on the curve axis.
///
/// A synthetic middle digit `(max_digit + 1) / 2` is appended for the curve
/// end, then every digit `d` becomes `(d - middle) * unit`.
#[must_use]
pub fn code_to_distance(digits: &[u8], max_digit: u8, unit: f64) -> Vec<f64> {
    let middle = (u16::from(max_digit) + 1) / 2;
    digits
        .iter()
        .map(|&d| u16::from(d))
        .chain(std::iter::once(middle))
        .map(|d| (f64::from(d) - f64::from(middle)) * unit)
        .collect()
}

/// Builds `2 * position_count` Y values, an entry and an exit for each pin.
///
/// Pins step down by `pin_distance`; within a pin the two values are
/// `pin_length` apart. The first value is raised by the top margin and both
/// the first and the last value are lowered by the mill radius so the cutter
/// clears the stock edges.
#[must_use]
pub fn y_values(
    y_offset: f64,
    pin_distance: f64,
    position_count: usize,
    config: &MachineConfig,
) -> Vec<f64> {
    let mut local_offset = -config.pin_length / 2.0;
    let base = y_offset + local_offset - config.top_extra_y;

    let mut values = Vec::with_capacity(2 * position_count);
    for k in 0..2 * position_count {
        #[allow(clippy::cast_precision_loss)]
        let pin = (k / 2) as f64;
        values.push(base - pin * pin_distance - local_offset);
        local_offset = -local_offset;
    }

    let mill_radius = config.mill_diameter / 2.0;
    if let Some(first) = values.first_mut() {
        *first += config.top_extra_y - mill_radius;
    }
    if let Some(last) = values.last_mut() {
        *last -= mill_radius;
    }
    values
}

/// Converts a lock code into the raw zig-zag profile polyline.
///
/// Each digit (plus the synthetic middle digit) yields two points at the same
/// X, one per pin edge. The Y values are built for as many positions as
/// there are points and the surplus is dropped, so only the first point gets
/// the edge corrections of [`y_values`].
///
/// # Errors
///
/// Returns an `InputError` if the code does not fit `max_digit` or the
/// configured number of positions.
pub fn code_to_curve(
    code: &LockCode,
    max_digit: u8,
    config: &MachineConfig,
) -> Result<Vec<Point2>> {
    code.validate(max_digit, config.positions)?;

    let xs: Vec<f64> = code_to_distance(code.digits(), max_digit, config.code_distance)
        .into_iter()
        .flat_map(|x| [x, x])
        .collect();
    let ys = y_values(config.curve_offset_y, config.pin_distance, xs.len(), config);

    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point2::new(x, y))
        .collect())
}
