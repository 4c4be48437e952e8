use std::io::Write;

use crate::error::{GCodeError, Result};
use crate::math::Point2;

/// Target coordinates of a single move; absent axes keep their position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisTarget {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl AxisTarget {
    /// A move in the XY plane.
    #[must_use]
    pub fn xy(point: &Point2) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            z: None,
        }
    }

    /// A pure Z move.
    #[must_use]
    pub fn z(z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::default()
        }
    }
}

/// Sequential G-code emitter.
///
/// Coordinates are given in micrometers and written in millimeters with two
/// decimals, one motion command per line.
#[derive(Debug)]
pub struct GCodeWriter<W: Write> {
    out: W,
}

impl<W: Write> GCodeWriter<W> {
    /// Creates a writer emitting into `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying output.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emits a rapid positioning move (`G00`).
    ///
    /// # Errors
    ///
    /// Returns `GCodeError::NoAxis` if no axis is given, or `GCodeError::Io`.
    pub fn goto(&mut self, target: AxisTarget) -> Result<()> {
        self.coord("G00", target)
    }

    /// Emits one linear cutting move (`G01`) per target.
    ///
    /// # Errors
    ///
    /// Returns `GCodeError::NoAxis` if a target has no axis, or `GCodeError::Io`.
    pub fn mill_path(&mut self, targets: &[AxisTarget]) -> Result<()> {
        for target in targets {
            self.coord("G01", *target)?;
        }
        Ok(())
    }

    /// Emits the program end: spindle stop and program end with rewind.
    ///
    /// # Errors
    ///
    /// Returns `GCodeError::Io` if writing fails.
    pub fn end(&mut self) -> Result<()> {
        self.out.write_all(b"M5\nM30\n").map_err(GCodeError::from)?;
        self.out.flush().map_err(GCodeError::from)?;
        Ok(())
    }

    fn coord(&mut self, code: &str, target: AxisTarget) -> Result<()> {
        let mut words = String::new();
        for (axis, value) in [('X', target.x), ('Y', target.y), ('Z', target.z)] {
            if let Some(um) = value {
                words.push_str(&format!(" {axis}{:.2}", um / 1000.0));
            }
        }
        if words.is_empty() {
            return Err(GCodeError::NoAxis.into());
        }
        writeln!(self.out, "{code}{words}").map_err(GCodeError::from)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::KeymillError;

    fn output(writer: GCodeWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn goto_writes_only_given_axes() {
        let mut writer = GCodeWriter::new(Vec::new());
        writer.goto(AxisTarget::z(5000.0)).unwrap();
        writer
            .goto(AxisTarget::xy(&Point2::new(12750.0, -1234.0)))
            .unwrap();
        assert_eq!(output(writer), "G00 Z5.00\nG00 X12.75 Y-1.23\n");
    }

    #[test]
    fn mill_path_writes_one_line_per_target() {
        let mut writer = GCodeWriter::new(Vec::new());
        writer
            .mill_path(&[
                AxisTarget::z(1800.0),
                AxisTarget::xy(&Point2::new(0.0, 1000.0)),
            ])
            .unwrap();
        assert_eq!(output(writer), "G01 Z1.80\nG01 X0.00 Y1.00\n");
    }

    #[test]
    fn empty_target_is_rejected() {
        let mut writer = GCodeWriter::new(Vec::new());
        let err = writer.goto(AxisTarget::default()).unwrap_err();
        assert!(matches!(err, KeymillError::GCode(GCodeError::NoAxis)));
        assert!(output(writer).is_empty());
    }

    #[test]
    fn end_stops_spindle_and_program() {
        let mut writer = GCodeWriter::new(Vec::new());
        writer.end().unwrap();
        assert_eq!(output(writer), "M5\nM30\n");
    }
}
