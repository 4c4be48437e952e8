use std::io::Write;

use crate::error::Result;
use crate::geometry::ToolpathLoop;
use crate::pipeline::KeyToolpaths;

use super::{AxisTarget, GCodeWriter};

/// Mills one closed loop at each of its depths.
///
/// Retracts to `safety_z`, then for every depth rapids to the loop start,
/// plunges, and cuts along the remaining points. Retracts again at the end.
///
/// # Errors
///
/// Propagates write errors of the G-code writer.
pub fn mill_loop<W: Write>(
    writer: &mut GCodeWriter<W>,
    toolpath: &ToolpathLoop,
    safety_z: f64,
) -> Result<()> {
    let points = toolpath.points();
    let Some((start, rest)) = points.split_first() else {
        return Ok(());
    };
    let cut: Vec<AxisTarget> = rest.iter().map(AxisTarget::xy).collect();

    writer.goto(AxisTarget::z(safety_z))?;
    for &depth in toolpath.depths() {
        writer.goto(AxisTarget::xy(start))?;
        writer.mill_path(&[AxisTarget::z(depth)])?;
        writer.mill_path(&cut)?;
    }
    writer.goto(AxisTarget::z(safety_z))
}

/// Writes the complete program for a key: left double curve, single curve,
/// right double curve, then the program end.
///
/// # Errors
///
/// Propagates write errors of the G-code writer.
pub fn write_program<W: Write>(
    writer: &mut GCodeWriter<W>,
    toolpaths: &KeyToolpaths,
    safety_z: f64,
) -> Result<()> {
    for toolpath in toolpaths.loops() {
        mill_loop(writer, toolpath, safety_z)?;
    }
    writer.end()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;
    use crate::math::Point2;
    use crate::operations::mapping::LockCode;

    #[test]
    fn loop_is_milled_once_per_depth() {
        let toolpath = ToolpathLoop::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1000.0, 0.0),
                Point2::new(1000.0, 2000.0),
                Point2::new(0.0, 0.0),
            ],
            vec![1800.0, 1600.0],
        )
        .unwrap();
        let mut writer = GCodeWriter::new(Vec::new());
        mill_loop(&mut writer, &toolpath, 5000.0).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let expected = "\
G00 Z5.00
G00 X0.00 Y0.00
G01 Z1.80
G01 X1.00 Y0.00
G01 X1.00 Y2.00
G01 X0.00 Y0.00
G00 X0.00 Y0.00
G01 Z1.60
G01 X1.00 Y0.00
G01 X1.00 Y2.00
G01 X0.00 Y0.00
G00 Z5.00
";
        assert_eq!(text, expected);
    }

    #[test]
    fn program_mills_all_loops_and_ends() {
        let config = MachineConfig::default();
        let toolpaths =
            KeyToolpaths::generate(&LockCode::from_value(12), &LockCode::from_value(34), &config).unwrap();
        let mut writer = GCodeWriter::new(Vec::new());
        write_program(&mut writer, &toolpaths, config.safety_z).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let plunges = text.lines().filter(|l| l.starts_with("G01 Z")).count();
        assert_eq!(plunges, 2 + 5 + 2);
        assert_eq!(text.lines().filter(|l| *l == "G00 Z5.00").count(), 6);
        assert!(text.ends_with("M5\nM30\n"));
    }
}
