use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::PARALLEL_TOLERANCE;

/// Machine, tooling and key-blank constants used by the toolpath generator.
///
/// Lengths are in micrometers. Every field has a default, so a TOML file only
/// needs to list the values that differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// X distance between two neighbouring code digits.
    pub code_distance: f64,
    /// Width of the milled curve band.
    pub curve_thickness: f64,
    /// Y distance between two pin positions.
    pub pin_distance: f64,
    /// Y length of the flat section at each pin.
    pub pin_length: f64,
    /// Largest digit allowed in a double-curve code.
    pub double_max_digit: u8,
    /// Largest digit allowed in a single-curve code.
    pub single_max_digit: u8,
    /// Number of pin positions on the key.
    pub positions: usize,
    /// Y coordinate of the top of the curve.
    pub curve_offset_y: f64,
    /// Z height for rapid moves between loops.
    pub safety_z: f64,
    /// Cutter diameter.
    pub mill_diameter: f64,
    /// X reach of the double-curve lead-in.
    pub entry_width_x: f64,
    /// Y drop of the double-curve lead-in.
    pub entry_width_y: f64,
    /// Extra Y clearance above the first pin.
    pub top_extra_y: f64,
    /// Lateral distance of each double-curve half from the single curve.
    pub double_curve_spacing: f64,
    /// X position of the single curve on the workpiece.
    pub workpiece_offset_x: f64,
    /// Z depths of the passes milling each double-curve half.
    pub double_depths: Vec<f64>,
    /// Z depths of the passes milling the single curve.
    pub single_depths: Vec<f64>,
    /// Dot-product tolerance for treating two offset lines as parallel.
    pub parallel_tolerance: f64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            code_distance: 500.0,
            curve_thickness: 1200.0,
            pin_distance: 3500.0,
            pin_length: 1000.0,
            double_max_digit: 7,
            single_max_digit: 9,
            positions: 6,
            curve_offset_y: 35000.0,
            safety_z: 5000.0,
            mill_diameter: 1000.0,
            entry_width_x: 2750.0,
            entry_width_y: 3500.0,
            top_extra_y: 1000.0,
            double_curve_spacing: 1250.0,
            workpiece_offset_x: 12750.0,
            double_depths: vec![1800.0, 1600.0],
            single_depths: vec![1800.0, 1600.0, 1400.0, 1200.0, 1100.0],
            parallel_tolerance: PARALLEL_TOLERANCE,
        }
    }
}

impl MachineConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`MachineConfig::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&text)
    }

    /// Checks that the constants describe a millable geometry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("code_distance", self.code_distance),
            ("pin_distance", self.pin_distance),
            ("pin_length", self.pin_length),
            ("mill_diameter", self.mill_diameter),
            ("curve_thickness", self.curve_thickness),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.curve_thickness < self.mill_diameter {
            return Err(invalid(format!(
                "curve_thickness {} is smaller than mill_diameter {}",
                self.curve_thickness, self.mill_diameter
            )));
        }
        if (self.pin_distance - self.pin_length).abs() < f64::EPSILON {
            return Err(invalid(
                "pin_distance equal to pin_length makes consecutive pins horizontal".to_owned(),
            ));
        }
        if !(self.parallel_tolerance > 0.0 && self.parallel_tolerance < 1.0) {
            return Err(invalid(format!(
                "parallel_tolerance must be in (0, 1), got {}",
                self.parallel_tolerance
            )));
        }
        if self.positions == 0 {
            return Err(invalid("positions must be at least 1".to_owned()));
        }
        if self.double_depths.is_empty() || self.single_depths.is_empty() {
            return Err(invalid("every curve needs at least one milling depth".to_owned()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::KeymillError {
    ConfigError::Invalid(message).into()
}
