pub mod config;
pub mod error;
pub mod gcode;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;

pub use config::MachineConfig;
pub use error::{KeymillError, Result};
pub use pipeline::KeyToolpaths;
