//! G-code output for toolpath loops.

mod program;
mod writer;

pub use program::{mill_loop, write_program};
pub use writer::{AxisTarget, GCodeWriter};
