pub mod line;
pub mod toolpath;

pub use line::{intersect_lines, is_parallel, line_through, shift_line, Line};
pub use toolpath::ToolpathLoop;
