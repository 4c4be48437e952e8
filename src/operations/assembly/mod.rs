//! Assembly of profile polylines into closed, placed toolpath loops.

mod entry;
mod full_width;
mod translate;

pub use entry::{create_double_curve_entry, EntrySide};
pub use full_width::FullWidthCurve;
pub use translate::shift_x;
