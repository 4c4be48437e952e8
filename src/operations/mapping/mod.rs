//! Mapping of lock codes to raw profile polylines.

mod code_to_curve;
mod lock_code;

pub use code_to_curve::{code_to_curve, code_to_distance, y_values};
pub use lock_code::{CurveKind, LockCode};
