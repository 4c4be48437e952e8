mod shift_curve;

pub use shift_curve::{shift_curve, ShiftCurve};
