pub mod vector_2d;

/// 2D point type, coordinates in micrometers.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default tolerance of the dot-product test used to detect parallel lines.
pub const PARALLEL_TOLERANCE: f64 = 1e-5;
