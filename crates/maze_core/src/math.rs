//! Math types shared across the game core
//!
//! Thin aliases over nalgebra plus the distance helpers the gameplay code
//! leans on. Everything is pixel-space f32.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type, pixel coordinates
pub type Point2 = nalgebra::Point2<f32>;

/// Euclidean distance between two points
pub fn distance(a: Point2, b: Point2) -> f32 {
    (a - b).norm()
}

/// Squared Euclidean distance between two points
pub fn distance_squared(a: Point2, b: Point2) -> f32 {
    (a - b).norm_squared()
}
