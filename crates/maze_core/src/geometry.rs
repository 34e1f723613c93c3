//! Collision geometry for discs and axis-aligned rectangles
//!
//! Provides the exact circle-vs-rectangle intersection test (nearest point
//! on the rectangle, not a bounding-box approximation) and the disc overlap
//! test used for goal detection. All tests use strict comparison, so shapes
//! whose boundaries only just touch do not count as intersecting.

use crate::math::{distance_squared, Point2, Vec2};

/// Get the closest point on an axis-aligned rectangle to a given point
///
/// Clamps each coordinate independently to the rectangle's extent on that
/// axis. A point already inside the rectangle is returned unchanged.
pub fn closest_point_on_rect(rect_center: Point2, half_extents: Vec2, point: Point2) -> Point2 {
    let min = rect_center - half_extents;
    let max = rect_center + half_extents;
    Point2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
}

/// Test whether a circle intersects an axis-aligned rectangle
///
/// True iff the distance from the circle center to the nearest point on the
/// rectangle is strictly less than the radius. Near a corner this follows
/// the true circular boundary, where a bounding-box test would report a
/// phantom hit.
pub fn circle_intersects_rect(
    circle_center: Point2,
    radius: f32,
    rect_center: Point2,
    half_extents: Vec2,
) -> bool {
    let closest = closest_point_on_rect(rect_center, half_extents, circle_center);
    distance_squared(circle_center, closest) < radius * radius
}

/// Test whether two circles overlap
///
/// True iff the center distance is strictly less than the sum of the radii.
pub fn circles_overlap(center_a: Point2, radius_a: f32, center_b: Point2, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    distance_squared(center_a, center_b) < radius_sum * radius_sum
}
