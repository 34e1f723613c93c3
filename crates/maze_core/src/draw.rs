//! Draw commands emitted by the game each frame
//!
//! The core never touches a framebuffer; it hands the rendering collaborator
//! an immutable list of primitives instead. List order is draw order: walls
//! first, then the goal disc, then the player disc, then any status banner
//! on top.

use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vec2};

/// An RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single drawing primitive for the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    Rect {
        /// Center in pixel coordinates
        center: Point2,
        /// Half width and half height
        half_extents: Vec2,
        /// Fill color
        color: Color,
    },

    /// Filled circle
    Circle {
        /// Center in pixel coordinates
        center: Point2,
        /// Radius in pixels
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Status banner text
    Text {
        /// The message to show
        text: String,
        /// Anchor point in pixel coordinates
        anchor: Point2,
        /// Relative text scale
        scale: f32,
        /// Text color
        color: Color,
    },
}
