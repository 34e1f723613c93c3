//! Game entities: the draggable player disc, the wall set, and the goal
//!
//! The player disc is the only thing that moves; walls and the goal are
//! built once from configuration and never change during play.

use log::debug;

use crate::geometry;
use crate::landmarks::PinchSample;
use crate::math::{Point2, Vec2};

/// Anything the pinch gesture can pick up and drag
///
/// Decouples the gesture source from the entity being dragged: the same
/// per-frame update drives any implementor.
pub trait Draggable {
    /// Offer this frame's pinch sample
    ///
    /// Returns true when the entity is now grabbed (and has snapped to the
    /// grab point); a too-wide pinch lets go without moving the entity.
    fn try_grab(&mut self, sample: &PinchSample, threshold: f32) -> bool;

    /// Let go without moving
    fn release(&mut self);

    /// Where the entity currently sits
    fn current_position(&self) -> Point2;
}

/// Per-frame drag update for any draggable entity
///
/// Skips the frame entirely when no hand was tracked, leaving both the
/// position and the grab flag exactly as they were.
pub fn update_drag<D: Draggable>(entity: &mut D, hand: Option<&PinchSample>, threshold: f32) {
    if let Some(sample) = hand {
        entity.try_grab(sample, threshold);
    }
}

/// The player avatar: a disc that follows the index fingertip while pinched
#[derive(Debug, Clone)]
pub struct PlayerDisc {
    /// Starting position, restored on reset
    start: Point2,
    /// Current position in pixel coordinates
    position: Point2,
    /// Disc radius, constant for the life of the game
    radius: f32,
    /// Whether the pinch gesture currently holds the disc
    grabbed: bool,
}

impl PlayerDisc {
    /// Create a disc at its starting position
    pub fn new(start: Point2, radius: f32) -> Self {
        Self {
            start,
            position: start,
            radius,
            grabbed: false,
        }
    }

    /// Current position
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Disc radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether the pinch currently holds the disc
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// The position the disc starts from
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Put the disc back at its start and let go of it
    pub fn reset(&mut self) {
        self.position = self.start;
        self.grabbed = false;
    }
}

impl Draggable for PlayerDisc {
    fn try_grab(&mut self, sample: &PinchSample, threshold: f32) -> bool {
        if sample.is_pinched(threshold) {
            if !self.grabbed {
                debug!(
                    "pinch closed at ({:.1}, {:.1}), disc grabbed",
                    sample.index_tip.x, sample.index_tip.y
                );
            }
            self.grabbed = true;
            self.position = sample.index_tip;
        } else {
            if self.grabbed {
                debug!(
                    "pinch opened, disc released at ({:.1}, {:.1})",
                    self.position.x, self.position.y
                );
            }
            self.grabbed = false;
        }
        self.grabbed
    }

    fn release(&mut self) {
        self.grabbed = false;
    }

    fn current_position(&self) -> Point2 {
        self.position
    }
}

/// A static axis-aligned rectangular obstacle
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    /// Center in pixel coordinates
    pub center: Point2,
    /// Half width and half height
    pub half_extents: Vec2,
}

impl Wall {
    /// Create a wall from its center and full size
    pub fn new(center: Point2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Whether the disc currently clips this wall
    ///
    /// Stateless; safe to call any number of times per frame.
    pub fn collides_with(&self, disc: &PlayerDisc) -> bool {
        geometry::circle_intersects_rect(
            disc.position(),
            disc.radius(),
            self.center,
            self.half_extents,
        )
    }
}

/// The target disc; reaching it wins the game
#[derive(Debug, Clone, Copy)]
pub struct Goal {
    /// Center in pixel coordinates
    pub center: Point2,
    /// Disc radius
    pub radius: f32,
}

impl Goal {
    /// Create a goal disc
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether the player disc overlaps the goal
    pub fn reached_by(&self, disc: &PlayerDisc) -> bool {
        geometry::circles_overlap(self.center, self.radius, disc.position(), disc.radius())
    }
}
