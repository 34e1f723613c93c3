//! Hand landmark input
//!
//! The upstream hand tracker reports up to 21 landmarks per hand in the
//! MediaPipe hand model convention, already projected to pixel coordinates.
//! Only the two fingertips driving the pinch gesture matter to the game;
//! everything else is carried opaquely.

use crate::math::{distance, Point2};

/// Index finger tip position in the 21-point hand model
pub const INDEX_FINGER_TIP: usize = 8;

/// Middle finger tip position in the 21-point hand model
pub const MIDDLE_FINGER_TIP: usize = 12;

/// Shortest landmark list that still contains both pinch fingertips
pub const MIN_LANDMARKS: usize = MIDDLE_FINGER_TIP + 1;

/// One frame of tracked hand landmarks in pixel coordinates
#[derive(Debug, Clone, Default)]
pub struct HandFrame {
    points: Vec<Point2>,
}

impl HandFrame {
    /// Create a frame from tracker output
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of landmarks in this frame
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the tracker reported nothing at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Landmark at `index`, if the frame has one
    pub fn point(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    /// Extract the pinch fingertips
    ///
    /// Returns None when the frame holds fewer than [`MIN_LANDMARKS`]
    /// points; the grab update treats that the same as no hand at all.
    pub fn pinch_sample(&self) -> Option<PinchSample> {
        if self.points.len() < MIN_LANDMARKS {
            return None;
        }
        Some(PinchSample::new(
            self.points[INDEX_FINGER_TIP],
            self.points[MIDDLE_FINGER_TIP],
        ))
    }
}

/// The two fingertips that define the pinch gesture for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSample {
    /// Index fingertip in pixel coordinates; doubles as the grab point
    pub index_tip: Point2,
    /// Middle fingertip in pixel coordinates
    pub middle_tip: Point2,
}

impl PinchSample {
    /// Create a sample from the two fingertips
    pub fn new(index_tip: Point2, middle_tip: Point2) -> Self {
        Self {
            index_tip,
            middle_tip,
        }
    }

    /// Distance between the two fingertips
    pub fn spread(&self) -> f32 {
        distance(self.index_tip, self.middle_tip)
    }

    /// Whether the fingertips sit close enough to count as a pinch
    pub fn is_pinched(&self, threshold: f32) -> bool {
        self.spread() < threshold
    }
}
