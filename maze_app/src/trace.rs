//! Recorded fingertip traces for headless replay
//!
//! A trace is a RON list of frames, each optionally carrying the two
//! tracked fingertips and a reset flag. Missing fields default to "not
//! tracked", so sparse traces stay short: `()` is a perfectly good idle
//! frame.

use maze_core::prelude::{FrameInput, Point2};
use serde::Deserialize;
use thiserror::Error;

/// Problems loading a trace file
#[derive(Debug, Error)]
pub enum TraceError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The contents were not a valid trace
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: String,
        /// Underlying parser message
        message: String,
    },
}

/// One recorded camera frame
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TraceFrame {
    /// Index fingertip in pixel coordinates, if tracked
    pub index_tip: Option<(f32, f32)>,
    /// Middle fingertip in pixel coordinates, if tracked
    pub middle_tip: Option<(f32, f32)>,
    /// Whether a restart was requested on this frame
    pub reset: bool,
}

impl TraceFrame {
    /// Convert the recorded frame into game input
    ///
    /// A frame with only one tip tracked counts as no hand, same as the
    /// live tracker dropping a landmark.
    pub fn to_input(self) -> FrameInput {
        FrameInput::from_fingertips(
            self.index_tip.map(|(x, y)| Point2::new(x, y)),
            self.middle_tip.map(|(x, y)| Point2::new(x, y)),
            self.reset,
        )
    }
}

/// Load a trace from a `.ron` file
pub fn load(path: &str) -> Result<Vec<TraceFrame>, TraceError> {
    let contents = std::fs::read_to_string(path)?;
    ron::from_str(&contents).map_err(|e| TraceError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sparse_trace() {
        let text = r#"[
    (index_tip: Some((700.0, 360.0)), middle_tip: Some((708.0, 366.0))),
    (reset: true),
    (),
]"#;
        let frames: Vec<TraceFrame> = ron::from_str(text).unwrap();
        assert_eq!(frames.len(), 3);

        let pinch = frames[0].to_input();
        assert!(pinch.hand.is_some());
        assert!(!pinch.reset_requested);

        assert!(frames[1].to_input().reset_requested);
        assert!(frames[1].to_input().hand.is_none());

        let idle = frames[2].to_input();
        assert!(idle.hand.is_none());
        assert!(!idle.reset_requested);
    }

    #[test]
    fn test_half_tracked_frame_has_no_hand() {
        let frame: TraceFrame = ron::from_str("(index_tip: Some((50.0, 50.0)))").unwrap();
        assert!(frame.to_input().hand.is_none());
    }

    #[test]
    fn test_shipped_trace_wins_the_default_maze() {
        use maze_core::prelude::{GameStatus, MazeConfig, MazeGame};

        // Unit tests run from the package root, one level below the workspace
        let frames = load("../resources/traces/win_run.ron").expect("shipped trace should load");
        assert_eq!(frames.len(), 8);

        let mut game = MazeGame::new(MazeConfig::default()).unwrap();
        for frame in &frames {
            game.step(&frame.to_input());
        }
        assert_eq!(game.status(), GameStatus::Won);
    }
}
