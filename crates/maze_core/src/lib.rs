//! # Maze Core
//!
//! The headless core of a hand-tracked maze game: a draggable player disc,
//! axis-aligned walls, a goal disc, and a per-frame step that turns pinch
//! gestures into movement, collision outcomes, and a draw list.
//!
//! ## Features
//!
//! - **Pinch dragging**: a close index/middle fingertip pair grabs the disc
//!   and snaps it to the index tip; spreading the fingers drops it in place
//! - **Exact collision**: circle-vs-rectangle via closest-point distance, so
//!   grazing a wall corner counts only when the disc truly overlaps it
//! - **Frame stepping**: one `step` call per camera frame, returning the
//!   full draw list in paint order every time
//! - **Configurable layouts**: wall sets, discs, colors, and banners load
//!   from TOML or RON files with sensible defaults for every field
//!
//! ## Quick Start
//!
//! ```rust
//! use maze_core::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let mut game = MazeGame::new(MazeConfig::default())?;
//!
//!     // One tracked frame: fingertips close together over the disc
//!     let sample = PinchSample::new(Point2::new(640.0, 360.0), Point2::new(648.0, 366.0));
//!     let commands = game.step(&FrameInput::pinch(sample));
//!
//!     assert!(game.status().is_playing());
//!     assert_eq!(commands.len(), 14); // 12 walls, the goal, the player
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod draw;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod landmarks;
pub mod math;

/// Common imports for game hosts
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, MazeConfig, WallConfig},
        draw::{Color, DrawCommand},
        entities::{Draggable, Goal, PlayerDisc, Wall},
        game::{FrameInput, GameSnapshot, GameStatus, MazeGame},
        landmarks::{HandFrame, PinchSample},
        math::{Point2, Vec2},
    };
}
