//! The per-frame game state machine
//!
//! One [`MazeGame`] value owns the player disc, the static walls, the goal,
//! and the current status. [`MazeGame::step`] is the whole per-frame
//! contract: feed it the frame's input, get the draw list back, read the
//! status off the game. Nothing else mutates the world.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{BannerConfig, ConfigError, MazeConfig, WallConfig};
use crate::draw::DrawCommand;
use crate::entities::{update_drag, Goal, PlayerDisc, Wall};
use crate::landmarks::PinchSample;
use crate::math::Point2;

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The disc can be grabbed and moved; collisions are live
    Playing,
    /// The disc clipped a wall; the world is frozen until reset
    GameOver,
    /// The disc reached the goal; the world is frozen until reset
    Won,
}

impl GameStatus {
    /// Whether the world still reacts to movement
    pub fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Whether the game has ended, either way
    pub fn is_terminal(self) -> bool {
        !self.is_playing()
    }
}

/// Everything the outside world tells the game about one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// This frame's pinch fingertips, if a hand was tracked
    pub hand: Option<PinchSample>,
    /// An external restart request, typically a keypress in the host
    pub reset_requested: bool,
}

impl FrameInput {
    /// A frame with no hand and no reset
    pub fn idle() -> Self {
        Self {
            hand: None,
            reset_requested: false,
        }
    }

    /// A frame carrying a tracked pinch sample
    pub fn pinch(sample: PinchSample) -> Self {
        Self {
            hand: Some(sample),
            reset_requested: false,
        }
    }

    /// A frame carrying only a restart request
    pub fn reset() -> Self {
        Self {
            hand: None,
            reset_requested: true,
        }
    }

    /// Build a frame from individually tracked fingertips
    ///
    /// The pair only counts as a usable hand when both tips are present;
    /// anything less behaves like no hand at all.
    pub fn from_fingertips(
        index_tip: Option<Point2>,
        middle_tip: Option<Point2>,
        reset_requested: bool,
    ) -> Self {
        let hand = match (index_tip, middle_tip) {
            (Some(index), Some(middle)) => Some(PinchSample::new(index, middle)),
            _ => None,
        };
        Self {
            hand,
            reset_requested,
        }
    }
}

/// A compact read-only view of the game for hosts and logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Frames stepped since the game was built; resets do not rewind it
    pub frame: u64,
    /// Current status
    pub status: GameStatus,
    /// Player disc position
    pub position: Point2,
    /// Player disc radius
    pub radius: f32,
    /// Whether the pinch currently holds the disc
    pub grabbed: bool,
}

/// The maze game core
///
/// Built once from a validated [`MazeConfig`]; all mutation happens in
/// [`MazeGame::step`] and [`MazeGame::reset`].
#[derive(Debug, Clone)]
pub struct MazeGame {
    config: MazeConfig,
    player: PlayerDisc,
    walls: Vec<Wall>,
    goal: Goal,
    status: GameStatus,
    frame: u64,
}

impl MazeGame {
    /// Build a game from a configuration
    ///
    /// Fails fast on malformed walls, player, goal, or threshold rather
    /// than starting a maze that cannot be played.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let walls: Vec<Wall> = config.walls.iter().map(WallConfig::to_wall).collect();
        let player = config.player.to_disc();
        let goal = config.goal.to_goal();

        info!(
            "maze ready: {} walls, player at ({:.0}, {:.0}), goal at ({:.0}, {:.0})",
            walls.len(),
            player.position().x,
            player.position().y,
            goal.center.x,
            goal.center.y
        );

        Ok(Self {
            config,
            player,
            walls,
            goal,
            status: GameStatus::Playing,
            frame: 0,
        })
    }

    /// Advance one frame
    ///
    /// Applies any reset first, then the grab update (only while playing,
    /// and only when a hand is present), then the wall and goal checks, and
    /// finally rebuilds the draw list. Walls are tested before the goal, so
    /// a frame that somehow triggers both ends in defeat.
    pub fn step(&mut self, input: &FrameInput) -> Vec<DrawCommand> {
        self.frame += 1;

        if input.reset_requested {
            self.reset();
        }

        if self.status.is_playing() {
            update_drag(
                &mut self.player,
                input.hand.as_ref(),
                self.config.pinch_threshold,
            );
            self.update_status();
        }

        self.draw_commands()
    }

    /// Put the world back to its starting state
    ///
    /// Idempotent and callable at any time: the disc returns to its start,
    /// the grab flag clears, and play resumes.
    pub fn reset(&mut self) {
        self.player.reset();
        self.status = GameStatus::Playing;
        debug!("frame {}: world reset to start", self.frame);
    }

    /// Current status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player disc
    pub fn player(&self) -> &PlayerDisc {
        &self.player
    }

    /// The static wall set
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The goal disc
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// The configuration the game was built from
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Frames stepped since the game was built
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read-only view for hosts and logs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            frame: self.frame,
            status: self.status,
            position: self.player.position(),
            radius: self.player.radius(),
            grabbed: self.player.is_grabbed(),
        }
    }

    /// Walls first, first hit wins; the goal only counts on a clean frame
    fn update_status(&mut self) {
        for (index, wall) in self.walls.iter().enumerate() {
            if wall.collides_with(&self.player) {
                info!("frame {}: disc clipped wall {}, game over", self.frame, index);
                self.status = GameStatus::GameOver;
                return;
            }
        }

        if self.goal.reached_by(&self.player) {
            info!("frame {}: disc reached the goal, game won", self.frame);
            self.status = GameStatus::Won;
        }
    }

    fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.walls.len() + 3);

        for wall in &self.walls {
            commands.push(DrawCommand::Rect {
                center: wall.center,
                half_extents: wall.half_extents,
                color: self.config.wall_color,
            });
        }

        commands.push(DrawCommand::Circle {
            center: self.goal.center,
            radius: self.goal.radius,
            color: self.config.goal.color,
        });

        commands.push(DrawCommand::Circle {
            center: self.player.position(),
            radius: self.player.radius(),
            color: self.config.player.color,
        });

        match self.status {
            GameStatus::Playing => {}
            GameStatus::GameOver => commands.push(banner(&self.config.messages.defeat)),
            GameStatus::Won => commands.push(banner(&self.config.messages.victory)),
        }

        commands
    }
}

fn banner(config: &BannerConfig) -> DrawCommand {
    DrawCommand::Text {
        text: config.text.clone(),
        anchor: Point2::new(config.anchor.0, config.anchor.1),
        scale: config.scale,
        color: config.color,
    }
}
