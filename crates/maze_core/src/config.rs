//! Maze configuration
//!
//! Any config type that is `Serialize + Deserialize + Default` can be loaded
//! from and saved to TOML or RON files, picked by extension. Every field of
//! [`MazeConfig`] falls back to the shipped maze layout, so a config file
//! only needs to spell out what it changes.

pub use serde::{Deserialize, Serialize};

use log::warn;

use crate::draw::Color;
use crate::entities::{Goal, PlayerDisc, Wall};
use crate::geometry;
use crate::math::{Point2, Vec2};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
        } else {
            Err(ConfigError::UnsupportedFormat {
                path: path.to_string(),
            })
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_string(),
            });
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: String,
        /// Underlying parser message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {path}")]
    UnsupportedFormat {
        /// Offending file path
        path: String,
    },

    /// A wall entry that cannot form a rectangle
    #[error("Invalid wall {index}: {reason}")]
    InvalidWall {
        /// Position of the wall in the configured list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A player disc that cannot be placed
    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    /// A goal disc that cannot be placed
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// A pinch threshold no gesture could ever satisfy
    #[error("Invalid pinch threshold: {0}")]
    InvalidThreshold(String),
}

impl ConfigError {
    fn parse(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Frame dimensions the maze is laid out against
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Player disc placement and look
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting position in pixel coordinates
    pub start: (f32, f32),
    /// Disc radius in pixels
    pub radius: f32,
    /// Fill color
    pub color: Color,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: (640.0, 360.0),
            radius: 30.0,
            color: Color::new(255, 0, 0),
        }
    }
}

impl PlayerConfig {
    /// Build the player disc this entry describes
    pub fn to_disc(&self) -> PlayerDisc {
        PlayerDisc::new(Point2::new(self.start.0, self.start.1), self.radius)
    }
}

/// Goal disc placement and look
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    /// Center in pixel coordinates
    pub center: (f32, f32),
    /// Disc radius in pixels
    pub radius: f32,
    /// Fill color
    pub color: Color,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            center: (1100.0, 100.0),
            radius: 40.0,
            color: Color::new(0, 255, 0),
        }
    }
}

impl GoalConfig {
    /// Build the goal disc this entry describes
    pub fn to_goal(&self) -> Goal {
        Goal::new(Point2::new(self.center.0, self.center.1), self.radius)
    }
}

/// One rectangular wall
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WallConfig {
    /// Center in pixel coordinates
    pub center: (f32, f32),
    /// Full width and height in pixels
    pub size: (f32, f32),
}

impl WallConfig {
    /// Build the wall entity this entry describes
    pub fn to_wall(&self) -> Wall {
        Wall::new(
            Point2::new(self.center.0, self.center.1),
            Vec2::new(self.size.0, self.size.1),
        )
    }
}

/// A status banner shown when the game ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Message text
    pub text: String,
    /// Anchor point in pixel coordinates
    pub anchor: (f32, f32),
    /// Relative text scale
    pub scale: f32,
    /// Text color
    pub color: Color,
}

/// The two end-of-game banners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Shown after a wall collision
    pub defeat: BannerConfig,
    /// Shown after reaching the goal
    pub victory: BannerConfig,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            defeat: BannerConfig {
                text: "GAME OVER! Press 'R' to Restart".to_string(),
                anchor: (350.0, 350.0),
                scale: 1.5,
                color: Color::new(255, 0, 0),
            },
            victory: BannerConfig {
                text: "YOU WIN! Press 'R' to Restart".to_string(),
                anchor: (400.0, 350.0),
                scale: 1.5,
                color: Color::new(0, 255, 0),
            },
        }
    }
}

/// Complete maze game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Fingertip distance below which a pinch counts as a grab, in pixels
    pub pinch_threshold: f32,
    /// Frame the maze is laid out against
    pub frame: FrameConfig,
    /// Wall color shared by every wall
    pub wall_color: Color,
    /// Player disc
    pub player: PlayerConfig,
    /// Goal disc
    pub goal: GoalConfig,
    /// End-of-game banners
    pub messages: MessagesConfig,
    /// Static wall layout
    pub walls: Vec<WallConfig>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 30.0,
            frame: FrameConfig::default(),
            wall_color: Color::new(5, 204, 210),
            player: PlayerConfig::default(),
            goal: GoalConfig::default(),
            messages: MessagesConfig::default(),
            walls: default_walls(),
        }
    }
}

impl Config for MazeConfig {}

/// The wall layout the game ships with: twelve 100x100 blocks on three
/// rows, with gaps that leave exactly one winding route to the goal
fn default_walls() -> Vec<WallConfig> {
    const CENTERS: [(f32, f32); 12] = [
        (200.0, 200.0),
        (400.0, 200.0),
        (600.0, 200.0),
        (800.0, 200.0),
        (1000.0, 200.0),
        (200.0, 400.0),
        (400.0, 400.0),
        (800.0, 400.0),
        (1000.0, 400.0),
        (200.0, 600.0),
        (600.0, 600.0),
        (1000.0, 600.0),
    ];
    CENTERS
        .iter()
        .map(|&center| WallConfig {
            center,
            size: (100.0, 100.0),
        })
        .collect()
}

impl MazeConfig {
    /// Check every wall, the player disc, the goal disc, and the threshold
    ///
    /// Runs at game construction; a malformed entry aborts startup instead
    /// of producing a maze that silently misbehaves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, wall) in self.walls.iter().enumerate() {
            if !wall.center.0.is_finite() || !wall.center.1.is_finite() {
                return Err(ConfigError::InvalidWall {
                    index,
                    reason: format!(
                        "center ({}, {}) is not finite",
                        wall.center.0, wall.center.1
                    ),
                });
            }
            if !wall.size.0.is_finite()
                || !wall.size.1.is_finite()
                || wall.size.0 <= 0.0
                || wall.size.1 <= 0.0
            {
                return Err(ConfigError::InvalidWall {
                    index,
                    reason: format!(
                        "size ({}, {}) must be positive and finite",
                        wall.size.0, wall.size.1
                    ),
                });
            }
        }

        if !self.player.start.0.is_finite() || !self.player.start.1.is_finite() {
            return Err(ConfigError::InvalidPlayer(format!(
                "start ({}, {}) is not finite",
                self.player.start.0, self.player.start.1
            )));
        }
        if !self.player.radius.is_finite() || self.player.radius <= 0.0 {
            return Err(ConfigError::InvalidPlayer(format!(
                "radius {} must be positive and finite",
                self.player.radius
            )));
        }

        if !self.goal.center.0.is_finite() || !self.goal.center.1.is_finite() {
            return Err(ConfigError::InvalidGoal(format!(
                "center ({}, {}) is not finite",
                self.goal.center.0, self.goal.center.1
            )));
        }
        if !self.goal.radius.is_finite() || self.goal.radius <= 0.0 {
            return Err(ConfigError::InvalidGoal(format!(
                "radius {} must be positive and finite",
                self.goal.radius
            )));
        }

        if !self.pinch_threshold.is_finite() || self.pinch_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(format!(
                "{} must be positive and finite",
                self.pinch_threshold
            )));
        }

        // Not fatal: the game simply ends on its first frame, exactly as it
        // would for a layout that boxes the start in
        let start = Point2::new(self.player.start.0, self.player.start.1);
        for (index, wall) in self.walls.iter().enumerate() {
            let center = Point2::new(wall.center.0, wall.center.1);
            let half = Vec2::new(wall.size.0 * 0.5, wall.size.1 * 0.5);
            if geometry::circle_intersects_rect(start, self.player.radius, center, half) {
                warn!(
                    "player start sits inside wall {}; the game will end immediately",
                    index
                );
            }
        }

        Ok(())
    }

    /// Override the wall layout
    pub fn with_walls(mut self, walls: Vec<WallConfig>) -> Self {
        self.walls = walls;
        self
    }

    /// Override the pinch threshold
    pub fn with_pinch_threshold(mut self, threshold: f32) -> Self {
        self.pinch_threshold = threshold;
        self
    }

    /// Override the player start and radius
    pub fn with_player(mut self, start: (f32, f32), radius: f32) -> Self {
        self.player.start = start;
        self.player.radius = radius;
        self
    }

    /// Override the goal placement
    pub fn with_goal(mut self, center: (f32, f32), radius: f32) -> Self {
        self.goal.center = center;
        self.goal.radius = radius;
        self
    }
}
