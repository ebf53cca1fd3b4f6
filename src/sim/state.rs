//! Game state and core simulation types
//!
//! Everything the rendering side observes lives here, in one snapshot-able bag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active run; ticks advance the world
    Running,
    /// Run ended on a collision; only `restart` leaves this phase
    GameOver,
}

/// The player rectangle
///
/// `pos.x` never changes; `pos.y` and `velocity` vary only during a jump.
/// Whenever `is_jumping` is false, `pos.y == GROUND_LEVEL` and `velocity == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical speed in units per tick (negative = up)
    pub velocity: f32,
    pub is_jumping: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_LANE_X, GROUND_LEVEL),
            velocity: 0.0,
            is_jumping: false,
        }
    }

    /// True while the player is off the ground
    pub fn airborne(&self) -> bool {
        self.is_jumping
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A scrolling obstacle
///
/// Obstacles are recycled, never destroyed: on crossing the despawn
/// threshold the x coordinate snaps back to `RESPAWN_X`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
}

impl Obstacle {
    pub fn at(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_LEVEL),
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: Phase,
    /// Player rectangle
    pub player: Player,
    /// Obstacles in insertion order; the tick pass iterates them in order
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run: player resting on the ground, one obstacle approaching
    pub fn new() -> Self {
        Self::with_obstacles(&[OBSTACLE_SPAWN_X])
    }

    /// Fresh run with obstacles at the given x positions
    pub fn with_obstacles(xs: &[f32]) -> Self {
        Self {
            phase: Phase::Running,
            player: Player::new(),
            obstacles: xs.iter().copied().map(Obstacle::at).collect(),
            score: 0,
            time_ticks: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Begin a jump. Dropped silently while airborne or after game over;
    /// there is no double jump and no queued jump.
    pub fn jump(&mut self) {
        if self.player.is_jumping || self.is_game_over() {
            return;
        }
        self.player.is_jumping = true;
        self.player.velocity = JUMP_IMPULSE;
    }

    /// Reset everything to the fresh-run values, keeping the obstacle count.
    pub fn reset(&mut self) {
        let count = self.obstacles.len().max(1);
        *self = Self::new();
        // Extra obstacles respawn at the recycle point so they re-enter
        // from the right edge like a recycled obstacle would.
        while self.obstacles.len() < count {
            self.obstacles.push(Obstacle::at(RESPAWN_X));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
