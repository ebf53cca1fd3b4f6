//! Box Runner - a minimal jump-over-obstacles arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, game state)
//! - `runner`: `GameLoop` - the sim plus the fixed-rate timer that drives it

pub mod runner;
pub mod sim;

pub use runner::GameLoop;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied by a jump (negative = up, screen coordinates)
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// Ground y coordinate; the player rests here when not airborne
    pub const GROUND_LEVEL: f32 = 300.0;

    /// Player's fixed lane x position
    pub const PLAYER_LANE_X: f32 = 100.0;

    /// Obstacle scroll speed in units per tick
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Initial obstacle spawn x
    pub const OBSTACLE_SPAWN_X: f32 = 600.0;
    /// Obstacles crossing left of this are recycled
    pub const DESPAWN_X: f32 = -20.0;
    /// Recycled obstacles reappear at this x
    pub const RESPAWN_X: f32 = 800.0;

    /// Horizontal proximity threshold for a hit
    pub const COLLISION_HALF_WIDTH: f32 = 40.0;
    /// Vertical proximity threshold for a hit
    pub const COLLISION_HALF_HEIGHT: f32 = 60.0;
}
