//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (obstacle insertion order)
//! - No timers, rendering, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::player_hits_obstacle;
pub use state::{GameState, Obstacle, Phase, Player};
pub use tick::tick;
