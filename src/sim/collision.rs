//! Player/obstacle proximity test
//!
//! Axis-aligned bounding-box approximation: a hit is independent closeness
//! on each axis, strict on both thresholds.

use glam::Vec2;

use crate::consts::{COLLISION_HALF_HEIGHT, COLLISION_HALF_WIDTH};

/// True when the obstacle is within the collision box around the player.
pub fn player_hits_obstacle(player_pos: Vec2, obstacle_pos: Vec2) -> bool {
    (obstacle_pos.x - player_pos.x).abs() < COLLISION_HALF_WIDTH
        && (obstacle_pos.y - player_pos.y).abs() < COLLISION_HALF_HEIGHT
}
