//! Fixed timestep simulation tick
//!
//! Advances the run deterministically one step at a time. Player physics
//! settle before the obstacle pass so a landing and a collision in the same
//! tick are judged against the grounded position.

use super::collision::player_hits_obstacle;
use super::state::{GameState, Phase};
use crate::consts::*;

/// Advance the game state by one fixed timestep.
///
/// A no-op once the run is over: no physics, no collision re-check, no
/// recycling. The caller decides when to stop delivering ticks.
pub fn tick(state: &mut GameState) {
    if state.phase == Phase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Player physics: integrate, then clamp to the ground. The clamp wins
    // over any overshoot, so there is no bounce.
    if state.player.is_jumping {
        state.player.velocity += GRAVITY;
        state.player.pos.y += state.player.velocity;

        if state.player.pos.y >= GROUND_LEVEL {
            state.player.pos.y = GROUND_LEVEL;
            state.player.velocity = 0.0;
            state.player.is_jumping = false;
        }
    }

    // Obstacle pass, in insertion order. A collision flips the phase but
    // does not cut the loop short: the remaining obstacles still move and
    // recycle this tick, and a recycle still scores.
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= OBSTACLE_SPEED;

        if player_hits_obstacle(state.player.pos, obstacle.pos)
            && state.phase != Phase::GameOver
        {
            state.phase = Phase::GameOver;
            log::debug!(
                "collision at tick {} (obstacle x={:.1}), final score {}",
                state.time_ticks,
                obstacle.pos.x,
                state.score
            );
        }

        // Strict comparison: an obstacle exactly on the threshold is kept
        // for one more tick rather than skipped or double-recycled.
        if obstacle.pos.x < DESPAWN_X {
            obstacle.pos.x = RESPAWN_X;
            state.score += 1;
        }
    }
}
