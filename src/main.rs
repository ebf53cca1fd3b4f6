//! Box Runner entry point
//!
//! Headless demo driver: runs the fixed-rate loop in real time with a
//! scripted autopilot, showing a full crash run and a scoring run.

use box_runner::GameLoop;
use box_runner::consts::{OBSTACLE_SPEED, PLAYER_LANE_X};

/// Autopilot jump trigger: horizontal gap to the nearest approaching
/// obstacle at which a jump clears it. The jump arc gives at least 60
/// units of clearance from tick 5 through tick 31, and from 90 units out
/// the obstacle spends ticks 10..26 inside the collision window.
const JUMP_TRIGGER_DISTANCE: f32 = 90.0;

/// Jump whenever an approaching obstacle is close enough that waiting
/// would be fatal. The no-double-jump rule makes this safe to call every
/// tick.
fn autopilot(game: &mut GameLoop) {
    let player_x = PLAYER_LANE_X;
    let danger = game.state().obstacles.iter().any(|o| {
        let gap = o.pos.x - player_x;
        gap > 0.0 && gap <= JUMP_TRIGGER_DISTANCE && gap > OBSTACLE_SPEED
    });
    if danger {
        game.jump();
    }
}

fn main() {
    env_logger::init();
    log::info!("Box Runner starting");

    let mut game = GameLoop::new();
    game.start();

    // Run 1: no input. The obstacle reaches the player and ends the run;
    // the loop disarms its own timer.
    while game.wait_for_tick() {
        game.tick();
    }
    println!(
        "run 1 (no input): game over at tick {}, score {}",
        game.state().time_ticks,
        game.state().score
    );

    // Run 2: autopilot until three obstacles are cleared.
    game.restart();
    while game.wait_for_tick() {
        autopilot(&mut game);
        game.tick();
        if game.state().score >= 3 {
            game.stop();
        }
    }
    println!(
        "run 2 (autopilot): survived to tick {}, score {}",
        game.state().time_ticks,
        game.state().score
    );

    let snapshot = game.snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => println!("final state: {json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
