//! Game loop driver
//!
//! `GameLoop` pairs the pure simulation with the one resource the game
//! holds: the periodic tick timer. The timer is an explicit owned value,
//! created by `start`/`restart` and dropped by `stop` and by the game-over
//! transition, so no callback outlives the run that armed it.
//!
//! Everything runs on one thread: the driver blocks on `wait_for_tick`,
//! then calls `tick`, and input events are delivered between ticks on the
//! same thread. There is no locking and no reentrancy.

use std::time::{Duration, Instant};

use crate::consts::SIM_DT;
use crate::sim::{self, GameState};

/// Single-threaded deadline timer for the fixed tick interval.
///
/// Deadlines advance by a fixed step from the previous deadline, not from
/// wake-up time, so a late wake does not stretch the schedule.
#[derive(Debug)]
pub struct FixedTimer {
    interval: Duration,
    next: Instant,
}

impl FixedTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    /// Block until the next tick deadline, then schedule the one after.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        self.next += self.interval;
    }
}

/// Owns all simulation state and the timer driving it.
///
/// The rendering side reads state through [`GameLoop::state`] or
/// [`GameLoop::snapshot`]; nothing outside this type mutates the sim.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    timer: Option<FixedTimer>,
}

impl GameLoop {
    /// New loop in the fresh-run state, timer not yet armed.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            timer: None,
        }
    }

    /// Arm the tick timer. No-op if already armed.
    pub fn start(&mut self) {
        if self.timer.is_none() {
            self.timer = Some(FixedTimer::new(Duration::from_secs_f32(SIM_DT)));
            log::info!("game started");
        }
    }

    /// Disarm the tick timer, releasing the only held resource.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    /// True while the timer is armed.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Block until the next tick is due. Returns false if the timer is
    /// disarmed, which is the driver's signal to stop delivering ticks.
    pub fn wait_for_tick(&mut self) -> bool {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.wait();
                true
            }
            None => false,
        }
    }

    /// Advance one fixed step. Entering game over disarms the timer.
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
        if self.state.is_game_over() && self.timer.is_some() {
            self.stop();
            log::info!(
                "game over at tick {}, score {}",
                self.state.time_ticks,
                self.state.score
            );
        }
    }

    /// Deliver a tap: begin a jump unless airborne or the run is over.
    pub fn jump(&mut self) {
        self.state.jump();
    }

    /// Reset to the fresh-run state and re-arm the timer. Valid in any state.
    pub fn restart(&mut self) {
        self.state.reset();
        self.stop();
        self.start();
        log::info!("game restarted");
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Immutable per-frame snapshot for the rendering side.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Phase;

    fn run_until_game_over(game: &mut GameLoop) {
        while !game.state().is_game_over() {
            game.tick();
        }
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut game = GameLoop::new();
        assert!(!game.is_running());
        game.start();
        assert!(game.is_running());
        game.start();
        assert!(game.is_running());
        game.stop();
        assert!(!game.is_running());
    }

    #[test]
    fn test_game_over_disarms_timer() {
        let mut game = GameLoop::new();
        game.start();
        run_until_game_over(&mut game);
        assert!(!game.is_running());
        assert!(!game.wait_for_tick());
    }

    #[test]
    fn test_restart_resets_and_rearms() {
        let mut game = GameLoop::new();
        game.start();
        game.jump();
        run_until_game_over(&mut game);

        game.restart();
        assert!(game.is_running());
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.state().phase, Phase::Running);
    }

    #[test]
    fn test_restart_valid_mid_run() {
        let mut game = GameLoop::new();
        game.start();
        for _ in 0..10 {
            game.tick();
        }
        game.restart();
        assert_eq!(game.state(), &GameState::new());
        assert!(game.is_running());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = GameLoop::new();
        game.start();
        let snapshot = game.snapshot();
        game.tick();
        assert_eq!(snapshot.time_ticks, 0);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_timer_paces_ticks() {
        let mut timer = FixedTimer::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..4 {
            timer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
