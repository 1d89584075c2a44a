use std::collections::VecDeque;
use std::time::{Duration, Instant};

use macroquad::prelude::Color;
use tracing::{debug, info};

use super::scheduler::{Scheduler, Speed};
use crate::domain::GridEngine;
use crate::rendering::Palette;

/// Everything that may change the session. Menu clicks, key presses and
/// the timer all go through [`GameState::submit`] and are applied in order
/// on the frame loop, so no two mutations ever overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Reseed the board randomly
    New,
    /// Pause if running, resume if paused
    StopStart,
    SetSpeed(Speed),
    SetLiveColor(Option<Color>),
    SetDeadColor(Option<Color>),
    Exit,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub engine: GridEngine,
    pub palette: Palette,
    pub scheduler: Scheduler,
    pub speed: Speed,
    pub exit_requested: bool,
    /// Time spent in the last batch of steps
    pub last_step_time_ms: f32,
    queue: VecDeque<Command>,
}

impl GameState {
    /// Wrap a seeded engine. The timer starts stopped.
    pub fn new(engine: GridEngine) -> Self {
        let speed = Speed::default();
        Self {
            engine,
            palette: Palette::default(),
            scheduler: Scheduler::new(speed.delay()),
            speed,
            exit_requested: false,
            last_step_time_ms: 0.0,
            queue: VecDeque::new(),
        }
    }

    /// Start the timer (builder pattern)
    pub fn running(mut self) -> Self {
        self.scheduler.start();
        self
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Queue a command for the next tick
    pub fn submit(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn submit_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.queue.extend(commands);
    }

    /// Commands waiting for the next tick
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply queued commands, then run whatever generations the timer owes.
    pub fn tick(mut self, delta_time: f32) -> Self {
        while let Some(command) = self.queue.pop_front() {
            self.apply(command);
            if self.exit_requested {
                self.queue.clear();
                return self;
            }
        }

        let due = self
            .scheduler
            .advance(Duration::try_from_secs_f32(delta_time).unwrap_or_default());
        if due > 0 {
            let start = Instant::now();
            for _ in 0..due {
                self.engine.step();
            }
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        }

        self
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::New => self.engine.randomize(),
            Command::StopStart => {
                self.scheduler.toggle();
                debug!(running = self.scheduler.is_running(), "stop/start");
            }
            Command::SetSpeed(speed) => {
                self.speed = speed;
                self.scheduler.set_delay(speed.delay());
                debug!(
                    speed = speed.name(),
                    delay_ms = speed.delay().as_millis() as u64,
                    "speed changed"
                );
            }
            Command::SetLiveColor(color) => {
                self.palette.set_live(color);
                debug!(?color, "live colour");
            }
            Command::SetDeadColor(color) => {
                self.palette.set_dead(color);
                debug!(?color, "dead colour");
            }
            Command::Exit => {
                info!(generation = self.engine.generation(), "exit requested");
                self.exit_requested = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pattern;

    fn blinker_state() -> GameState {
        let mut engine = GridEngine::new(32);
        engine
            .apply_pattern(&Pattern::new("blinker", vec![(-1, 0), (0, 0), (1, 0)]))
            .unwrap();
        GameState::new(engine)
    }

    #[test]
    fn test_paused_state_does_not_step() {
        let state = blinker_state().tick(5.0);
        assert_eq!(state.engine.generation(), 0);
    }

    #[test]
    fn test_running_state_steps_on_delay() {
        let state = blinker_state().running();
        let state = state.tick(0.3);
        assert_eq!(state.engine.generation(), 0);
        let state = state.tick(0.15);
        assert_eq!(state.engine.generation(), 1);
    }

    #[test]
    fn test_stop_start_keeps_board() {
        let mut state = blinker_state().running().tick(0.5);
        state.submit(Command::StopStart);
        let state = state.tick(10.0);
        assert!(!state.is_running());
        assert_eq!(state.engine.generation(), 1);
        assert_eq!(state.engine.population(), 3);
    }

    #[test]
    fn test_commands_apply_in_order() {
        let mut state = blinker_state();
        state.submit_all([Command::SetSpeed(Speed::Fast), Command::SetSpeed(Speed::Zoom)]);
        assert_eq!(state.pending(), 2);
        let state = state.tick(0.0);
        assert_eq!(state.pending(), 0);
        assert_eq!(state.speed, Speed::Zoom);
        assert_eq!(state.scheduler.delay(), Speed::Zoom.delay());
    }

    #[test]
    fn test_speed_change_before_steps_in_same_tick() {
        let mut state = blinker_state().running();
        state.submit(Command::SetSpeed(Speed::Zoom));
        let state = state.tick(0.12);
        assert_eq!(state.engine.generation(), 2);
    }

    #[test]
    fn test_colour_commands() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let blue = Color::new(0.0, 0.0, 1.0, 1.0);
        let mut state = blinker_state();
        state.submit_all([
            Command::SetDeadColor(Some(blue)),
            Command::SetLiveColor(None),
        ]);
        let state = state.tick(0.0);
        assert_eq!(state.palette.dead(), blue);
        assert_eq!(state.palette.live(), red);
    }

    #[test]
    fn test_exit_drops_remaining_commands() {
        let mut state = blinker_state();
        state.submit_all([Command::Exit, Command::New]);
        let state = state.tick(0.0);
        assert!(state.exit_requested);
        assert_eq!(state.pending(), 0);
        assert_eq!(state.engine.population(), 3);
    }

    #[test]
    fn test_new_reseeds() {
        let mut state = blinker_state().running().tick(0.5);
        state.submit(Command::New);
        let state = state.tick(0.0);
        assert_eq!(state.engine.generation(), 0);
    }
}
