use std::time::Duration;

/// Default delay between generations
pub const INTERVAL: Duration = Duration::from_millis(400);

/// Ticks beyond this many in one frame are dropped rather than replayed.
pub const MAX_STEPS_PER_FRAME: u32 = 16;

/// Speed menu presets, each a fixed timer delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
    Zoom,
    Insane,
}

impl Speed {
    pub const ALL: [Speed; 5] = [
        Speed::Slow,
        Speed::Normal,
        Speed::Fast,
        Speed::Zoom,
        Speed::Insane,
    ];

    /// Display name for the menu
    pub fn name(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::Zoom => "Zoom",
            Speed::Insane => "Insane",
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Speed::Slow => INTERVAL * 2,
            Speed::Normal => INTERVAL,
            Speed::Fast => INTERVAL / 2,
            Speed::Zoom => INTERVAL / 8,
            Speed::Insane => Duration::from_millis(1),
        }
    }

    /// Position in [`Speed::ALL`], used as the menu index
    pub fn index(&self) -> usize {
        Speed::ALL.iter().position(|s| s == self).unwrap_or(1)
    }
}

/// Repeating timer driven by frame time.
///
/// Pausing keeps the configured delay; a restarted timer waits a full
/// delay before its first tick.
#[derive(Clone, Debug)]
pub struct Scheduler {
    delay: Duration,
    running: bool,
    elapsed: Duration,
}

impl Scheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.max(Duration::from_millis(1)),
            running: false,
            elapsed: Duration::ZERO,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the repeat delay; applies from the next tick.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.max(Duration::from_millis(1));
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Stop if running, start if stopped
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Account for `dt` of wall time and return how many ticks fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.elapsed += dt;
        let due = self.elapsed.as_nanos() / self.delay.as_nanos();
        if due >= u128::from(MAX_STEPS_PER_FRAME) {
            self.elapsed = Duration::ZERO;
            return MAX_STEPS_PER_FRAME;
        }

        let due = due as u32;
        self.elapsed -= self.delay * due;
        due
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_speed_delays() {
        assert_eq!(Speed::Slow.delay(), 800 * MS);
        assert_eq!(Speed::Normal.delay(), 400 * MS);
        assert_eq!(Speed::Fast.delay(), 200 * MS);
        assert_eq!(Speed::Zoom.delay(), 50 * MS);
        assert_eq!(Speed::Insane.delay(), MS);
    }

    #[test]
    fn test_default_speed_is_normal() {
        assert_eq!(Speed::default(), Speed::Normal);
        assert_eq!(Speed::Normal.index(), 1);
        assert_eq!(Speed::ALL[Speed::Zoom.index()], Speed::Zoom);
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = Scheduler::default();
        assert_eq!(timer.advance(10 * INTERVAL), 0);
    }

    #[test]
    fn test_fires_once_per_delay() {
        let mut timer = Scheduler::new(100 * MS);
        timer.start();
        assert_eq!(timer.advance(60 * MS), 0);
        assert_eq!(timer.advance(60 * MS), 1);
        assert_eq!(timer.advance(80 * MS), 1);
        assert_eq!(timer.advance(250 * MS), 2);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut timer = Scheduler::new(MS);
        timer.start();
        assert_eq!(timer.advance(Duration::from_secs(1)), MAX_STEPS_PER_FRAME);
        assert_eq!(timer.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_toggle_resets_partial_tick() {
        let mut timer = Scheduler::new(100 * MS);
        timer.start();
        timer.advance(90 * MS);
        timer.toggle();
        assert!(!timer.is_running());
        timer.toggle();
        assert_eq!(timer.advance(20 * MS), 0);
    }

    #[test]
    fn test_set_delay_applies_to_next_tick() {
        let mut timer = Scheduler::new(400 * MS);
        timer.start();
        timer.advance(100 * MS);
        timer.set_delay(50 * MS);
        assert_eq!(timer.advance(Duration::ZERO), 2);
        assert_eq!(timer.delay(), 50 * MS);
    }

    #[test]
    fn test_zero_delay_is_clamped() {
        let timer = Scheduler::new(Duration::ZERO);
        assert_eq!(timer.delay(), MS);
    }
}
