//! Count-up animation for the stats strip

use std::time::Duration;

/// Total animation time
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Number of increments over the duration
pub const COUNTER_STEPS: u32 = 60;

/// Counts from zero to a target in fixed increments
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: target as f64 / COUNTER_STEPS as f64,
            current: 0.0,
            done: false,
        }
    }

    /// Time between ticks
    pub fn interval() -> Duration {
        COUNTER_DURATION / COUNTER_STEPS
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the value to display, or `None` once finished
    pub fn tick(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        self.current += self.step;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.tick()
    }
}
