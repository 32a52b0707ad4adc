use std::time::{Duration, Instant};

/// Longest frame step handed to analog movement; longer stalls are clamped
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame clock for per-frame analog input
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    max_delta: Duration,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_DELTA)
    }

    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since last tick (clamped to the max delta) and advance clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).min(self.max_delta);
        self.last_tick = now;
        delta.as_secs_f32()
    }

    /// Restart from now, e.g. after the window regains focus
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
