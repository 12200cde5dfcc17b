use std::time::Instant;

/// Wall-clock frame-time provider
///
/// Owns the "time since last tick" bookkeeping for a cooperative host loop.
/// The driver calls [`FrameClock::tick`] once per frame and forwards the
/// returned delta to whatever consumes frame time (animators, waves);
/// consumers never read the clock implicitly, so durations and deltas stay
/// in the same units by construction.
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
    frame_time: f32,
}

impl FrameClock {
    /// Create a clock with zero elapsed time
    pub fn new() -> Self {
        let now = Instant::now();

        Self {
            started: now,
            last_tick: now,
            frame_time: 0.0,
        }
    }

    /// Advance the clock, returning the seconds elapsed since the previous
    /// tick (or since creation, on the first call)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.frame_time = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame_time
    }

    /// Seconds elapsed over the most recent tick
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
