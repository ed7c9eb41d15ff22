//! Working-status animation

/// Interval between animation frames while a job is running
pub const TICK_INTERVAL_MS: u64 = 500;

/// The dot run length cycles through `0..DOT_PERIOD`
pub const DOT_PERIOD: u64 = 32;

/// How long the "Work end!" status stays up before reverting
pub const WORK_END_HOLD_MS: u64 = 3000;

/// Status shown when a job finishes
pub const WORK_END_STATUS: &str = "Work end!";

/// Render the animation frame for a tick count.
/// A pure function of the counter, independent of wall-clock drift.
pub fn working_frame(count: u64) -> String {
    let dots = ".".repeat((count % DOT_PERIOD) as usize);
    format!("Working{dots}")
}

/// Activity ticker: advances a counter and yields "still working" frames.
/// The counter is never reset, so the animation resumes mid-cycle across
/// jobs; only the modulus matters.
#[derive(Debug, Default)]
pub struct ActivityTicker {
    count: u64,
}

impl ActivityTicker {
    /// Create a new ticker
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Render the current frame and advance the counter
    pub fn advance(&mut self) -> String {
        let frame = working_frame(self.count);
        self.count += 1;
        frame
    }

    /// Ticks rendered so far
    pub fn count(&self) -> u64 {
        self.count
    }
}
