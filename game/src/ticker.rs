//! Physics rate limiting
//!
//! The main loop spins far faster than the ball should move, and there is
//! no timer hardware to calibrate against. `TickBudget` decouples the two
//! rates: a monotonic frame counter advanced once per loop iteration, with
//! a physics tick granted every `period` frames.

/// Frame counter with a fixed tick period.
pub struct TickBudget {
    frame: u64,
    period: u64,
}

impl TickBudget {
    pub const fn new(period: u64) -> Self {
        TickBudget { frame: 0, period }
    }

    /// Count one loop iteration; true when a physics tick is due.
    pub fn advance(&mut self) -> bool {
        self.frame = self.frame.wrapping_add(1);
        self.period != 0 && self.frame % self.period == 0
    }

    /// Iterations counted so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
