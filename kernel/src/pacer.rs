//! Frame pacing
//!
//! A fixed-iteration spin is the only timing primitive available: there is
//! no timer interrupt to sleep on, so `hlt` would never wake and is kept
//! for the terminal halt path only. The spin count is uncalibrated; the
//! physics tick budget absorbs whatever loop rate results.

/// Busy-wait frame delay with a fixed spin count.
pub struct SpinPacer {
    spins: u32,
}

impl SpinPacer {
    pub const fn new(spins: u32) -> Self {
        SpinPacer { spins }
    }

    /// Burn one frame's worth of delay.
    pub fn pause(&self) {
        for _ in 0..self.spins {
            core::hint::spin_loop();
        }
    }
}
