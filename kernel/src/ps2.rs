//! PS/2 keyboard controller (polled)
//!
//! Raw scan-code access with no interrupt handler: the status register's
//! output-buffer bit is tested every frame, the data port read only when a
//! byte is waiting. The bytes are handed to the game crate uninterpreted.

use rebound_game::ScanSource;
use x86_64::instructions::port::Port;

/// PS/2 controller ports
const PS2_DATA: u16 = 0x60;
const PS2_STATUS: u16 = 0x64;

/// Output-buffer-full bit in the status register
const STATUS_OUTPUT_FULL: u8 = 0x01;

/// Polled handle on the keyboard controller.
pub struct Controller {
    status: Port<u8>,
    data: Port<u8>,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            status: Port::new(PS2_STATUS),
            data: Port::new(PS2_DATA),
        }
    }

    /// Drain whatever the controller buffered before the loop started, so
    /// a key pressed during boot does not play the first frames. Bounded
    /// in case the status bit is stuck.
    pub fn flush(&mut self) {
        for _ in 0..16 {
            if unsafe { self.status.read() } & STATUS_OUTPUT_FULL == 0 {
                return;
            }
            let _ = unsafe { self.data.read() };
        }
    }
}

impl ScanSource for Controller {
    fn has_pending_byte(&mut self) -> bool {
        unsafe { self.status.read() } & STATUS_OUTPUT_FULL != 0
    }

    fn read_byte(&mut self) -> u8 {
        unsafe { self.data.read() }
    }
}
