//! Scan-code input
//!
//! The game consumes raw PS/2 set-1 scan codes: no decoding layer, no key
//! buffer. The hardware side is abstracted behind `ScanSource` so the kernel
//! plugs in the real keyboard controller while tests script a byte sequence.
//! Key releases (high bit set) and unrecognized codes are inert, and at most
//! one pending byte is consumed per loop iteration.

use crate::config::Tunables;
use crate::state::{Game, Phase};

/// Left arrow make code.
pub const SCAN_LEFT: u8 = 0x4B;
/// Right arrow make code.
pub const SCAN_RIGHT: u8 = 0x4D;
/// Enter make code; restarts a finished round.
pub const SCAN_ENTER: u8 = 0x1C;
/// High bit marks a key release.
pub const SCAN_RELEASE_BIT: u8 = 0x80;

/// Byte-level access to a scan-code stream.
///
/// `read_byte` is only meaningful after `has_pending_byte` reported true;
/// a stale read yields whatever the device returns and is treated like any
/// other unrecognized code.
pub trait ScanSource {
    fn has_pending_byte(&mut self) -> bool;
    fn read_byte(&mut self) -> u8;
}

/// Replays a fixed byte sequence, then reports no pending input.
pub struct ScriptedScans<'a> {
    bytes: &'a [u8],
    next: usize,
}

impl<'a> ScriptedScans<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ScriptedScans { bytes, next: 0 }
    }
}

impl ScanSource for ScriptedScans<'_> {
    fn has_pending_byte(&mut self) -> bool {
        self.next < self.bytes.len()
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.bytes.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        byte
    }
}

/// Consume at most one pending scan code and apply it to the game.
pub fn poll(game: &mut Game, keys: &mut impl ScanSource, cfg: &Tunables) {
    if keys.has_pending_byte() {
        apply_scan(game, keys.read_byte(), cfg);
    }
}

/// Dispatch one scan code.
pub fn apply_scan(game: &mut Game, code: u8, cfg: &Tunables) {
    if code & SCAN_RELEASE_BIT != 0 {
        return;
    }
    match code {
        SCAN_LEFT => {
            game.paddle.x = (game.paddle.x - cfg.paddle_step).max(cfg.paddle_min_x());
        }
        SCAN_RIGHT => {
            game.paddle.x = (game.paddle.x + cfg.paddle_step).min(cfg.paddle_max_x());
        }
        SCAN_ENTER if game.phase == Phase::GameOver => {
            game.reset_round(cfg);
        }
        _ => {}
    }
}
