//! Indexed-color drawing surface
//!
//! A mutable view over one full 320x200 frame, one palette byte per pixel,
//! row-major. Two primitives: `fill_rect` and `clear`. `fill_rect` clips to
//! the surface (a target cell outside [0,320)x[0,200) is silently skipped,
//! never written), and that clip is the only bounds guard in the whole
//! system, so callers never pre-validate geometry. Writes are volatile
//! because on hardware the backing region is the live VGA aperture;
//! rendering is immediate, with no back buffer and no dirty tracking, and
//! tearing is accepted.

/// Surface width in pixels.
pub const SCREEN_WIDTH: usize = 320;
/// Surface height in pixels.
pub const SCREEN_HEIGHT: usize = 200;
/// Total cell count (one byte per pixel).
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Mutable view over a full frame of pixels.
pub struct Surface<'a> {
    pixels: &'a mut [u8; SCREEN_PIXELS],
}

impl<'a> Surface<'a> {
    pub fn new(pixels: &'a mut [u8; SCREEN_PIXELS]) -> Self {
        Surface { pixels }
    }

    /// Overwrite every cell with one palette index.
    pub fn clear(&mut self, color: u8) {
        let base = self.pixels.as_mut_ptr();
        for i in 0..SCREEN_PIXELS {
            // In range: i < SCREEN_PIXELS == pixels.len()
            unsafe { base.add(i).write_volatile(color) };
        }
    }

    /// Fill a rectangle with one palette index. Negative origins and
    /// overhanging extents clip to the surface; zero or negative extents
    /// draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        let x1 = x.max(0);
        let y1 = y.max(0);
        let x2 = x.saturating_add(w).min(SCREEN_WIDTH as i32);
        let y2 = y.saturating_add(h).min(SCREEN_HEIGHT as i32);
        if x2 <= x1 || y2 <= y1 {
            return;
        }

        let base = self.pixels.as_mut_ptr();
        for py in y1..y2 {
            for px in x1..x2 {
                let idx = py as usize * SCREEN_WIDTH + px as usize;
                // In range: px < SCREEN_WIDTH and py < SCREEN_HEIGHT after clip
                unsafe { base.add(idx).write_volatile(color) };
            }
        }
    }
}
