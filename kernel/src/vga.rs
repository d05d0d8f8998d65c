//! VGA mode 13h aperture
//!
//! 320x200, one byte per pixel, linear at physical 0xA0000. The loader
//! must have programmed mode 13h before `kmain` runs; this module only
//! hands out the memory region, it never touches VGA registers.

use rebound_game::SCREEN_PIXELS;

/// Physical base of the mode 13h framebuffer
pub const MODE13H_BASE: usize = 0xA0000;

/// Borrow the framebuffer for the lifetime of the kernel.
///
/// # Safety
///
/// The display must be in mode 13h with the aperture identity-mapped at
/// `MODE13H_BASE`, and this must be called at most once: the returned
/// borrow covers the whole aperture for `'static`.
pub unsafe fn mode13h_buffer() -> &'static mut [u8; SCREEN_PIXELS] {
    &mut *(MODE13H_BASE as *mut [u8; SCREEN_PIXELS])
}
