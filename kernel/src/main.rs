//! Rebound Kernel
//!
//! Freestanding x86 binary whose entire payload is a paddle-and-ball
//! arcade game: VGA mode 13h framebuffer, polled PS/2 scan codes, one
//! cooperative loop with no interrupts, no allocator and no scheduler.
//! An external loader switches the display to mode 13h and jumps to
//! `kmain`; control never returns.
//!
//! Gameplay rules live in the `rebound_game` crate and run unchanged under
//! the host test harness; this binary only binds them to hardware.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

// Hardware modules, compiled only for the bare-metal x86_64 target
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod serial;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod logger;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod pacer;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod ps2;
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod vga;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
use rebound_game::{Game, Surface, TickBudget, Tunables};

/// Kernel entry point, invoked by the loader with mode 13h already set.
///
/// Brings up the serial console, maps the framebuffer, builds the game
/// state and runs the frame loop forever: poll one scan code, advance the
/// rate-limited physics, redraw, spin out the frame delay.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[no_mangle]
pub unsafe extern "C" fn kmain() -> ! {
    // Phase 1: serial console for diagnostics
    serial::init();
    serial_println!("Rebound kernel v0.1.0");

    // Phase 2: framebuffer, borrowed here once for the kernel's lifetime
    let cfg = Tunables::default();
    let mut fb = Surface::new(unsafe { vga::mode13h_buffer() });
    log!("mode 13h framebuffer at {:#x}", vga::MODE13H_BASE);

    // Phase 3: input and game state
    let mut keys = ps2::Controller::new();
    keys.flush();
    let mut game = Game::new(&cfg);
    let mut budget = TickBudget::new(cfg.physics_period);
    let pacer = pacer::SpinPacer::new(cfg.delay_spins);
    log!("state ready, entering main loop");

    let mut last_score = 0;
    let mut was_playing = true;
    loop {
        let _ticked = rebound_game::run_frame(&mut game, &mut keys, &mut fb, &mut budget, &cfg);

        #[cfg(feature = "tick-trace")]
        {
            if _ticked {
                log_debug!(
                    "ball ({},{}) v ({},{}) paddle {}",
                    game.ball.x,
                    game.ball.y,
                    game.ball.dx,
                    game.ball.dy,
                    game.paddle.x
                );
            }
        }

        if game.score > last_score {
            log!("score {}", game.score);
        }
        last_score = game.score;

        if was_playing && !game.is_playing() {
            log!("round over, final score {}", game.score);
        } else if !was_playing && game.is_playing() {
            log!("restart");
        }
        was_playing = game.is_playing();

        logger::tick();
        pacer.pause();
    }
}

/// Park the CPU forever
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}

/// Panic handler - called on unrecoverable errors
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    log_level!(logger::LogLevel::Fatal, "kernel panic: {}", info);
    halt_loop();
}

/// Hosted builds exist only so `cargo check` and the workspace test run
/// work on a development machine; the real binary targets bare metal.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("rebound_kernel is freestanding; build it for a bare-metal x86_64 target");
}
