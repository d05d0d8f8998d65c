//! Rebound: paddle-and-ball game rules
//!
//! Pure game logic for the Rebound arcade kernel: state, physics, input
//! dispatch and scene rasterization over an indexed-color surface. Nothing
//! here touches hardware. The kernel binary supplies the real framebuffer
//! and keyboard controller, and the same code runs unchanged under the host
//! test harness against an in-memory pixel array and a scripted scan-code
//! source.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod driver;
pub mod input;
pub mod physics;
pub mod scene;
pub mod state;
pub mod surface;
pub mod ticker;

pub use config::Tunables;
pub use driver::run_frame;
pub use input::{ScanSource, ScriptedScans};
pub use state::{Ball, Game, Paddle, Phase};
pub use surface::{Surface, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
pub use ticker::TickBudget;
