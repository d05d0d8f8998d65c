//! Per-iteration frame sequence
//!
//! The canonical loop body, factored out of the kernel's infinite loop so
//! its ordering is testable off hardware: poll one scan code, advance the
//! tick budget, run physics when a tick is granted, then redraw. Input
//! applied in an iteration is always visible to that same iteration's
//! physics and render, so the frame on screen never lags committed state.

use crate::config::Tunables;
use crate::input::{self, ScanSource};
use crate::physics;
use crate::scene;
use crate::state::Game;
use crate::surface::Surface;
use crate::ticker::TickBudget;

/// Run one loop iteration. Returns true when a physics tick ran, which is
/// what callers want for tick-level tracing.
pub fn run_frame(
    game: &mut Game,
    keys: &mut impl ScanSource,
    fb: &mut Surface,
    budget: &mut TickBudget,
    cfg: &Tunables,
) -> bool {
    input::poll(game, keys, cfg);
    let ticked = budget.advance();
    if ticked {
        physics::step(game, cfg);
    }
    scene::draw(fb, game, cfg);
    ticked
}
