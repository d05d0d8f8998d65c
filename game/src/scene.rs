//! Scene rasterization
//!
//! Rebuilds the whole frame from state every iteration: clear, border
//! walls, score row, paddle, ball. While playing the frame is gray and open
//! at the bottom; after a lost round it turns red and closes, which is the
//! game-over signal. Every frame repaints from scratch, so no erase path
//! for stale pixels exists.

use crate::config::Tunables;
use crate::state::Game;
use crate::surface::{Surface, SCREEN_HEIGHT, SCREEN_WIDTH};

// VGA palette indexes used by the scene
pub const BLACK: u8 = 0;
pub const RED: u8 = 4;
pub const GRAY: u8 = 7;
pub const LIGHT_RED: u8 = 12;
pub const YELLOW: u8 = 14;
pub const WHITE: u8 = 15;

/// Border wall thickness.
const WALL: i32 = 5;
/// Score row: 10x8 blocks every 12 px starting at x=12, y=8.
const SCORE_X0: i32 = 12;
const SCORE_Y: i32 = 8;
const SCORE_STEP: i32 = 12;
const SCORE_W: i32 = 10;
const SCORE_H: i32 = 8;

/// Redraw the full frame from the current state.
pub fn draw(fb: &mut Surface, game: &Game, cfg: &Tunables) {
    let w = SCREEN_WIDTH as i32;
    let h = SCREEN_HEIGHT as i32;

    fb.clear(BLACK);

    let frame_color = if game.is_playing() { GRAY } else { RED };
    fb.fill_rect(0, 0, w, WALL, frame_color);
    fb.fill_rect(0, 0, WALL, h, frame_color);
    fb.fill_rect(w - WALL, 0, WALL, h, frame_color);
    if !game.is_playing() {
        // The closing bottom bar marks the lost round
        fb.fill_rect(0, h - WALL, w, WALL, frame_color);
    }

    let blocks = game.score.min(cfg.max_drawn_score) as i32;
    for i in 0..blocks {
        fb.fill_rect(SCORE_X0 + i * SCORE_STEP, SCORE_Y, SCORE_W, SCORE_H, YELLOW);
    }

    fb.fill_rect(game.paddle.x, cfg.paddle_y, cfg.paddle_w, cfg.paddle_h, WHITE);
    fb.fill_rect(game.ball.x, game.ball.y, cfg.ball_size, cfg.ball_size, LIGHT_RED);
}
