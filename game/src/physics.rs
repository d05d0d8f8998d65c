//! Ball physics
//!
//! One deterministic tick: move the ball by its velocity, then resolve in
//! order side walls, ceiling, paddle, floor. Walls and ceiling clamp the
//! position and reflect the velocity. A paddle catch re-seats the ball on
//! the paddle top, scores one point, and raises both velocity magnitudes by
//! one (clamped) so rounds escalate. A ball that falls past the bottom line
//! ends the round where it lies; nothing moves again until a restart.

use crate::config::Tunables;
use crate::state::{Game, Phase};

/// Advance one physics tick. Does nothing once the round is over.
pub fn step(game: &mut Game, cfg: &Tunables) {
    if !game.is_playing() {
        return;
    }

    let ball = &mut game.ball;
    ball.x += ball.dx;
    ball.y += ball.dy;

    // Side walls: clamp and reflect. The branches are exclusive, so one
    // contact flips the velocity exactly once.
    if ball.x < cfg.field_left {
        ball.x = cfg.field_left;
        ball.dx = -ball.dx;
    } else if ball.x > cfg.ball_max_x() {
        ball.x = cfg.ball_max_x();
        ball.dx = -ball.dx;
    }

    // Ceiling
    if ball.y < cfg.field_top {
        ball.y = cfg.field_top;
        ball.dy = -ball.dy;
    }

    // Paddle catch: ball bottom strictly below the paddle top, no deeper
    // than the tolerance line, horizontal extents overlapping strictly.
    // Re-seating the bottom exactly on the paddle top leaves the band, so
    // one contact cannot score twice.
    let bottom = ball.y + cfg.ball_size;
    let in_band =
        bottom > cfg.paddle_y && bottom <= cfg.paddle_y + cfg.paddle_h + cfg.contact_tolerance;
    let overlapping =
        ball.x + cfg.ball_size > game.paddle.x && ball.x < game.paddle.x + cfg.paddle_w;
    if in_band && overlapping {
        ball.y = cfg.paddle_y - cfg.ball_size;
        ball.dy = -raise(ball.dy, cfg.max_speed);
        ball.dx = ball.dx.signum() * raise(ball.dx, cfg.max_speed);
        game.score += 1;
    }

    // Floor: the round is lost, the ball rests where it fell (the renderer
    // clips whatever hangs off screen)
    if ball.y > cfg.field_bottom {
        game.phase = Phase::GameOver;
    }
}

/// Next magnitude after a paddle catch: one faster, never past `max`.
fn raise(v: i32, max: i32) -> i32 {
    (v.abs() + 1).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Tunables {
        Tunables::default()
    }

    fn game_with_ball(x: i32, y: i32, dx: i32, dy: i32) -> Game {
        let mut game = Game::new(&cfg());
        game.ball.x = x;
        game.ball.y = y;
        game.ball.dx = dx;
        game.ball.dy = dy;
        game
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut game = game_with_ball(100, 100, 3, -2);
        step(&mut game, &cfg());
        assert_eq!((game.ball.x, game.ball.y), (103, 98));
        assert_eq!((game.ball.dx, game.ball.dy), (3, -2));
    }

    #[test]
    fn test_left_wall_clamps_and_reflects() {
        let mut game = game_with_ball(0, 50, -2, 0);
        step(&mut game, &cfg());
        assert_eq!(game.ball.x, 0);
        assert_eq!(game.ball.dx, 2);
    }

    #[test]
    fn test_wall_reflects_once_per_contact() {
        let mut game = game_with_ball(0, 50, -2, 0);
        step(&mut game, &cfg());
        assert_eq!(game.ball.dx, 2);
        // Next tick leaves the wall without a second flip
        step(&mut game, &cfg());
        assert_eq!(game.ball.x, 2);
        assert_eq!(game.ball.dx, 2);
    }

    #[test]
    fn test_right_wall_clamps_and_reflects() {
        let c = cfg();
        let mut game = game_with_ball(c.ball_max_x() - 1, 50, 2, 0);
        step(&mut game, &c);
        assert_eq!(game.ball.x, c.ball_max_x());
        assert_eq!(game.ball.dx, -2);
    }

    #[test]
    fn test_ceiling_clamps_and_reflects() {
        let c = cfg();
        let mut game = game_with_ball(50, c.field_top + 1, 0, -2);
        step(&mut game, &c);
        assert_eq!(game.ball.y, c.field_top);
        assert_eq!(game.ball.dy, 2);
    }

    #[test]
    fn test_corner_reflects_both_axes_once() {
        let c = cfg();
        let mut game = game_with_ball(1, c.field_top + 1, -2, -2);
        step(&mut game, &c);
        assert_eq!((game.ball.x, game.ball.y), (0, c.field_top));
        assert_eq!((game.ball.dx, game.ball.dy), (2, 2));
    }

    #[test]
    fn test_paddle_catch_scores_reseats_and_flips() {
        let mut game = game_with_ball(158, 188, 0, 2);
        game.paddle.x = 140;
        step(&mut game, &cfg());
        // Landed at y=190, bottom 198: caught
        assert_eq!(game.ball.y, 177);
        assert!(game.ball.dy < 0);
        assert_eq!(game.score, 1);
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_one_contact_scores_once() {
        let mut game = game_with_ball(158, 188, 0, 2);
        game.paddle.x = 140;
        step(&mut game, &cfg());
        assert_eq!(game.score, 1);
        // The re-seated ball is outside the band and rising
        step(&mut game, &cfg());
        assert_eq!(game.score, 1);
        assert!(game.ball.y < 177);
    }

    #[test]
    fn test_catch_raises_speed_on_both_axes() {
        let mut game = game_with_ball(156, 188, 2, 2);
        game.paddle.x = 140;
        step(&mut game, &cfg());
        assert_eq!(game.ball.dx, 3);
        assert_eq!(game.ball.dy, -3);
    }

    #[test]
    fn test_speed_never_exceeds_max() {
        let c = cfg();
        let mut game = game_with_ball(158, 184, -6, 6);
        game.paddle.x = 140;
        step(&mut game, &c);
        assert_eq!(game.ball.dx, -c.max_speed);
        assert_eq!(game.ball.dy, -c.max_speed);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_edge_touch_is_not_a_catch() {
        // Ball right edge exactly on the paddle left edge: strict overlap fails
        let mut game = game_with_ball(132, 188, 0, 2);
        game.paddle.x = 140;
        step(&mut game, &cfg());
        assert_eq!(game.score, 0);
        assert_eq!(game.ball.y, 190);
        assert_eq!(game.ball.dy, 2);
    }

    #[test]
    fn test_ball_below_tolerance_line_is_missed() {
        let c = cfg();
        // Bottom lands at 199, one past the tolerance line
        let mut game = game_with_ball(158, 185, 0, 6);
        game.paddle.x = 140;
        step(&mut game, &c);
        assert_eq!(game.score, 0);
        assert_eq!(game.ball.y, 191);
        assert_eq!(game.ball.dy, 6);
    }

    #[test]
    fn test_floor_crossing_ends_round() {
        let mut game = game_with_ball(100, 196, 0, 6);
        step(&mut game, &cfg());
        assert_eq!(game.ball.y, 202);
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_floor_line_itself_is_still_in_play() {
        let mut game = game_with_ball(100, 195, 0, 5);
        step(&mut game, &cfg());
        assert_eq!(game.ball.y, 200);
        assert_eq!(game.phase, Phase::Playing);
        step(&mut game, &cfg());
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_ball() {
        let mut game = game_with_ball(100, 150, 4, 4);
        game.phase = Phase::GameOver;
        for _ in 0..10 {
            step(&mut game, &cfg());
        }
        assert_eq!((game.ball.x, game.ball.y), (100, 150));
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_narrow_field_still_reflects_once() {
        // Shrunken field: both walls near each other, reflection still single
        let mut c = cfg();
        c.field_right = c.field_left + c.ball_size + 4;
        let mut game = Game::new(&c);
        game.ball.x = c.field_left + 1;
        game.ball.y = 100;
        game.ball.dx = -6;
        game.ball.dy = 0;
        game.paddle.x = c.field_left;
        step(&mut game, &c);
        assert_eq!(game.ball.x, c.field_left);
        assert_eq!(game.ball.dx, 6);
    }
}
