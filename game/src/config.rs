//! Gameplay tunables
//!
//! Every gameplay constant lives in one plain-data struct so the step and
//! speed values stay parameters rather than contracts. `Default` carries the
//! shipped configuration; tests build modified copies to pin edge geometry.

/// All gameplay constants. Distances in pixels, velocities in pixels per
/// physics tick.
#[derive(Clone, Copy, Debug)]
pub struct Tunables {
    /// Leftmost x the ball may occupy.
    pub field_left: i32,
    /// One past the rightmost column of the play field.
    pub field_right: i32,
    /// Topmost y the ball may occupy (below the border strip and score row).
    pub field_top: i32,
    /// Ball y beyond this line ends the round.
    pub field_bottom: i32,

    /// Edge length of the square ball.
    pub ball_size: i32,
    /// Ball spawn position.
    pub ball_spawn_x: i32,
    pub ball_spawn_y: i32,
    /// Ball velocity at spawn.
    pub spawn_dx: i32,
    pub spawn_dy: i32,
    /// Per-axis velocity magnitude ceiling.
    pub max_speed: i32,

    pub paddle_w: i32,
    pub paddle_h: i32,
    /// Fixed paddle top edge.
    pub paddle_y: i32,
    /// Pixels moved per key-down.
    pub paddle_step: i32,
    /// Extra depth below the paddle that still counts as a catch.
    pub contact_tolerance: i32,

    /// Main-loop iterations per physics tick.
    pub physics_period: u64,
    /// Busy-wait iterations per frame.
    pub delay_spins: u32,

    /// Score blocks drawn at most; the score itself is uncapped.
    pub max_drawn_score: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Tunables {
            field_left: 0,
            field_right: 320,
            field_top: 20,
            field_bottom: 200,

            ball_size: 8,
            ball_spawn_x: 156,
            ball_spawn_y: 80,
            spawn_dx: 2,
            spawn_dy: 2,
            max_speed: 6,

            paddle_w: 60,
            paddle_h: 8,
            paddle_y: 185,
            paddle_step: 10,
            contact_tolerance: 5,

            physics_period: 15,
            delay_spins: 150_000,

            max_drawn_score: 25,
        }
    }
}

impl Tunables {
    /// Smallest legal paddle x.
    pub fn paddle_min_x(&self) -> i32 {
        self.field_left
    }

    /// Largest legal paddle x, accounting for paddle width.
    pub fn paddle_max_x(&self) -> i32 {
        self.field_right - self.paddle_w
    }

    /// Largest legal ball x, accounting for ball size.
    pub fn ball_max_x(&self) -> i32 {
        self.field_right - self.ball_size
    }

    /// Paddle spawn x, centered in the field.
    pub fn paddle_spawn_x(&self) -> i32 {
        self.field_left + (self.field_right - self.field_left - self.paddle_w) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_coherent() {
        let cfg = Tunables::default();
        assert!(cfg.field_left < cfg.field_right);
        assert!(cfg.field_top < cfg.field_bottom);
        assert!(cfg.paddle_min_x() < cfg.paddle_max_x());
        assert!(cfg.ball_max_x() > cfg.field_left);
        assert!(cfg.physics_period > 0);
        assert!(cfg.max_speed >= cfg.spawn_dx.abs());
        assert!(cfg.max_speed >= cfg.spawn_dy.abs());
    }

    #[test]
    fn test_spawn_positions_inside_field() {
        let cfg = Tunables::default();
        assert!(cfg.ball_spawn_x >= cfg.field_left);
        assert!(cfg.ball_spawn_x <= cfg.ball_max_x());
        assert!(cfg.ball_spawn_y >= cfg.field_top);
        assert!(cfg.ball_spawn_y < cfg.field_bottom);
        let px = cfg.paddle_spawn_x();
        assert!(px >= cfg.paddle_min_x() && px <= cfg.paddle_max_x());
    }

    #[test]
    fn test_paddle_spawn_is_centered() {
        let cfg = Tunables::default();
        assert_eq!(cfg.paddle_spawn_x(), 130);
    }
}
