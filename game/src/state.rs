//! Game state
//!
//! The single owned aggregate the whole loop mutates: paddle, ball, score
//! and round phase. No globals; the state is built once at entry and passed
//! by reference through the input, physics and render steps.

use crate::config::Tunables;

/// Round phase. `Playing` is both the initial phase and the phase re-entered
/// after a restart; no other phases exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Horizontal paddle position (top edge and extent are fixed tunables).
#[derive(Clone, Copy, Debug)]
pub struct Paddle {
    pub x: i32,
}

/// Ball position and velocity. The ball is square; its size is a tunable.
#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Ball {
    fn at_spawn(cfg: &Tunables) -> Self {
        Ball {
            x: cfg.ball_spawn_x,
            y: cfg.ball_spawn_y,
            dx: cfg.spawn_dx,
            dy: cfg.spawn_dy,
        }
    }
}

/// Everything the game mutates, aggregated.
pub struct Game {
    pub paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    pub phase: Phase,
}

impl Game {
    pub fn new(cfg: &Tunables) -> Self {
        Game {
            paddle: Paddle {
                x: cfg.paddle_spawn_x(),
            },
            ball: Ball::at_spawn(cfg),
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// Start a fresh round after a game over: ball back at spawn, score
    /// cleared, phase back to `Playing`. The paddle keeps its position.
    pub fn reset_round(&mut self, cfg: &Tunables) {
        self.ball = Ball::at_spawn(cfg);
        self.score = 0;
        self.phase = Phase::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_playing_at_spawn() {
        let cfg = Tunables::default();
        let game = Game::new(&cfg);
        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.score, 0);
        assert_eq!(game.ball.x, cfg.ball_spawn_x);
        assert_eq!(game.ball.y, cfg.ball_spawn_y);
        assert_eq!((game.ball.dx, game.ball.dy), (cfg.spawn_dx, cfg.spawn_dy));
        assert_eq!(game.paddle.x, cfg.paddle_spawn_x());
    }

    #[test]
    fn test_reset_round_restores_spawn_but_not_paddle() {
        let cfg = Tunables::default();
        let mut game = Game::new(&cfg);
        game.ball.x = 3;
        game.ball.y = 199;
        game.ball.dy = -5;
        game.score = 12;
        game.phase = Phase::GameOver;
        game.paddle.x = 40;

        game.reset_round(&cfg);

        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.score, 0);
        assert_eq!(game.ball.x, cfg.ball_spawn_x);
        assert_eq!(game.ball.y, cfg.ball_spawn_y);
        assert_eq!((game.ball.dx, game.ball.dy), (cfg.spawn_dx, cfg.spawn_dy));
        assert_eq!(game.paddle.x, 40);
    }
}
