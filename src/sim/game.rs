//! Game orchestrator: owns the entities, the score and the phase

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::blocks::BlockLayout;
use super::paddle::Paddle;
use super::pointer::PointerMailbox;
use super::rng::{RandomSource, SeededRandom};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Running,
    /// Ball missed; terminal
    GameOver,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: Option<u64>,
    pub score: u32,
    pub ticks: u64,
    pub phase: GamePhase,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game {
    seed: Option<u64>,
    playfield: Vec2,
    ball: Ball,
    paddle: Paddle,
    blocks: BlockLayout,
    score: u32,
    ticks: u64,
    phase: GamePhase,
}

impl Game {
    /// Create a session, drawing the ball's spawn from `rng`
    pub fn new(playfield: Vec2, config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let ball = Ball::new(playfield, &config.ball, rng);
        let paddle = Paddle::new(playfield.x, playfield.y, &config.paddle);
        let blocks = BlockLayout::new(
            playfield.x,
            config.blocks.row_height,
            config.blocks.grid.as_slice(),
        );
        Self::from_parts(playfield, ball, paddle, blocks)
    }

    /// Create a reproducible session from a seed
    pub fn from_seed(playfield: Vec2, config: &GameConfig, seed: u64) -> Self {
        let mut rng = SeededRandom::new(seed);
        let mut game = Self::new(playfield, config, &mut rng);
        game.seed = Some(rng.seed());
        game
    }

    /// Assemble a session from prebuilt entities
    pub fn from_parts(playfield: Vec2, ball: Ball, paddle: Paddle, blocks: BlockLayout) -> Self {
        Self {
            seed: None,
            playfield,
            ball,
            paddle,
            blocks,
            score: 0,
            ticks: 0,
            phase: GamePhase::Running,
        }
    }

    /// Advance the simulation one tick
    ///
    /// `viewport_left` is the playfield's horizontal offset in the viewport,
    /// used to map pointer samples into playfield space. No-op once over.
    pub fn update(&mut self, viewport_left: f32) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.ticks += 1;
        self.ball.integrate();

        if self.paddle.update(&mut self.ball, viewport_left) {
            self.add_score();
        }

        if self.ball.is_missed() {
            self.phase = GamePhase::GameOver;
            log::info!("Game over after {} ticks, score {}", self.ticks, self.score);
        }
    }

    /// Count one paddle contact
    pub fn add_score(&mut self) {
        self.score += 1;
        log::debug!("Paddle hit, score {}", self.score);
    }

    /// Input handle for the pointer listener
    pub fn pointer(&self) -> PointerMailbox {
        self.paddle.pointer()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            score: self.score,
            ticks: self.ticks,
            phase: self.phase,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn playfield(&self) -> Vec2 {
        self.playfield
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn blocks(&self) -> &BlockLayout {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaddleConfig;
    use crate::consts::{BLOCK_GRID, BLOCK_HEIGHT};

    const FIELD: Vec2 = Vec2::new(300.0, 400.0);

    fn game_with_ball(pos: Vec2, vel: Vec2) -> Game {
        let ball = Ball::with_state(pos, vel, 10.0, FIELD);
        let paddle = Paddle::new(FIELD.x, FIELD.y, &PaddleConfig::default());
        let blocks = BlockLayout::new(FIELD.x, BLOCK_HEIGHT, &BLOCK_GRID);
        Game::from_parts(FIELD, ball, paddle, blocks)
    }

    #[test]
    fn test_new_session() {
        let game = Game::from_seed(FIELD, &GameConfig::default(), 12345);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.blocks().len(), 24);
        assert_eq!(game.paddle().x, 120.0);
        assert_eq!(game.summary().seed, Some(12345));
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = Game::from_seed(FIELD, &GameConfig::default(), 99999);
        let b = Game::from_seed(FIELD, &GameConfig::default(), 99999);
        assert_eq!(a.ball(), b.ball());
    }

    #[test]
    fn test_paddle_hit_scores_once() {
        let mut game = game_with_ball(Vec2::new(150.0, 358.0), Vec2::new(0.0, 4.0));
        game.pointer().post(150.0);

        // Integrates to y = 362, overlapping the paddle top at 368
        game.update(0.0);
        assert_eq!(game.score(), 1);
        assert_eq!(game.ball().y(), 358.0);
        assert_eq!(game.ball().velocity().y, -4.0);

        game.update(0.0);
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_miss_ends_game() {
        let mut game = game_with_ball(Vec2::new(20.0, 380.0), Vec2::new(0.0, 4.0));
        game.pointer().post(280.0);

        game.update(0.0);
        assert_eq!(game.phase(), GamePhase::Running);
        game.update(0.0);
        assert_eq!(game.ball().y(), 388.0);
        assert!(!game.is_over());
        game.update(0.0);
        assert!(game.is_over());
        assert_eq!(game.ticks(), 3);
    }

    #[test]
    fn test_no_updates_after_game_over() {
        let mut game = game_with_ball(Vec2::new(20.0, 395.0), Vec2::new(0.0, 4.0));
        game.update(0.0);
        assert!(game.is_over());

        let frozen_ball = game.ball().clone();
        let paddle_x = game.paddle().x;
        game.pointer().post(-500.0);
        for _ in 0..5 {
            game.update(0.0);
        }
        assert_eq!(game.ball(), &frozen_ball);
        assert_eq!(game.paddle().x, paddle_x);
        assert_eq!(game.ticks(), 1);
    }

    #[test]
    fn test_summary_json() {
        let mut game = game_with_ball(Vec2::new(20.0, 395.0), Vec2::new(0.0, 4.0));
        game.add_score();
        game.update(0.0);

        let json = serde_json::to_string(&game.summary()).unwrap();
        let parsed: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, 1);
        assert_eq!(parsed.phase, GamePhase::GameOver);
        assert_eq!(parsed.seed, None);
    }
}
