//! Rendering contract
//!
//! The simulation never touches pixels. Each frame it describes what to draw
//! through a `Surface`, which the host backs with a 2-D canvas (web) or a
//! command recorder (tests, headless runs).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::sim::{Game, GamePhase};

/// Fixed presentation styles
pub mod style {
    pub const FOREGROUND: &str = "#fdfdfd";
    pub const GAME_OVER_COLOR: &str = "tomato";
    pub const SCORE_FONT: &str = "20px Arial";
    pub const GAME_OVER_FONT: &str = "28px \"Arial Black\"";
    pub const GAME_OVER_TEXT: &str = "GAME OVER";
    pub const SCORE_POS: (f32, f32) = (10.0, 25.0);
    pub const GAME_OVER_POS: (f32, f32) = (50.0, 150.0);
}

/// A 2-D drawable region with a fixed pixel size
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Horizontal offset of the surface inside the host viewport
    fn viewport_left(&self) -> f32;

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    /// Outline with the host's default stroke style
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw the current frame for the game's phase
pub fn render<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    match game.phase() {
        GamePhase::Running => draw_playfield(game, surface),
        GamePhase::GameOver => draw_game_over(surface),
    }
}

/// Full redraw: clear, ball, paddle, blocks, score
pub fn draw_playfield<S: Surface + ?Sized>(game: &Game, surface: &mut S) {
    let field = game.playfield();
    surface.clear_rect(0.0, 0.0, field.x, field.y);

    let ball = game.ball();
    surface.fill_circle(ball.x(), ball.y(), ball.radius(), style::FOREGROUND);

    let paddle = game.paddle();
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, style::FOREGROUND);

    for block in game.blocks().blocks() {
        surface.stroke_rect(block.x, block.y, block.width, block.height);
    }

    let (x, y) = style::SCORE_POS;
    surface.fill_text(&game.score().to_string(), x, y, style::SCORE_FONT, style::FOREGROUND);
}

/// Overlay the terminal message on top of the last frame (no clear)
pub fn draw_game_over<S: Surface + ?Sized>(surface: &mut S) {
    let (x, y) = style::GAME_OVER_POS;
    surface.fill_text(
        style::GAME_OVER_TEXT,
        x,
        y,
        style::GAME_OVER_FONT,
        style::GAME_OVER_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    #[test]
    fn test_running_frame_commands() {
        let game = Game::from_seed(Vec2::new(300.0, 400.0), &GameConfig::default(), 1);
        let mut surface = RecordingSurface::new(300.0, 400.0);
        render(&game, &mut surface);

        let commands = surface.commands();
        assert_eq!(
            commands.first(),
            Some(&DrawCommand::ClearRect { x: 0.0, y: 0.0, width: 300.0, height: 400.0 })
        );
        assert!(matches!(commands[1], DrawCommand::FillCircle { radius, .. } if radius == 10.0));
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                x: 120.0,
                y: 368.0,
                width: 60.0,
                height: 16.0,
                color: style::FOREGROUND.to_string(),
            }
        );
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .count();
        assert_eq!(strokes, 24);
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::FillText {
                text: "0".to_string(),
                x: 10.0,
                y: 25.0,
                font: style::SCORE_FONT.to_string(),
                color: style::FOREGROUND.to_string(),
            })
        );
    }

    #[test]
    fn test_game_over_overlay_only() {
        let mut surface = RecordingSurface::new(300.0, 400.0);
        draw_game_over(&mut surface);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillText {
                text: "GAME OVER".to_string(),
                x: 50.0,
                y: 150.0,
                font: "28px \"Arial Black\"".to_string(),
                color: "tomato".to_string(),
            }]
        );
    }
}
