//! Surface that records draw calls instead of rasterizing them

use serde::{Deserialize, Serialize};

use super::Surface;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillCircle { x: f32, y: f32, radius: f32, color: String },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: String },
    StrokeRect { x: f32, y: f32, width: f32, height: f32 },
    FillText { text: String, x: f32, y: f32, font: String, color: String },
}

/// In-memory surface for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    viewport_left: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Place the surface at a horizontal offset in the virtual viewport
    pub fn with_viewport_left(mut self, left: f32) -> Self {
        self.viewport_left = left;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands since the last clear of the whole surface
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn viewport_left(&self) -> f32 {
        self.viewport_left
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
