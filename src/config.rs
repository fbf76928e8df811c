//! Gameplay tuning
//!
//! Defaults reproduce the classic layout. A JSON override can be supplied by
//! the host page (see `platform::web`); partial documents fill the rest from
//! defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a configuration override
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for `GameConfig`
    Parse(serde_json::Error),
    /// The document parsed but describes an unplayable game
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Ball spawn and size parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub spawn_y: f32,
    pub spawn_x_min: f32,
    pub spawn_x_max: f32,
    /// Per-axis speed magnitude, sampled independently for vx and vy
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            spawn_y: BALL_SPAWN_Y,
            spawn_x_min: BALL_SPAWN_X_MIN,
            spawn_x_max: BALL_SPAWN_X_MAX,
            speed_min: BALL_SPEED_MIN,
            speed_max: BALL_SPEED_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    pub bottom_offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    pub row_height: f32,
    /// Occupancy grid, row-major (non-zero = block)
    pub grid: Vec<Vec<u8>>,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            row_height: BLOCK_HEIGHT,
            grid: BLOCK_GRID.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub blocks: BlockConfig,
}

impl GameConfig {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ball = &self.ball;
        if ball.radius <= 0.0 {
            return Err(ConfigError::Invalid("ball radius must be positive"));
        }
        if ball.spawn_x_min > ball.spawn_x_max {
            return Err(ConfigError::Invalid("ball spawn x range is inverted"));
        }
        if ball.speed_min <= 0.0 || ball.speed_min > ball.speed_max {
            return Err(ConfigError::Invalid("ball speed range must be positive and ordered"));
        }

        let paddle = &self.paddle;
        if paddle.width <= 0.0 || paddle.height <= 0.0 {
            return Err(ConfigError::Invalid("paddle size must be positive"));
        }

        let blocks = &self.blocks;
        if blocks.row_height <= 0.0 {
            return Err(ConfigError::Invalid("block row height must be positive"));
        }
        if let Some(first) = blocks.grid.first() {
            if first.is_empty() {
                return Err(ConfigError::Invalid("block grid rows must not be empty"));
            }
            if blocks.grid.iter().any(|row| row.len() != first.len()) {
                return Err(ConfigError::Invalid("block grid rows must have equal length"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ball.radius, 10.0);
        assert_eq!(config.paddle.width, 60.0);
        assert_eq!(config.blocks.grid.len(), 6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "paddle": { "width": 80 } }"#).unwrap();
        assert_eq!(config.paddle.width, 80.0);
        assert_eq!(config.paddle.height, PADDLE_HEIGHT);
        assert_eq!(config.ball, BallConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = GameConfig::from_json(r#"{ "blocks": { "grid": [[1, 1], [1]] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let mut config = GameConfig::default();
        config.ball.speed_min = 6.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_grid_allowed() {
        let mut config = GameConfig::default();
        config.blocks.grid.clear();
        assert!(config.validate().is_ok());
    }
}
