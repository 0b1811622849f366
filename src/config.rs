//! Game configuration
//!
//! Every tunable constant of a session: arena size, entity geometry, start
//! values and colours. Loaded from LocalStorage on the web, defaults natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::Rgba;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid colour {value:?} for {field}: expected #rrggbb")]
    Colour { field: &'static str, value: String },

    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Playfield bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub colour: String,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            x: BALL_START_X,
            y: BALL_START_Y,
            dx: BALL_START_DX,
            dy: BALL_START_DY,
            colour: "#ffb700".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    /// Pixels per frame while an arrow key is held
    pub speed: f32,
    pub colour: String,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            x: PADDLE_START_X,
            y: PADDLE_Y,
            speed: PADDLE_SPEED,
            colour: "#00c3ff".to_string(),
        }
    }
}

/// Brick grid layout. Brick `(column, row)` sits at
/// `(offset_left + column * (width + padding), offset_top + row * (height + padding))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub columns: usize,
    pub rows: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
    pub colour: String,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
            colour: "#a16ad4".to_string(),
        }
    }
}

/// Score label and points per brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub multiplier: u32,
    pub x: f32,
    pub y: f32,
    pub colour: String,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            multiplier: SCORE_MULTIPLIER,
            x: 120.0,
            y: 20.0,
            colour: "#000000".to_string(),
        }
    }
}

/// Tries label and starting lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriesConfig {
    pub start: u32,
    pub x: f32,
    pub y: f32,
    pub colour: String,
}

impl Default for TriesConfig {
    fn default() -> Self {
        Self {
            start: START_TRIES,
            x: 515.0,
            y: 20.0,
            colour: "#000000".to_string(),
        }
    }
}

/// Resolved colours, parsed once per session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub ball: Rgba,
    pub paddle: Rgba,
    pub brick: Rgba,
    pub score: Rgba,
    pub tries: Rgba,
}

/// Complete session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickConfig,
    pub score: ScoreConfig,
    pub tries: TriesConfig,
}

impl GameConfig {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "brick_breaker_config";

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Score that clears the board. Fails if it does not fit a `u32`.
    pub fn max_score(&self) -> Result<u32, ConfigError> {
        self.bricks
            .columns
            .checked_mul(self.bricks.rows)
            .and_then(|bricks| u32::try_from(bricks).ok())
            .and_then(|bricks| bricks.checked_mul(self.score.multiplier))
            .ok_or(ConfigError::Invalid {
                field: "score.multiplier",
                reason: "board-clearing score overflows",
            })
    }

    /// Check geometry and colours
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("ball.x", self.ball.x),
            ("ball.y", self.ball.y),
            ("ball.dx", self.ball.dx),
            ("ball.dy", self.ball.dy),
            ("paddle.x", self.paddle.x),
            ("paddle.y", self.paddle.y),
            ("paddle.speed", self.paddle.speed),
            ("bricks.padding", self.bricks.padding),
            ("bricks.offset_top", self.bricks.offset_top),
            ("bricks.offset_left", self.bricks.offset_left),
            ("score.x", self.score.x),
            ("score.y", self.score.y),
            ("tries.x", self.tries.x),
            ("tries.y", self.tries.y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let positive = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("ball.radius", self.ball.radius),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }
        if self.paddle.speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "paddle.speed",
                reason: "must not be negative",
            });
        }
        if self.bricks.columns == 0 || self.bricks.rows == 0 {
            return Err(ConfigError::Invalid {
                field: "bricks",
                reason: "grid needs at least one column and one row",
            });
        }
        if self.score.multiplier == 0 {
            return Err(ConfigError::Invalid {
                field: "score.multiplier",
                reason: "must be at least 1",
            });
        }
        if self.tries.start == 0 {
            return Err(ConfigError::Invalid {
                field: "tries.start",
                reason: "must be at least 1",
            });
        }
        self.max_score()?;

        let (w, h) = (self.arena.width, self.arena.height);
        let ball = &self.ball;
        if ball.x - ball.radius < 0.0
            || ball.x + ball.radius > w
            || ball.y - ball.radius < 0.0
            || ball.y + ball.radius > h
        {
            return Err(ConfigError::Invalid {
                field: "ball",
                reason: "start position must keep the ball inside the arena",
            });
        }
        let paddle = &self.paddle;
        if paddle.x < 0.0
            || paddle.x + paddle.width > w
            || paddle.y < 0.0
            || paddle.y + paddle.height > h
        {
            return Err(ConfigError::Invalid {
                field: "paddle",
                reason: "must lie inside the arena",
            });
        }

        self.palette().map(|_| ())
    }

    /// Parse all colour strings
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            ball: parse_colour("ball.colour", &self.ball.colour)?,
            paddle: parse_colour("paddle.colour", &self.paddle.colour)?,
            brick: parse_colour("bricks.colour", &self.bricks.colour)?,
            score: parse_colour("score.colour", &self.score.colour)?,
            tries: parse_colour("tries.colour", &self.tries.colour)?,
        })
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No config store on native, using defaults ({})", Self::STORAGE_KEY);
        Self::default()
    }
}

/// Parse `#rrggbb` into linear-unaware RGBA (alpha 1.0)
fn parse_colour(field: &'static str, value: &str) -> Result<Rgba, ConfigError> {
    let bad = || ConfigError::Colour {
        field,
        value: value.to_string(),
    };
    let hex = value.strip_prefix('#').ok_or_else(bad)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|c| c as f32 / 255.0)
            .map_err(|_| bad())
    };
    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}
