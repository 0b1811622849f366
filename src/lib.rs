//! Brick Breaker - a single-screen Breakout game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (motion, collisions, score, game state)
//! - `renderer`: Render surface seam, shape tessellation and WebGPU pipeline
//! - `config`: Data-driven game constants
//! - `session`: Host glue (input snapshots, terminal notification, restart)

pub mod config;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{Notifier, Session};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (origin top-left, +y down)
    pub const ARENA_WIDTH: f32 = 680.0;
    pub const ARENA_HEIGHT: f32 = 440.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 240.0;
    pub const BALL_START_Y: f32 = 290.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_START_X: f32 = 300.0;
    pub const PADDLE_Y: f32 = 410.0;
    /// Pixels moved per frame while an arrow key is held
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Brick grid defaults (7 across, 5 down)
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Points per brick
    pub const SCORE_MULTIPLIER: u32 = 10;
    /// Starting tries
    pub const START_TRIES: u32 = 3;
}
