//! Game state and core simulation types
//!
//! Everything one frame reads or writes lives in [`GameState`], which is
//! passed by reference into each subsystem.

use glam::Vec2;

use crate::config::{ConfigError, GameConfig, Palette};

/// Current phase of the session. `Win` and `Lose` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Win,
    Lose,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        match self {
            GamePhase::Playing => false,
            GamePhase::Win | GamePhase::Lose => true,
        }
    }

    /// Message shown to the player when the session ends
    pub fn message(self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Win => Some("Yay you won!"),
            GamePhase::Lose => Some("Sorry, game over!"),
        }
    }
}

/// Something that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickHit { column: usize, row: usize },
    PaddleBounce,
    TryLost { remaining: u32 },
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (never changes)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per frame under key control
    pub speed: f32,
}

impl Paddle {
    /// Ball x strictly between the paddle's left and right edges
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickState {
    NotHit,
    Hit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub state: BrickState,
}

impl Brick {
    pub fn is_standing(&self) -> bool {
        self.state == BrickState::NotHit
    }
}

/// Fixed columns x rows grid of bricks, stored row-major.
///
/// Built once per session; only brick state changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    /// Brick size shared by every cell
    pub size: Vec2,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(config: &GameConfig) -> Self {
        let layout = &config.bricks;
        let step = Vec2::new(layout.width + layout.padding, layout.height + layout.padding);
        let origin = Vec2::new(layout.offset_left, layout.offset_top);

        let mut bricks = Vec::with_capacity(layout.columns * layout.rows);
        for row in 0..layout.rows {
            for column in 0..layout.columns {
                bricks.push(Brick {
                    column,
                    row,
                    pos: origin + step * Vec2::new(column as f32, row as f32),
                    state: BrickState::NotHit,
                });
            }
        }

        Self {
            columns: layout.columns,
            rows: layout.rows,
            size: Vec2::new(layout.width, layout.height),
            bricks,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column < self.columns && row < self.rows {
            self.bricks.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column < self.columns && row < self.rows {
            self.bricks.get_mut(row * self.columns + column)
        } else {
            None
        }
    }

    /// All bricks, row by row
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Bricks still in play
    pub fn standing(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_standing())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    /// Points per brick
    pub multiplier: u32,
    /// Board-clearing score; reaching it wins
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tries {
    pub value: u32,
}

/// Starting values captured once per session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValues {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub paddle_pos: Vec2,
    pub score: u32,
    pub tries: u32,
}

/// Arena bounds (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// Where the score and tries labels go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    pub score_pos: Vec2,
    pub tries_pos: Vec2,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: Score,
    pub tries: Tries,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub frame_count: u64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    /// Render colours (not gameplay-affecting)
    pub palette: Palette,
    pub hud: HudLayout,
    initial: InitialValues,
}

impl GameState {
    /// Build a fresh session from a validated config
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.palette()?;

        let initial = InitialValues {
            ball_pos: Vec2::new(config.ball.x, config.ball.y),
            ball_vel: Vec2::new(config.ball.dx, config.ball.dy),
            paddle_pos: Vec2::new(config.paddle.x, config.paddle.y),
            score: 0,
            tries: config.tries.start,
        };

        Ok(Self {
            arena: Arena {
                width: config.arena.width,
                height: config.arena.height,
            },
            ball: Ball {
                pos: initial.ball_pos,
                vel: initial.ball_vel,
                radius: config.ball.radius,
            },
            paddle: Paddle {
                x: initial.paddle_pos.x,
                y: initial.paddle_pos.y,
                width: config.paddle.width,
                height: config.paddle.height,
                speed: config.paddle.speed,
            },
            bricks: BrickGrid::new(config),
            score: Score {
                value: initial.score,
                multiplier: config.score.multiplier,
                max: config.max_score()?,
            },
            tries: Tries {
                value: initial.tries,
            },
            phase: GamePhase::Playing,
            frame_count: 0,
            events: Vec::new(),
            palette,
            hud: HudLayout {
                score_pos: Vec2::new(config.score.x, config.score.y),
                tries_pos: Vec2::new(config.tries.x, config.tries.y),
            },
            initial,
        })
    }

    pub fn initial(&self) -> &InitialValues {
        &self.initial
    }

    /// Put ball and paddle back at their starting positions.
    /// Score and tries are left alone.
    pub fn reset_positions(&mut self) {
        self.ball.pos = self.initial.ball_pos;
        self.ball.vel = self.initial.ball_vel;
        self.paddle.x = self.initial.paddle_pos.x;
    }

    /// Take events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
