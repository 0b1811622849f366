//! Per-frame simulation
//!
//! All gameplay logic lives here:
//! - One call to [`frame`] per display refresh, constant deltas per call
//! - Stable iteration order (bricks row by row)
//! - Drawing only through the [`Surface`](crate::renderer::Surface) seam

pub mod collision;
pub mod control;
pub mod input;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{detect_brick_collisions, point_in_rect};
pub use control::finish;
pub use input::{FrameInput, InputTracker, Key, KeyError};
pub use motion::{advance, follow_pointer, steer_paddle};
pub use state::{
    Arena, Ball, Brick, BrickGrid, BrickState, GameEvent, GamePhase, GameState, HudLayout,
    InitialValues, Paddle, Score, Tries,
};
pub use tick::{FrameStatus, frame};
